//! Error: Record derive only supports structs.

use resname::Record;

#[derive(Record)]
pub enum NotAStruct { Variant }

fn main() {}
