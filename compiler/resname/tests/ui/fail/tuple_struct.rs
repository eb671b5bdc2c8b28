//! Error: Record derive only supports structs with named fields.

use resname::Record;

#[derive(Record)]
pub struct Pair(u32, u32);

fn main() {}
