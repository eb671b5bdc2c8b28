//! Error: Unknown field-level attribute.

use resname::Record;

#[derive(Record)]
pub struct Book {
    #[resname(rename = "title")]
    pub book: String,
}

fn main() {}
