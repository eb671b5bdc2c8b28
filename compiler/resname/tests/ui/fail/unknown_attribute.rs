//! Error: Unknown struct-level attribute.

use resname::Record;

#[derive(Record)]
#[resname(kind = "Book")]
pub struct Book {
    pub book: String,
}

fn main() {}
