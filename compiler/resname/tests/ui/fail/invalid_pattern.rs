//! Error: Declared patterns are checked against the template grammar.

use resname::Record;

#[derive(Record)]
#[resname(pattern = "shelves/{shelf}/{book}")]
pub struct Book {
    pub shelf: String,
    pub book: String,
}

fn main() {}
