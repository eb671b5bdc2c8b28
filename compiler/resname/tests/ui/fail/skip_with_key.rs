//! Error: A skipped field cannot bind keys.

use resname::Record;

#[derive(Record)]
pub struct Book {
    #[resname(skip, key = "book")]
    pub id: String,
}

fn main() {}
