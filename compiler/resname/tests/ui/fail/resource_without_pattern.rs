//! Error: `resource` needs at least one `pattern`.

use resname::Record;

#[derive(Record)]
#[resname(resource = "library.example.com/Book")]
pub struct Book {
    pub book: String,
}

fn main() {}
