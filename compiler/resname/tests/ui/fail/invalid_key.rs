//! Error: Binding keys must be lower snake case.

use resname::Record;

#[derive(Record)]
pub struct Book {
    #[resname(key = "book, Author")]
    pub id: String,
}

fn main() {}
