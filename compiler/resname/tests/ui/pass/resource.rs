use resname::{Namer, NamerOptions, Record, Resource};

#[derive(Record, Default)]
#[resname(
    resource = "library.example.com/Book",
    pattern = "shelves/{shelf}/books/{book}",
    pattern = "books/{book}"
)]
struct Book {
    #[resname(key = "book")]
    id: u64,
    shelf: Option<Shelf>,
}

#[derive(Record, Default)]
struct Shelf {
    #[resname(key = "shelf")]
    id: String,
}

fn main() {
    assert_eq!(Book::DESCRIPTOR.resource_type(), "library.example.com/Book");
    assert_eq!(Book::DESCRIPTOR.patterns().len(), 2);
    let namer = Namer::<Book>::for_resource(NamerOptions::default()).unwrap();
    assert_eq!(namer.patterns().len(), 2);
}
