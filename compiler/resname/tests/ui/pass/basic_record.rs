use resname::{Namer, NamerOptions, Record};

#[derive(Record, Default)]
struct Book {
    #[resname(key = "book")]
    id: i64,
    shelf: String,
    #[resname(skip)]
    etag: Vec<u8>,
}

fn main() {
    let namer = Namer::<Book>::new(&["shelves/{shelf}/books/{book}"], NamerOptions::default()).unwrap();
    let mut book = Book::default();
    namer.parse("shelves/s1/books/3", &mut book).unwrap();
    assert_eq!(book.id, 3);
    assert!(book.etag.is_empty());
}
