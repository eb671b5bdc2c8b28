use resname::{Field, Namer, NamerOptions, Record};

#[derive(Record, Default)]
struct Wrapper<T: Field + Default + 'static> {
    #[resname(key = "value")]
    inner: T,
}

fn main() {
    let namer = Namer::<Wrapper<u32>>::new(&["values/{value}"], NamerOptions::default()).unwrap();
    let mut parsed = Wrapper::<u32>::default();
    assert_eq!(namer.parse("values/7", &mut parsed).unwrap(), 0);
    assert_eq!(parsed.inner, 7);
}
