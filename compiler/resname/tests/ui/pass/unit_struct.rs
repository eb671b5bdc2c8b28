use resname::{Namer, NamerOptions, Record};

#[derive(Record)]
#[resname(pattern = "config")]
struct Config;

fn main() {
    assert!(<Config as Record>::fields().is_empty());
    let namer = Namer::<Config>::for_resource(NamerOptions::default()).unwrap();
    assert_eq!(namer.format(&Config, Default::default()).unwrap(), "config");
}
