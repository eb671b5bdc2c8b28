use resname::{Record, Resource};

#[derive(Record, Default)]
#[resname(pattern = "types/{type}")]
struct Kind {
    r#type: String,
    #[resname(key = "alias, other_alias")]
    alias: String,
}

fn main() {
    let fields = <Kind as Record>::fields();
    assert_eq!(fields[0].name(), "type");
    assert_eq!(fields[1].keys(), &["alias", "other_alias"]);
    assert_eq!(Kind::DESCRIPTOR.resource_type(), "Kind");
}
