//! End-to-end naming scenarios against the standard resource fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{init_tracing, NestedResource, ParentOne, ParentTwo, StandardNamedResource};
use pretty_assertions::assert_eq;
use resname::{
    as_pattern_index, FormatOptions, FormatTarget, Namer, NamerError, NamerOptions, Resource,
};

fn standard() -> Namer<StandardNamedResource> {
    init_tracing();
    Namer::for_resource(NamerOptions::default()).unwrap()
}

fn nested() -> Namer<NestedResource> {
    init_tracing();
    Namer::for_resource(NamerOptions::default()).unwrap()
}

fn record(parent_one: i64, parent_two: i64, parent_three: i64, id: i64) -> StandardNamedResource {
    StandardNamedResource {
        id,
        parent_one,
        parent_two,
        parent_three,
    }
}

// === Standard resource ===

#[test]
fn try_all_prefers_the_first_declared_pattern() {
    let namer = standard();
    let record = record(1, 2, 0, 4);
    assert_eq!(
        namer.format(&record, as_pattern_index(-1)).unwrap(),
        "standardNamedResources/4"
    );
    assert_eq!(
        namer.format(&record, as_pattern_index(1)).unwrap(),
        "parentOnes/1/parentTwos/2/standardNamedResources/4"
    );
}

#[test]
fn every_pattern_round_trips() {
    let namer = standard();
    let full = record(1, 2, 3, 4);
    for index in namer.patterns().indices() {
        let name = namer
            .format(&full, as_pattern_index(isize::try_from(index).unwrap()))
            .unwrap_or_else(|err| panic!("pattern {index}: {err}"));

        let mut parsed = StandardNamedResource::default();
        assert_eq!(namer.parse(&name, &mut parsed).unwrap(), index, "{name}");

        // Only the fields the pattern names come back.
        let template = namer.patterns().get(index).unwrap().template();
        for key in template.keys() {
            let value = match key {
                "standard_named_resource" => parsed.id,
                "parent_one" => parsed.parent_one,
                "parent_two" => parsed.parent_two,
                "parent_three" => parsed.parent_three,
                other => panic!("unexpected key {other}"),
            };
            assert_ne!(value, 0, "{key} in {name}");
        }
    }
}

#[test]
fn parent_names_follow_the_pattern() {
    let namer = standard();
    let full = record(1, 2, 3, 4);
    let parents: Vec<_> = (1..5)
        .map(|index| namer.format_parent(&full, as_pattern_index(index)).unwrap())
        .collect();
    assert_eq!(
        parents,
        vec![
            "parentOnes/1/parentTwos/2",
            "parentOnes/1/parentThrees/3",
            "parentOnes/1",
            "parentOnes/1/parentTwos/2/parentThrees/3",
        ]
    );
}

#[test]
fn root_pattern_has_no_parent() {
    let namer = standard();
    let err = namer
        .format_parent(&record(1, 2, 3, 4), as_pattern_index(0))
        .unwrap_err();
    assert!(matches!(
        err,
        NamerError::NoPatternFound {
            target: FormatTarget::Parent,
            last: None,
            ..
        }
    ));
}

#[test]
fn parent_round_trips_through_parse_parent() {
    let namer = standard();
    let full = record(1, 2, 3, 4);
    for index in 1..5 {
        let parent = namer.format_parent(&full, as_pattern_index(index)).unwrap();
        let mut parsed = StandardNamedResource::default();
        let matched = namer.parse_parent(&parent, &mut parsed).unwrap();
        assert_eq!(
            namer.format_parent(&parsed, as_pattern_index(isize::try_from(matched).unwrap())).unwrap(),
            parent
        );
        assert_eq!(parsed.id, 0);
    }
}

#[test]
fn zero_record_formats_nothing() {
    let namer = standard();
    let err = namer
        .format(&StandardNamedResource::default(), FormatOptions::all())
        .unwrap_err();
    let NamerError::NoPatternFound { target, last, .. } = err else {
        panic!("expected NoPatternFound");
    };
    assert_eq!(target, FormatTarget::Name);
    assert!(matches!(
        last.as_deref(),
        Some(NamerError::InvalidFieldValue { key, .. }) if key == "parent_one"
    ));
}

#[test]
fn wildcard_parse_keeps_prior_values() {
    let namer = standard();
    let mut parsed = record(0, 0, 0, 9);
    assert_eq!(
        namer.parse("parentOnes/5/standardNamedResources/-", &mut parsed).unwrap(),
        3
    );
    assert_eq!(parsed, record(5, 0, 0, 9));
}

#[test]
fn extra_patterns_extend_the_declared_set() {
    init_tracing();
    let options = NamerOptions::default()
        .with_extra_patterns(["parentThrees/{parent_three}/standardNamedResources/{standard_named_resource}"]);
    let namer = Namer::<StandardNamedResource>::new(StandardNamedResource::DESCRIPTOR.patterns(), options)
        .unwrap();

    let only_three = record(0, 0, 3, 4);
    assert_eq!(
        namer.format(&only_three, as_pattern_index(100)).unwrap(),
        "parentThrees/3/standardNamedResources/4"
    );
    assert_eq!(
        namer.format_parent(&only_three, FormatOptions::all()).unwrap(),
        "parentThrees/3"
    );

    let mut parsed = StandardNamedResource::default();
    assert_eq!(
        namer.parse("parentThrees/3/standardNamedResources/4", &mut parsed).unwrap(),
        100
    );
    assert_eq!(parsed, only_three);
}

// === Nested resource ===

#[test]
fn nested_parents_format_through_pointers() {
    let namer = nested();
    let resource = NestedResource {
        id: "four".to_owned(),
        parent: Some(ParentTwo {
            id: 2,
            parent: Some(Box::new(ParentOne { id: 1 })),
        }),
        etag: "ignored".to_owned(),
    };
    assert_eq!(
        namer.format(&resource, as_pattern_index(1)).unwrap(),
        "parentOnes/1/parentTwos/2/standardNamedResources/four"
    );
    assert_eq!(
        namer.format_parent(&resource, FormatOptions::all()).unwrap(),
        "parentOnes/1/parentTwos/2"
    );
}

#[test]
fn missing_ancestors_skip_patterns() {
    let namer = nested();
    let resource = NestedResource {
        id: "four".to_owned(),
        parent: Some(ParentTwo { id: 2, parent: None }),
        ..NestedResource::default()
    };
    assert!(matches!(
        namer.format_parent(&resource, FormatOptions::all()),
        Err(NamerError::NoPatternFound { .. })
    ));
}

#[test]
fn parse_allocates_nested_parents() {
    let namer = nested();
    let mut parsed = NestedResource::default();
    assert_eq!(
        namer.parse("parentOnes/1/standardNamedResources/four", &mut parsed).unwrap(),
        2
    );
    assert_eq!(
        parsed,
        NestedResource {
            id: "four".to_owned(),
            parent: Some(ParentTwo {
                id: 0,
                parent: Some(Box::new(ParentOne { id: 1 })),
            }),
            etag: String::new(),
        }
    );
}

#[test]
fn parse_parent_of_the_root_touches_nothing() {
    let namer = nested();
    let mut parsed = NestedResource::default();
    assert_eq!(namer.parse_parent("", &mut parsed).unwrap(), 0);
    assert_eq!(parsed, NestedResource::default());
}

#[test]
fn namers_are_shareable_across_threads() {
    let namer = standard();
    let handles: Vec<_> = (1..=4)
        .map(|id| {
            let namer = namer.clone();
            std::thread::spawn(move || namer.format(&record(1, 2, 3, id), as_pattern_index(1)).unwrap())
        })
        .collect();
    let names: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert_eq!(names[3], "parentOnes/1/parentTwos/2/standardNamedResources/4");
}
