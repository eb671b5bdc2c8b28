//! Shared fixtures for the integration tests.

#![allow(dead_code, reason = "each test binary uses a subset of the fixtures")]

use std::sync::Once;

use resname::Record;

static TRACING_INIT: Once = Once::new();

/// Install a test-writer subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=resname=debug` or `RUST_LOG=resname=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[derive(Record, Clone, Debug, Default, PartialEq)]
#[resname(
    resource = "test.resname.dev/StandardNamedResource",
    pattern = "standardNamedResources/{standard_named_resource}",
    pattern = "parentOnes/{parent_one}/parentTwos/{parent_two}/standardNamedResources/{standard_named_resource}",
    pattern = "parentOnes/{parent_one}/parentThrees/{parent_three}/standardNamedResources/{standard_named_resource}",
    pattern = "parentOnes/{parent_one}/standardNamedResources/{standard_named_resource}",
    pattern = "parentOnes/{parent_one}/parentTwos/{parent_two}/parentThrees/{parent_three}/standardNamedResources/{standard_named_resource}"
)]
pub struct StandardNamedResource {
    #[resname(key = "standard_named_resource")]
    pub id: i64,
    pub parent_one: i64,
    pub parent_two: i64,
    pub parent_three: i64,
}

/// The same resource with its ancestors held as nested, optional records.
#[derive(Record, Clone, Debug, Default, PartialEq)]
#[resname(
    pattern = "standardNamedResources/{standard_named_resource}",
    pattern = "parentOnes/{parent_one}/parentTwos/{parent_two}/standardNamedResources/{standard_named_resource}",
    pattern = "parentOnes/{parent_one}/standardNamedResources/{standard_named_resource}"
)]
pub struct NestedResource {
    #[resname(key = "standard_named_resource")]
    pub id: String,
    pub parent: Option<ParentTwo>,
    #[resname(skip)]
    pub etag: String,
}

#[derive(Record, Clone, Debug, Default, PartialEq)]
pub struct ParentTwo {
    #[resname(key = "parent_two")]
    pub id: u32,
    pub parent: Option<Box<ParentOne>>,
}

#[derive(Record, Clone, Debug, Default, PartialEq)]
pub struct ParentOne {
    #[resname(key = "parent_one")]
    pub id: u64,
}
