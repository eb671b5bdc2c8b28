//! Property-based tests for templates and pattern sets.
//!
//! Generated templates follow the grammar (alternating literal and variable
//! segments, optional trailing singleton literal). For each we check:
//! 1. Scanning a rendered name yields exactly the rendered values
//! 2. A derived parent is a segment prefix of its template
//! 3. The lowest matching index wins in a set

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use resname_pattern::{PatternSet, Template, EXTRA_PATTERN_OFFSET};

// -- Strategies --

fn literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9]{0,10}").expect("valid regex")
}

/// Values never contain `/` and are never the wildcard.
fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_.~]{1,12}").expect("valid regex")
}

/// A valid template together with one value per variable.
fn template_with_values() -> impl Strategy<Value = (String, Vec<String>)> {
    (1usize..6, any::<bool>()).prop_flat_map(|(pairs, singleton)| {
        (
            prop::collection::vec(literal_strategy(), pairs + 1),
            prop::collection::vec(token_strategy(), pairs),
        )
            .prop_map(move |(literals, values)| {
                let mut segments = Vec::new();
                for (i, literal) in literals.iter().take(pairs).enumerate() {
                    segments.push(literal.clone());
                    segments.push(format!("{{key_{i}}}"));
                }
                if singleton {
                    segments.push(literals[pairs].clone());
                }
                (segments.join("/"), values)
            })
    })
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Rendering then scanning recovers the values.
    #[test]
    fn prop_render_scan_round_trip((pattern, values) in template_with_values()) {
        let template = Template::parse(&pattern).unwrap();
        let name = template.render(&values).unwrap();
        let tokens = template.scan(&name).unwrap();
        prop_assert_eq!(tokens.to_vec(), values.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// A parent template is a prefix of the segments it came from.
    #[test]
    fn prop_parent_is_prefix((pattern, _values) in template_with_values()) {
        let template = Template::parse(&pattern).unwrap();
        let parent = template.derive_parent();
        prop_assert!(parent.len() < template.len());
        prop_assert_eq!(parent.len() % 2, 0);
        prop_assert_eq!(parent.segments(), &template.segments()[..parent.len()]);
    }

    /// With duplicate templates, the lowest index always matches first.
    #[test]
    fn prop_lowest_index_wins((pattern, values) in template_with_values(), copies in 1usize..4) {
        let declared = vec![pattern.clone(); copies];
        let set = PatternSet::compile(&declared, &[pattern.as_str()]).unwrap();
        prop_assert_eq!(set.len(), copies + 1);
        prop_assert_eq!(set.get(EXTRA_PATTERN_OFFSET).unwrap().template().as_str(), pattern.as_str());

        let name = set.get(0).unwrap().template().render(&values).unwrap();
        let (matched, _) = set.first_match(&name).unwrap();
        prop_assert_eq!(matched.index(), 0);
    }
}
