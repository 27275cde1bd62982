// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn attribute_names_are_data_attributes() {
    for attr in [SEQUENCE_ATTR, SCENE_ATTR, CANVAS_ATTR, SNAP_ATTR, STATE_ATTR] {
        assert!(attr.starts_with("data-"), "{attr}");
        assert!(!attr.contains(' '));
    }
}

#[test]
fn selectors_built_from_attributes_are_distinct() {
    let mut names = vec![SEQUENCE_ATTR, SCENE_ATTR, CANVAS_ATTR, SNAP_ATTR, STATE_ATTR];
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presentation_tuning_is_sane() {
    assert!(HIDDEN_OPACITY > 0.0 && HIDDEN_OPACITY < 0.01);
    assert!(WAKE_DT_SEC > 0.0 && WAKE_DT_SEC <= 0.05);
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
