//! Property-based tests for registry resolution.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated names, segments, and root rebinding sequences.

use std::path::PathBuf;

use proptest::prelude::*;

use dirmap::fs::RecordingDirCreator;
use dirmap::{Workspace, WorkspaceError};

/// Strategy for generating a plain path segment.
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

/// Strategy for segments that may include dot components.
fn segment_with_dots() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => segment(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

/// Strategy for registrable names (never `root`).
fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_filter("root is reserved", |n| n != "root")
}

fn workspace() -> Workspace<RecordingDirCreator> {
    Workspace::with_creator("/base", RecordingDirCreator::new()).unwrap()
}

proptest! {
    /// resolve(name, s1..sn) equals get_path(name) joined with s1..sn.
    #[test]
    fn resolve_equals_join_of_get_path(
        name in name(),
        registered in prop::collection::vec(segment(), 0..5),
        extra in prop::collection::vec(segment(), 0..5),
    ) {
        let mut ws = workspace();
        ws.set_path(&name, &registered).unwrap();

        let expected = extra
            .iter()
            .fold(ws.get_path(&name).unwrap(), |acc, s| acc.join(s));
        prop_assert_eq!(ws.resolve(&name, &extra).unwrap(), expected);
    }

    /// Extra segments never leave the named location, even when absolute.
    #[test]
    fn resolve_stays_under_name(
        name in name(),
        registered in prop::collection::vec(segment(), 0..4),
        extra in prop::collection::vec((any::<bool>(), segment()), 1..5),
    ) {
        let mut ws = workspace();
        ws.set_path(&name, &registered).unwrap();

        let extra: Vec<String> = extra
            .into_iter()
            .map(|(anchored, s)| if anchored { format!("/{s}") } else { s })
            .collect();
        let base = ws.get_path(&name).unwrap();
        let resolved = ws.resolve(&name, &extra).unwrap();
        prop_assert!(resolved.starts_with(&base), "{} escaped {}", resolved.display(), base.display());
        prop_assert_eq!(resolved.components().count(), base.components().count() + extra.len());
    }

    /// The root stays absolute across any sequence of rebinds.
    #[test]
    fn root_always_absolute(
        rebinds in prop::collection::vec(prop::collection::vec(segment_with_dots(), 0..4), 0..8),
    ) {
        let mut ws = workspace();
        for segments in &rebinds {
            ws.set_path("root", segments).unwrap();
            let root = ws.get_path("root").unwrap();
            prop_assert!(root.is_absolute(), "root not absolute: {}", root.display());
        }
    }

    /// Names resolve against the root current at query time.
    #[test]
    fn rebinding_root_moves_names(
        name in name(),
        fragment in prop::collection::vec(segment(), 1..4),
        new_root in prop::collection::vec(segment(), 1..4),
    ) {
        let mut ws = workspace();
        ws.set_path(&name, &fragment).unwrap();
        ws.set_path("root", &new_root).unwrap();

        let relative: PathBuf = fragment.iter().collect();
        prop_assert_eq!(ws.get_path(&name).unwrap(), ws.root().join(relative));
    }

    /// Unregistered names always fail with NotFound carrying the name.
    #[test]
    fn unregistered_names_not_found(name in name()) {
        let ws = workspace();
        match ws.get_path(&name) {
            Err(WorkspaceError::NotFound { name: missing }) => prop_assert_eq!(missing, name),
            other => prop_assert!(false, "expected NotFound, got {:?}", other),
        }
    }

    /// names() yields root then every distinct name in first-registration order.
    #[test]
    fn names_in_registration_order(names in prop::collection::vec(name(), 0..10)) {
        let mut ws = workspace();
        let mut expected = vec!["root".to_string()];
        for name in &names {
            ws.set_path(name, &[name.as_str()]).unwrap();
            if !expected.contains(name) {
                expected.push(name.clone());
            }
        }

        let actual: Vec<String> = ws.names().map(|n| n.to_string()).collect();
        prop_assert_eq!(&actual, &expected);

        let entry_names: Vec<String> = ws.entries().map(|(n, _)| n.to_string()).collect();
        prop_assert_eq!(entry_names, expected);
    }

    /// A NUL anywhere in the segments is reported at its position.
    #[test]
    fn nul_segment_reported_by_position(
        before in prop::collection::vec(segment(), 0..5),
        after in prop::collection::vec(segment(), 0..5),
    ) {
        let mut segments = before.clone();
        segments.push("bad\0segment".to_string());
        segments.extend(after);

        let mut ws = workspace();
        let err = ws.set_path("x", &segments).unwrap_err();
        match err {
            WorkspaceError::Validation(dirmap::ValidationError::InvalidSegment { index, .. }) => {
                prop_assert_eq!(index, before.len());
            }
            other => prop_assert!(false, "expected InvalidSegment, got {:?}", other),
        }
        prop_assert!(!ws.contains("x"));
    }
}
