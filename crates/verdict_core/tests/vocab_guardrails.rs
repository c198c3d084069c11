use std::collections::HashMap;

use verdict_core::OutcomeKind;
use verdict_core::kinds::{self, KINDS};

#[test]
fn kinds_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, OutcomeKind> = HashMap::new();

    for info in KINDS {
        assert_eq!(
            kinds::from_str(info.canonical),
            Some(info.id),
            "kind canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(kinds::as_str(info.id), info.canonical, "kind as_str mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate kind spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn registry_follows_reporting_order() {
    let ids: Vec<OutcomeKind> = KINDS.iter().map(|k| k.id).collect();
    assert_eq!(ids, OutcomeKind::ALL.to_vec());

    for kind in OutcomeKind::ALL {
        assert_eq!(kinds::info_for(kind).id, kind);
    }
}

#[test]
fn tally_labels_are_distinct() {
    let mut labels: Vec<&str> = KINDS.iter().map(|k| k.tally).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), KINDS.len());
}

#[test]
fn unknown_spelling_does_not_resolve() {
    assert_eq!(kinds::from_str("Pass"), None);
    assert_eq!(kinds::from_str("skipped"), None);
}
