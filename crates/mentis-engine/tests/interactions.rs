use mentis_engine::interactions::{check_interactions, interacts_with};
use mentis_engine::KnowledgeBase;

fn meds(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn known_pair_is_reported_with_original_names() {
    let kb = KnowledgeBase::reference();

    let found = check_interactions(&meds(&["Sertraline 50mg", "Tramadol"]), &kb.medications);

    assert_eq!(found, ["Sertraline 50mg + Tramadol: Potential interaction"]);
}

#[test]
fn lookup_is_keyed_by_the_first_medication() {
    let kb = KnowledgeBase::reference();

    let forward = check_interactions(&meds(&["Lithium 300mg", "Ibuprofen"]), &kb.medications);
    let reverse = check_interactions(&meds(&["Ibuprofen", "Lithium 300mg"]), &kb.medications);

    assert_eq!(forward, ["Lithium 300mg + Ibuprofen: Potential interaction"]);
    assert!(reverse.is_empty());
}

#[test]
fn every_pair_is_checked_once() {
    let kb = KnowledgeBase::reference();

    let found = check_interactions(
        &meds(&["sertraline", "lithium", "phenelzine", "ibuprofen"]),
        &kb.medications,
    );

    assert_eq!(
        found,
        [
            "sertraline + phenelzine: Potential interaction",
            "lithium + ibuprofen: Potential interaction",
        ]
    );
}

#[test]
fn fewer_than_two_medications_yields_nothing() {
    let kb = KnowledgeBase::reference();

    assert!(check_interactions(&[], &kb.medications).is_empty());
    assert!(check_interactions(&meds(&["sertraline"]), &kb.medications).is_empty());
}

#[test]
fn unreferenced_medications_are_ignored() {
    let kb = KnowledgeBase::reference();

    let found = check_interactions(&meds(&["Vitamin D", "Omega-3"]), &kb.medications);
    assert!(found.is_empty());
}

#[test]
fn interaction_terms_match_case_insensitively() {
    let kb = KnowledgeBase::reference();
    let alprazolam = kb
        .medications
        .iter()
        .find(|m| m.key == "alprazolam")
        .unwrap();

    assert!(interacts_with(alprazolam, "OxyCODONE 5mg"));
    assert!(!interacts_with(alprazolam, "Sertraline"));
}
