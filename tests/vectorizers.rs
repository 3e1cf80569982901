//! Unit tests for the dialogue-act and relation vectorizers
//!
//! Verifies sentinel index reservations, unknown-label fallback, the
//! UNRELATED outcome for unlabelled pairs, and the positional alignment
//! between enumerated instances and emitted indices.

use discorp::learning::{
    labels_comment, AllEdus, DialogueActVectorizer, LabelVectorizer, PairSelector, WindowedPairs,
    ROOT, UNK, UNRELATED,
};
use discorp::stac::{Dialogue, Edu, Relation, DIALOGUE_ACTS};

fn dialogue_with_acts() -> Dialogue {
    let mut doc = Dialogue::new("d1");
    let mut e1 = Edu::new("e1", "anyone got wood?");
    e1.dialogue_act = Some("Offer".to_owned());
    doc.edus.push(e1);
    doc.edus.push(Edu::new("e2", "nope"));
    doc
}

#[test]
fn test_dialogue_act_indices() {
    let labeller = DialogueActVectorizer::new(AllEdus, DIALOGUE_ACTS.iter().copied(), 1);
    let docs = vec![dialogue_with_acts()];
    let indices: Vec<usize> = labeller.transform(&docs).collect();
    // "Offer" is the first inventory label; e2 has no act annotated
    assert_eq!(indices, vec![1, 0]);
}

#[test]
fn test_unset_act_is_unknown_sentinel() {
    let mut doc = Dialogue::new("d1");
    doc.edus.push(Edu::new("e1", "hello"));
    let labeller = DialogueActVectorizer::new(AllEdus, DIALOGUE_ACTS.iter().copied(), 1);
    let docs = vec![doc];
    let indices: Vec<usize> = labeller.transform(&docs).collect();
    assert_eq!(indices, vec![labeller.labelset()[UNK]]);
    assert_eq!(labeller.labelset()[UNK], 0);
}

#[test]
fn test_act_labelset_comment() {
    let labeller = DialogueActVectorizer::new(AllEdus, DIALOGUE_ACTS.iter().copied(), 1);
    insta::assert_snapshot!(
        labels_comment(labeller.labelset()),
        @"labels: __UNK__ Offer Counteroffer Accept Refusal Other"
    );
}

#[test]
fn test_unrelated_pair_is_unrelated_sentinel() {
    let mut doc = Dialogue::new("d1");
    doc.edus.push(Edu::new("e1", "one"));
    doc.edus.push(Edu::new("e2", "two"));
    // no relations recorded at all
    let selector = WindowedPairs { window: Some(5) };
    let labeller = LabelVectorizer::new(selector, ["Elaboration"], 3);
    let docs = vec![doc];
    let indices: Vec<usize> = labeller.transform(&docs).collect();
    // pairs: (ROOT, e1), (ROOT, e2), (e1, e2) -- all unrelated here
    assert_eq!(indices, vec![2, 2, 2]);
    assert_eq!(labeller.labelset()[UNRELATED], 2);
}

#[test]
fn test_relation_and_root_indices() {
    let mut doc = Dialogue::new("d1");
    doc.edus.push(Edu::new("e1", "one"));
    doc.edus.push(Edu::new("e2", "two"));
    doc.relations.push(Relation {
        source: "e1".to_owned(),
        target: "e2".to_owned(),
        label: "Elaboration".to_owned(),
    });
    doc.attach_root();

    let selector = WindowedPairs { window: Some(5) };
    let labeller = LabelVectorizer::new(selector, ["Elaboration", "Narration"], 3);
    let docs = vec![doc];
    let indices: Vec<usize> = labeller.transform(&docs).collect();
    // (ROOT, e1) carries the root link, (ROOT, e2) nothing, (e1, e2) Elaboration
    assert_eq!(indices, vec![labeller.labelset()[ROOT], 2, 3]);
}

#[test]
fn test_unknown_recorded_label_falls_back() {
    let mut doc = Dialogue::new("d1");
    doc.edus.push(Edu::new("e1", "one"));
    doc.edus.push(Edu::new("e2", "two"));
    doc.relations.push(Relation {
        source: "e1".to_owned(),
        target: "e2".to_owned(),
        label: "NotARealRelation".to_owned(),
    });
    let selector = WindowedPairs { window: Some(5) };
    let labeller = LabelVectorizer::new(selector, ["Elaboration"], 3);
    let docs = vec![doc];
    let indices: Vec<usize> = labeller.transform(&docs).collect();
    assert_eq!(indices[2], labeller.labelset()[UNK]);
}

#[test]
fn test_indices_align_with_enumerated_pairs() {
    let mut doc = Dialogue::new("d1");
    for i in 1..=5 {
        doc.edus.push(Edu::new(format!("e{}", i), "..."));
    }
    let selector = WindowedPairs { window: Some(2) };
    let labeller = LabelVectorizer::new(selector, ["Elaboration"], 3);
    let docs = vec![doc];
    let count = labeller.transform(&docs).count();
    assert_eq!(count, selector.select(&docs[0]).len());
}

#[test]
fn test_transform_is_lazy_and_finite() {
    let docs: Vec<Dialogue> = Vec::new();
    let labeller = DialogueActVectorizer::new(AllEdus, DIALOGUE_ACTS.iter().copied(), 1);
    assert_eq!(labeller.transform(&docs).count(), 0);
}
