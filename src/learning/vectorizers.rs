//! Label vectorizers for dialogue acts and discourse relations
//!
//! A vectorizer maps categorical labels to integer indices over one corpus
//! pass. Reserved sentinel indices cover the labels a corpus cannot
//! enumerate up front: an unknown or unset label, attachment to the
//! synthetic root, and the unrelated outcome for candidate pairs that carry
//! no relation. `transform` produces a lazy, single-use sequence of indices
//! aligned positionally with the feature rows produced elsewhere.

use std::collections::HashMap;

use crate::stac::corpus::{Dialogue, Edu};

/// Sentinel for unknown or unset labels. Always index 0.
pub const UNK: &str = "__UNK__";
/// Sentinel for attachment to the synthetic root.
pub const ROOT: &str = "ROOT";
/// Sentinel for candidate pairs with no recorded relation.
pub const UNRELATED: &str = "UNRELATED";

/// Enumerates the single-EDU instances of a dialogue.
pub trait EduSelector {
    fn select<'d>(&self, doc: &'d Dialogue) -> Vec<&'d Edu>;
}

/// Every EDU of the dialogue, in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEdus;

impl EduSelector for AllEdus {
    fn select<'d>(&self, doc: &'d Dialogue) -> Vec<&'d Edu> {
        doc.edus.iter().collect()
    }
}

/// Enumerates the candidate (source, target) pairs of a dialogue.
pub trait PairSelector {
    fn select<'d>(&self, doc: &'d Dialogue) -> Vec<(&'d Edu, &'d Edu)>;
}

/// Candidate attachments within a positional window.
///
/// For each target EDU this yields the synthetic root first, then every
/// preceding EDU at distance at most `window` (every preceding EDU when no
/// window is set).
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedPairs {
    pub window: Option<usize>,
}

impl PairSelector for WindowedPairs {
    fn select<'d>(&self, doc: &'d Dialogue) -> Vec<(&'d Edu, &'d Edu)> {
        let mut pairs = Vec::new();
        for (j, target) in doc.edus.iter().enumerate() {
            pairs.push((Edu::root(), target));
            for (i, source) in doc.edus.iter().enumerate().take(j) {
                if self.window.map(|w| j - i <= w).unwrap_or(true) {
                    pairs.push((source, target));
                }
            }
        }
        pairs
    }
}

fn build_labelset<L, T>(labels: L, base: usize) -> HashMap<String, usize>
where
    L: IntoIterator<Item = T>,
    T: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label.into(), base + i))
        .collect()
}

/// Dialogue act extractor.
///
/// Labels map to `base..base + n`; index 0 is reserved for [`UNK`], which
/// also covers EDUs whose act was never annotated. `base` must leave room
/// for the reserved index.
pub struct DialogueActVectorizer<S> {
    selector: S,
    labelset: HashMap<String, usize>,
}

impl<S: EduSelector> DialogueActVectorizer<S> {
    pub fn new<L, T>(selector: S, labels: L, base: usize) -> Self
    where
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut labelset = build_labelset(labels, base);
        labelset.insert(UNK.to_owned(), 0);
        DialogueActVectorizer { selector, labelset }
    }

    /// The label-to-index map, sentinels included.
    pub fn labelset(&self) -> &HashMap<String, usize> {
        &self.labelset
    }

    fn index(&self, label: &str) -> usize {
        self.labelset.get(label).copied().unwrap_or(0)
    }

    /// One label index per instance extracted from `documents`.
    pub fn transform<'a>(&'a self, documents: &'a [Dialogue]) -> impl Iterator<Item = usize> + 'a {
        documents.iter().flat_map(move |doc| {
            self.selector
                .select(doc)
                .into_iter()
                .map(|edu| self.index(edu.dialogue_act.as_deref().unwrap_or(UNK)))
                .collect::<Vec<_>>()
        })
    }
}

/// Relation label extractor over candidate EDU pairs.
///
/// Labels map to `base..base + n`, with indices 0, 1 and 2 reserved for
/// [`UNK`], [`ROOT`] and [`UNRELATED`]. Pairs with no recorded relation
/// vectorize to the [`UNRELATED`] sentinel; recorded labels outside the
/// inventory fall back to [`UNK`].
pub struct LabelVectorizer<S> {
    selector: S,
    labelset: HashMap<String, usize>,
}

impl<S: PairSelector> LabelVectorizer<S> {
    pub fn new<L, T>(selector: S, labels: L, base: usize) -> Self
    where
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut labelset = build_labelset(labels, base);
        labelset.insert(UNK.to_owned(), 0);
        labelset.insert(ROOT.to_owned(), 1);
        labelset.insert(UNRELATED.to_owned(), 2);
        LabelVectorizer { selector, labelset }
    }

    /// The label-to-index map, sentinels included.
    pub fn labelset(&self) -> &HashMap<String, usize> {
        &self.labelset
    }

    fn index(&self, label: &str) -> usize {
        self.labelset.get(label).copied().unwrap_or(0)
    }

    /// One label index per candidate pair extracted from `documents`.
    pub fn transform<'a>(&'a self, documents: &'a [Dialogue]) -> impl Iterator<Item = usize> + 'a {
        documents.iter().flat_map(move |doc| {
            self.selector
                .select(doc)
                .into_iter()
                .map(|(source, target)| {
                    let label = doc
                        .relation_label(&source.id, &target.id)
                        .unwrap_or(UNRELATED);
                    self.index(label)
                })
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windowed_pairs_respects_window() {
        let mut doc = Dialogue::new("d1");
        for i in 1..=4 {
            doc.edus.push(Edu::new(format!("e{}", i), "..."));
        }
        let pairs = WindowedPairs { window: Some(1) }.select(&doc);
        // each target pairs with root plus at most one predecessor
        let with_e4: Vec<_> = pairs
            .iter()
            .filter(|(_, t)| t.id == "e4")
            .map(|(s, _)| s.id.as_str())
            .collect();
        assert_eq!(with_e4, vec!["ROOT", "e3"]);
    }

    #[test]
    fn test_windowed_pairs_unbounded() {
        let mut doc = Dialogue::new("d1");
        for i in 1..=3 {
            doc.edus.push(Edu::new(format!("e{}", i), "..."));
        }
        let pairs = WindowedPairs { window: None }.select(&doc);
        // 3 root pairings + (0 + 1 + 2) predecessor pairings
        assert_eq!(pairs.len(), 6);
    }
}
