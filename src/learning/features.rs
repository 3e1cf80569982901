//! Feature extraction and vectorization
//!
//! A deliberately small feature inventory: enough surface cues per EDU and
//! per candidate pair to exercise the sparse-output pipeline end to end.
//! [`FeatureVectorizer`] assigns column indices to feature names on first
//! sight over a single corpus pass, so fitting and transforming are one
//! operation.

use std::collections::HashMap;

use crate::stac::corpus::{Dialogue, Edu};

/// Named feature values for one instance, in extraction order.
pub type FeatureMap = Vec<(String, f64)>;

/// Surface features of a single EDU.
pub fn single_edu_features(edu: &Edu) -> FeatureMap {
    let tokens: Vec<&str> = edu.text.split_whitespace().collect();
    let mut features: FeatureMap = vec![("num_tokens".to_owned(), tokens.len() as f64)];
    let trimmed = edu.text.trim_end();
    if trimmed.ends_with('?') {
        features.push(("ends_qmark".to_owned(), 1.0));
    }
    if trimmed.ends_with('!') {
        features.push(("ends_bang".to_owned(), 1.0));
    }
    if let Some(first) = tokens.first() {
        features.push((format!("first_word={}", first.to_lowercase()), 1.0));
    }
    if let Some(last) = tokens.last() {
        features.push((format!("last_word={}", last.to_lowercase()), 1.0));
    }
    features
}

/// Features of a candidate (source, target) pair.
///
/// Positional distance and speaker identity, plus the single-EDU features
/// of both ends under `src_`/`tgt_` prefixes. Pairs from the synthetic root
/// get a `from_root` indicator instead of a distance.
pub fn pair_features(source: &Edu, target: &Edu, doc: &Dialogue) -> FeatureMap {
    let mut features = FeatureMap::new();
    if source.is_root() {
        features.push(("from_root".to_owned(), 1.0));
    } else if let (Some(i), Some(j)) = (position(doc, &source.id), position(doc, &target.id)) {
        features.push(("distance".to_owned(), (j as f64) - (i as f64)));
    }
    if let (Some(a), Some(b)) = (&source.speaker, &target.speaker) {
        if a == b {
            features.push(("same_speaker".to_owned(), 1.0));
        }
    }
    for (name, value) in single_edu_features(source) {
        features.push((format!("src_{}", name), value));
    }
    for (name, value) in single_edu_features(target) {
        features.push((format!("tgt_{}", name), value));
    }
    features
}

fn position(doc: &Dialogue, edu_id: &str) -> Option<usize> {
    doc.edus.iter().position(|edu| edu.id == edu_id)
}

/// Maps feature names to dense column indices across a corpus pass.
///
/// Columns are assigned in first-seen order. The vocabulary is exposed for
/// dumping alongside the sparse rows.
#[derive(Debug, Default)]
pub struct FeatureVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl FeatureVectorizer {
    pub fn new() -> Self {
        FeatureVectorizer::default()
    }

    /// The feature-name-to-column map built so far.
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Vectorize every instance, growing the vocabulary as new feature
    /// names appear. Each row's columns come out strictly ascending, the
    /// way sparse writers expect them.
    pub fn fit_transform<I>(&mut self, instances: I) -> Vec<Vec<(usize, f64)>>
    where
        I: IntoIterator<Item = FeatureMap>,
    {
        instances
            .into_iter()
            .map(|features| {
                let mut row: Vec<(usize, f64)> = features
                    .into_iter()
                    .map(|(name, value)| {
                        let next = self.vocabulary.len();
                        let column = *self.vocabulary.entry(name).or_insert(next);
                        (column, value)
                    })
                    .collect();
                row.sort_by_key(|&(column, _)| column);
                row
            })
            .collect()
    }
}
