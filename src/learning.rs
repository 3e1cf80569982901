//! Statistical-learning support
//!
//! Everything the extraction binary needs to turn a loaded corpus into
//! sparse training data: instance enumeration and label vectorization,
//! a small feature extractor with its vocabulary builder, and the dump
//! writers for the svmlight-style output files.

pub mod features;
pub mod output;
pub mod vectorizers;

pub use features::{pair_features, single_edu_features, FeatureMap, FeatureVectorizer};
pub use output::{
    dump_edu_input, dump_pairings, dump_svmlight, dump_vocabulary, labels_comment, OutputError,
};
pub use vectorizers::{
    AllEdus, DialogueActVectorizer, EduSelector, LabelVectorizer, PairSelector, WindowedPairs,
    ROOT, UNK, UNRELATED,
};
