//! STAC-style dialogue corpus model
//!
//! A minimal representation of dialogue-annotated corpora: dialogues made of
//! EDUs carrying dialogue acts, linked by labelled discourse relations.
//! Real corpus readers live outside this crate; the [`loader`] module reads
//! the crate's own JSON interchange rendering of the same model.

pub mod corpus;
pub mod loader;

pub use corpus::{
    Dialogue, Edu, Relation, COORDINATING_RELATIONS, DIALOGUE_ACTS, SUBORDINATING_RELATIONS,
};
pub use loader::{load_corpus, CorpusError};
