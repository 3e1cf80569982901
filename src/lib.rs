//! # discorp
//!
//! Alignment and feature-extraction utilities for discourse-annotated
//! corpora.
//!
//! The crate has three layers:
//!
//! - [`ptb`] — Penn Treebank annotation utilities: token tweaking for
//!   aligning treebank tokens against near-identical source text, and
//!   label normalization for constituency node labels.
//! - [`stac`] — a minimal dialogue-corpus model (EDUs, dialogue acts,
//!   discourse relations) and a JSON corpus loader.
//! - [`learning`] — label and feature vectorizers plus the sparse-output
//!   writers used by the `discorp` extraction binary.

pub mod learning;
pub mod ptb;
pub mod stac;
