//! Penn Treebank annotation utilities
//!
//! Tools for reconciling PTB-style annotations with other corpora built on
//! the same text: token tweaking for alignment against source text that is
//! almost but not quite identical to what the annotations represent, and
//! label-category normalization for constituency node labels.

pub mod labels;
pub mod tokens;
pub mod tree;

pub use labels::{basic_category, post_basic_category_index};
pub use tokens::{is_nonword_token, ptb_to_text, RawToken, TweakedToken, PTB_TO_TEXT};
pub use tree::{strip_subcategory, SubcategoryOptions, SyntaxTree};
