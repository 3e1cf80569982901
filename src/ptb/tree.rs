//! Constituency trees and subcategory stripping
//!
//! A minimal constituency representation: interior nodes carry a label and
//! children, leaves carry a token. Subcategory stripping reduces node
//! labels to their basic category, with optional retention of the
//! temporal-modifier subcategories, after the most standard parser
//! parameters for the PTB.

use serde::{Deserialize, Serialize};

use super::labels::basic_category;
use super::tokens::RawToken;

/// Which temporal-modifier subcategories to keep when stripping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubcategoryOptions {
    /// Keep `-TMP` on any category (`NP-TMP-1` becomes `NP-TMP`).
    pub retain_tmp: bool,
    /// Keep `NP-TMP` specifically (`NP-TMP-SBJ` becomes `NP-TMP`).
    pub retain_np_tmp: bool,
}

/// Normalize a constituent label according to the retention options.
///
/// `NP-TMP`-prefixed labels collapse to exactly `NP-TMP` when that
/// subcategory is retained; otherwise labels containing `-TMP` collapse to
/// `<basic category>-TMP` when temporal subcategories are retained; all
/// remaining labels reduce to their basic category.
pub fn strip_subcategory(label: &str, options: &SubcategoryOptions) -> String {
    if options.retain_np_tmp && label.starts_with("NP-TMP") {
        "NP-TMP".to_owned()
    } else if options.retain_tmp && label.contains("-TMP") {
        format!("{}-TMP", basic_category(label))
    } else {
        basic_category(label).to_owned()
    }
}

/// A constituency tree node: an interior constituent or a terminal token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyntaxTree {
    /// Interior node with a category label and one or more children.
    Constituent {
        label: String,
        children: Vec<SyntaxTree>,
    },
    /// Terminal node wrapping the surface token.
    Leaf(RawToken),
}

impl SyntaxTree {
    /// The node label: the category for constituents, the word for leaves.
    pub fn label(&self) -> &str {
        match self {
            SyntaxTree::Constituent { label, .. } => label,
            SyntaxTree::Leaf(token) => &token.word,
        }
    }

    /// Strip subcategories from every constituent label in the tree.
    ///
    /// Leaves pass through unchanged.
    pub fn strip_subcategories(&mut self, options: &SubcategoryOptions) {
        if let SyntaxTree::Constituent { label, children } = self {
            *label = strip_subcategory(label, options);
            for child in children {
                child.strip_subcategories(options);
            }
        }
    }
}
