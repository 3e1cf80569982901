//! Basic-category extraction for treebank node labels
//!
//! Treebank labels encode function tags and co-indexing after the core
//! category, delimited by `-` (function tags, identity index, reference
//! index) or `=` (gap co-indexing). Labels like `-LRB-` use leading and
//! trailing hyphens as part of the literal bracket token, not as
//! delimiters, so the scan below has to tell the two apart.

/// Label annotation introducing characters.
const ANNOTATION_CHARS: &[char] = &['-', '='];

fn is_annotation_char(c: char) -> bool {
    ANNOTATION_CHARS.contains(&c)
}

/// Get the index of the first char after the basic category.
///
/// An annotation character never ends the category at position 0; if the
/// label starts with one, a later match of that same character is also
/// skipped iff there is something in between, e.g. `-LRB-` stays whole but
/// `--PU` truncates to `-`.
pub fn post_basic_category_index(label: &str) -> usize {
    let mut first_char: Option<char> = None;
    for (i, c) in label.char_indices() {
        if is_annotation_char(c) {
            if i == 0 {
                first_char = Some(c);
            } else if first_char == Some(c) && i > 1 {
                first_char = None;
            } else {
                return i;
            }
        }
    }
    label.len()
}

/// Get the basic syntactic category of a label.
///
/// This truncates whatever comes after a non-word-initial occurrence of one
/// of the annotation introducing characters: `NP-TMP-1` gives `NP`, `PP=2`
/// gives `PP`, `-LRB-` is left alone. An empty label stays empty.
pub fn basic_category(label: &str) -> &str {
    &label[..post_basic_category_index(label)]
}
