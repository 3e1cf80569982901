//! Dump writers for extracted features and labels
//!
//! Sparse instances go out in svmlight form (`label col:val ...`), with
//! sidecar files describing the vocabulary, the EDUs, and the candidate
//! pairings. Each writer produces one plain-text file; paths are created
//! fresh on every dump.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::stac::corpus::Dialogue;

use super::vectorizers::PairSelector;

/// Error that can occur when writing dump files
#[derive(Debug, Clone)]
pub enum OutputError {
    /// IO error when creating or writing an output file
    Io(String),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for OutputError {}

impl From<std::io::Error> for OutputError {
    fn from(err: std::io::Error) -> Self {
        OutputError::Io(err.to_string())
    }
}

/// Render a labelset as a one-line comment, labels ordered by index.
pub fn labels_comment(labelset: &HashMap<String, usize>) -> String {
    let mut entries: Vec<_> = labelset.iter().collect();
    entries.sort_by_key(|(_, index)| **index);
    let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
    format!("labels: {}", labels.join(" "))
}

/// Write sparse feature rows with their label indices in svmlight form.
///
/// Rows and labels align positionally: row `i` gets label `i`. An optional
/// comment goes out first as a `#` line.
pub fn dump_svmlight(
    rows: &[Vec<(usize, f64)>],
    labels: &[usize],
    path: impl AsRef<Path>,
    comment: Option<&str>,
) -> Result<(), OutputError> {
    let mut out = BufWriter::new(File::create(path)?);
    if let Some(comment) = comment {
        writeln!(out, "# {}", comment)?;
    }
    for (row, label) in rows.iter().zip(labels) {
        write!(out, "{}", label)?;
        for (column, value) in row {
            write!(out, " {}:{}", column, value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the feature vocabulary, one `name<TAB>index` line per column,
/// ordered by index.
pub fn dump_vocabulary(
    vocabulary: &HashMap<String, usize>,
    path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let mut entries: Vec<_> = vocabulary.iter().collect();
    entries.sort_by_key(|(_, index)| **index);
    let mut out = BufWriter::new(File::create(path)?);
    for (name, index) in entries {
        writeln!(out, "{}\t{}", name, index)?;
    }
    Ok(())
}

/// Write one line per EDU: id, text, dialogue id and character span,
/// tab-separated. Tabs inside EDU text collapse to spaces so the column
/// structure survives.
pub fn dump_edu_input(
    dialogues: &[Dialogue],
    path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let mut out = BufWriter::new(File::create(path)?);
    for dialogue in dialogues {
        for edu in &dialogue.edus {
            let (start, end) = edu.span.unwrap_or((0, 0));
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                edu.id,
                edu.text.replace(['\t', '\n'], " "),
                dialogue.id,
                start,
                end
            )?;
        }
    }
    Ok(())
}

/// Write the enumerated candidate pairs, one `source<TAB>target` id pair
/// per line, in the same order the vectorizers see them.
pub fn dump_pairings(
    dialogues: &[Dialogue],
    selector: &dyn PairSelector,
    path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let mut out = BufWriter::new(File::create(path)?);
    for dialogue in dialogues {
        for (source, target) in selector.select(dialogue) {
            writeln!(out, "{}\t{}", source.id, target.id)?;
        }
    }
    Ok(())
}
