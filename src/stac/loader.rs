//! Corpus loading
//!
//! Reads a corpus directory of JSON dialogue files into [`Dialogue`]
//! values. One file per dialogue; files are visited in sorted order so a
//! corpus always loads the same way.

use std::fs;
use std::path::Path;

use super::corpus::Dialogue;

/// Error that can occur when loading a corpus
#[derive(Debug, Clone)]
pub enum CorpusError {
    /// IO error when reading the corpus directory or a dialogue file
    Io(String),
    /// Malformed dialogue file
    Json(String),
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Io(msg) => write!(f, "IO error: {}", msg),
            CorpusError::Json(msg) => write!(f, "Corpus format error: {}", msg),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        CorpusError::Io(err.to_string())
    }
}

/// Load every `*.json` dialogue file under `dir`.
///
/// Each loaded dialogue is finalized with
/// [`attach_root`](Dialogue::attach_root) so unattached EDUs carry their
/// root link before any pair enumeration sees them.
pub fn load_corpus(dir: impl AsRef<Path>) -> Result<Vec<Dialogue>, CorpusError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    paths.sort();

    let mut dialogues = Vec::with_capacity(paths.len());
    for path in paths {
        let source = fs::read_to_string(&path)?;
        let mut dialogue: Dialogue = serde_json::from_str(&source)
            .map_err(|err| CorpusError::Json(format!("{}: {}", path.display(), err)))?;
        dialogue.attach_root();
        dialogues.push(dialogue);
    }
    Ok(dialogues)
}
