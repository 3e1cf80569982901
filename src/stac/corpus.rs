//! Dialogue, EDU and relation types
//!
//! Dialogues are the unit of processing: each holds its EDUs in document
//! order plus the labelled relations between them. A shared synthetic root
//! EDU stands in for the "attach here if attached to nothing" outcome when
//! enumerating candidate pairs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Dialogue act labels used in the STAC corpus.
pub const DIALOGUE_ACTS: &[&str] = &["Offer", "Counteroffer", "Accept", "Refusal", "Other"];

/// Subordinating discourse relations used in the STAC corpus.
pub const SUBORDINATING_RELATIONS: &[&str] = &[
    "Explanation",
    "Background",
    "Elaboration",
    "Correction",
    "Q-Elab",
    "Comment",
    "Question-answer_pair",
    "Clarification_question",
    "Acknowledgement",
];

/// Coordinating discourse relations used in the STAC corpus.
pub const COORDINATING_RELATIONS: &[&str] = &[
    "Result",
    "Narration",
    "Continuation",
    "Contrast",
    "Parallel",
    "Conditional",
    "Alternation",
    "Sequence",
];

/// Label given to relations attaching an EDU to the synthetic root.
pub const ROOT_LABEL: &str = "ROOT";

/// An elementary discourse unit: a minimal span of text carrying one
/// discourse act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edu {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue_act: Option<String>,
    /// Character span of the EDU in the dialogue source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<(usize, usize)>,
}

static ROOT_EDU: Lazy<Edu> = Lazy::new(|| Edu {
    id: "ROOT".to_owned(),
    text: String::new(),
    speaker: None,
    dialogue_act: None,
    span: None,
});

impl Edu {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Edu {
            id: id.into(),
            text: text.into(),
            speaker: None,
            dialogue_act: None,
            span: None,
        }
    }

    /// The shared synthetic root EDU.
    pub fn root() -> &'static Edu {
        &ROOT_EDU
    }

    /// True for the synthetic root.
    pub fn is_root(&self) -> bool {
        self.id == ROOT_EDU.id
    }
}

/// A directed, labelled discourse relation between two EDUs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// A dialogue: EDUs in document order plus the relations between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    pub id: String,
    #[serde(default)]
    pub edus: Vec<Edu>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Dialogue {
    pub fn new(id: impl Into<String>) -> Self {
        Dialogue {
            id: id.into(),
            edus: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// The label recorded for the relation from `source_id` to `target_id`,
    /// if any.
    pub fn relation_label(&self, source_id: &str, target_id: &str) -> Option<&str> {
        self.relations
            .iter()
            .find(|r| r.source == source_id && r.target == target_id)
            .map(|r| r.label.as_str())
    }

    /// Attach every EDU with no incoming relation to the synthetic root.
    ///
    /// Added links carry the [`ROOT_LABEL`] label. EDUs that already have an
    /// incoming relation are left alone, so calling this twice is a no-op.
    pub fn attach_root(&mut self) {
        let unattached: Vec<String> = self
            .edus
            .iter()
            .filter(|edu| !self.relations.iter().any(|r| r.target == edu.id))
            .map(|edu| edu.id.clone())
            .collect();
        for id in unattached {
            self.relations.push(Relation {
                source: Edu::root().id.clone(),
                target: id,
                label: ROOT_LABEL.to_owned(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dialogue {
        let mut dialogue = Dialogue::new("d1");
        dialogue.edus.push(Edu::new("e1", "anyone got wood?"));
        dialogue.edus.push(Edu::new("e2", "nope"));
        dialogue.relations.push(Relation {
            source: "e1".to_owned(),
            target: "e2".to_owned(),
            label: "Question-answer_pair".to_owned(),
        });
        dialogue
    }

    #[test]
    fn test_relation_lookup() {
        let dialogue = sample();
        assert_eq!(
            dialogue.relation_label("e1", "e2"),
            Some("Question-answer_pair")
        );
        assert_eq!(dialogue.relation_label("e2", "e1"), None);
    }

    #[test]
    fn test_attach_root_only_unattached() {
        let mut dialogue = sample();
        dialogue.attach_root();
        // e2 already has an incoming relation; e1 does not
        assert_eq!(dialogue.relation_label("ROOT", "e1"), Some(ROOT_LABEL));
        assert_eq!(dialogue.relation_label("ROOT", "e2"), None);

        // idempotent
        let before = dialogue.relations.len();
        dialogue.attach_root();
        assert_eq!(dialogue.relations.len(), before);
    }
}
