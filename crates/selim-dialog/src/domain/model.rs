//! Dialog dataset types, in the shape they are authored.

use indexmap::IndexMap;
use selim_core::error::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One line of dialog: a speaker, their text and an optional portrait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNode {
    /// Identifier, unique within its sequence.
    pub id: i64,
    /// Name shown above the text.
    pub speaker: String,
    /// Body text revealed character by character.
    pub text: String,
    /// Portrait texture key; empty when the line has no portrait.
    #[serde(default)]
    pub portrait: String,
    /// Id of the following node; `None` ends the sequence.
    pub next: Option<i64>,
}

impl DialogNode {
    /// Returns true if this node ends its sequence by design.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    /// Returns true if the node names a portrait.
    #[must_use]
    pub fn has_portrait(&self) -> bool {
        !self.portrait.is_empty()
    }
}

/// Ordered list of nodes. Traversal follows `next` ids; list order only
/// decides which node comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogSequence(Vec<DialogNode>);

impl DialogSequence {
    /// Wraps a node list.
    #[must_use]
    pub fn new(nodes: Vec<DialogNode>) -> Self {
        Self(nodes)
    }

    /// All nodes in authoring order.
    #[must_use]
    pub fn nodes(&self) -> &[DialogNode] {
        &self.0
    }

    /// Node at list position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DialogNode> {
        self.0.get(index)
    }

    /// List position of the node with `id` (linear scan, first match).
    #[must_use]
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.0.iter().position(|node| node.id == id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Authoring defects in this sequence, reported under `name`.
    #[must_use]
    pub fn defects(&self, name: &str) -> Vec<GraphDefect> {
        if self.0.is_empty() {
            return vec![GraphDefect::Empty {
                sequence: name.to_owned(),
            }];
        }

        let mut defects = Vec::new();
        for (index, node) in self.0.iter().enumerate() {
            if self.0[..index].iter().any(|earlier| earlier.id == node.id) {
                defects.push(GraphDefect::DuplicateId {
                    sequence: name.to_owned(),
                    node_id: node.id,
                });
            }
            if let Some(next) = node.next
                && self.position_of(next).is_none()
            {
                defects.push(GraphDefect::DanglingNext {
                    sequence: name.to_owned(),
                    node_id: node.id,
                    next,
                });
            }
        }
        defects
    }
}

impl From<Vec<DialogNode>> for DialogSequence {
    fn from(nodes: Vec<DialogNode>) -> Self {
        Self(nodes)
    }
}

/// Every sequence in the game, keyed by name. Loaded once and read-only
/// afterwards. Key order follows the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogSet(IndexMap<String, DialogSequence>);

impl DialogSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a sequence by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DialogSequence> {
        self.0.get(key)
    }

    /// Adds or replaces a sequence.
    pub fn insert(&mut self, key: impl Into<String>, sequence: DialogSequence) {
        self.0.insert(key.into(), sequence);
    }

    /// Sequence keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no sequence is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Authoring defects across all sequences.
    #[must_use]
    pub fn defects(&self) -> Vec<GraphDefect> {
        self.0
            .iter()
            .flat_map(|(name, sequence)| sequence.defects(name))
            .collect()
    }
}

impl FromIterator<(String, DialogSequence)> for DialogSet {
    fn from_iter<I: IntoIterator<Item = (String, DialogSequence)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A structural problem in authored dialog data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphDefect {
    /// `next` names an id the sequence does not contain.
    #[error("{sequence}: node {node_id} points at missing node {next}")]
    DanglingNext {
        /// Sequence name.
        sequence: String,
        /// Node holding the reference.
        node_id: i64,
        /// Unresolvable id.
        next: i64,
    },
    /// Two nodes share an id; only the first is reachable.
    #[error("{sequence}: duplicate node id {node_id}")]
    DuplicateId {
        /// Sequence name.
        sequence: String,
        /// Repeated id.
        node_id: i64,
    },
    /// The sequence has no nodes and cannot be started.
    #[error("{sequence}: sequence is empty")]
    Empty {
        /// Sequence name.
        sequence: String,
    },
}

impl From<GraphDefect> for DomainError {
    fn from(defect: GraphDefect) -> Self {
        match defect {
            GraphDefect::DanglingNext {
                sequence,
                node_id,
                next,
            } => Self::BrokenDialogGraph {
                sequence,
                node_id,
                next,
            },
            GraphDefect::DuplicateId { sequence, node_id } => {
                Self::DuplicateNodeId { sequence, node_id }
            }
            GraphDefect::Empty { sequence } => Self::EmptySequence(sequence),
        }
    }
}
