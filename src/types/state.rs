//! Traversal state - one mutable instance per play-through

use crate::types::scene::Scene;
use crate::types::tag::ChoiceTag;
use serde::{Deserialize, Serialize};

/// Mutable state of one play-through, owned exclusively by the traversal
/// engine. Discarded (never persisted) when the reader restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalState {
    /// Index into the catalog of the currently displayed scene.
    pub position: usize,
    /// Append-only record of every choice taken, in the order taken.
    /// Duplicates are permitted; entries are never removed.
    pub history: Vec<ChoiceTag>,
    /// Immediate-feedback text from the most recent choice, distinct from
    /// the next scene's body. Cleared on advance.
    pub pending_result_text: Option<String>,
    /// Where the play-through stands in the advance/choose state machine.
    pub phase: TraversalPhase,
}

impl TraversalState {
    /// Fresh state positioned at the first scene; the phase follows the
    /// scene's kind.
    pub fn at_start(first_scene: &Scene) -> Self {
        Self {
            position: 0,
            history: Vec::new(),
            pending_result_text: None,
            phase: TraversalPhase::arriving_at(first_scene),
        }
    }
}

/// The four states of the traversal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalPhase {
    /// Narrative scene displayed, ready to move on.
    AwaitingAdvance,
    /// Choice scene displayed, no selection yet.
    AwaitingChoice,
    /// Choice scene displayed, selection made, ready to move on.
    ChoiceRecorded,
    /// Terminal; only a fresh state recovers from this.
    Complete,
}

impl TraversalPhase {
    /// Phase entered upon arriving at a scene.
    pub fn arriving_at(scene: &Scene) -> Self {
        if scene.kind().is_choice() {
            TraversalPhase::AwaitingChoice
        } else {
            TraversalPhase::AwaitingAdvance
        }
    }
}
