//! The narrative traversal engine
//!
//! Owns the current position and the accumulated choice history, computes
//! the next eligible scene, and detects story completion. Operations are
//! invoked strictly sequentially by the presentation layer; every operation
//! is a single atomic state transition.

use crate::eligibility::next_eligible;
use crate::types::catalog::StoryCatalog;
use crate::types::scene::Scene;
use crate::types::state::{TraversalPhase, TraversalState};
use crate::types::tag::ChoiceTag;


/// What the presentation layer should do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Show the current scene and wait for the reader to move on.
    WaitAdvance,
    /// Show the current scene's options and wait for a pick.
    WaitChoice,
    /// The story has ended; only `reset()` is meaningful now.
    Finished,
}

/// Errors reported by traversal operations. All are local to the failing
/// call and leave the traversal state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// `record_choice` with a tag the current scene does not offer, called
    /// twice for one visit, or called on a narrative scene.
    #[error("scene {scene_id} does not accept the choice `{tag}` now")]
    InvalidChoice { scene_id: u32, tag: ChoiceTag },

    /// `advance` on a choice scene before a choice was recorded.
    #[error("scene {scene_id} is waiting for a choice")]
    ChoicePending { scene_id: u32 },

    /// Operation after the story completed. Not a fault so much as a
    /// terminal signal; `reset()` is the only way forward.
    #[error("the story is complete")]
    StoryComplete,
}

/// One play-through of a story catalog.
///
/// The catalog is immutable for the lifetime of the traversal; the state is
/// owned exclusively here. Simultaneous play-throughs each get their own
/// `Traversal` - nothing is shared.
#[derive(Debug, Clone)]
pub struct Traversal {
    catalog: StoryCatalog,
    state: TraversalState,
}

impl Traversal {
    /// Start a fresh play-through at scene 0.
    pub fn new(catalog: StoryCatalog) -> Self {
        let state = TraversalState::at_start(first_scene(&catalog));
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    /// Read-only snapshot of the scene at the current position.
    pub fn current_scene(&self) -> &Scene {
        self.catalog
            .scene_at(self.state.position)
            .expect("position always references a scene inside the catalog")
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn history(&self) -> &[ChoiceTag] {
        &self.state.history
    }

    /// Immediate-feedback text of the most recent choice, until the next
    /// advance clears it.
    pub fn pending_result_text(&self) -> Option<&str> {
        self.state.pending_result_text.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.state.phase == TraversalPhase::Complete
    }

    /// What the presentation layer should do right now.
    pub fn next_action(&self) -> NextAction {
        match self.state.phase {
            TraversalPhase::AwaitingAdvance | TraversalPhase::ChoiceRecorded => {
                NextAction::WaitAdvance
            }
            TraversalPhase::AwaitingChoice => NextAction::WaitChoice,
            TraversalPhase::Complete => NextAction::Finished,
        }
    }

    /// Record the reader's pick at the current choice scene.
    ///
    /// Appends the tag to history and stores the option's result text as
    /// pending feedback. Exactly one choice is accepted per visit; a repeat
    /// call, an unoffered tag, or a call on a narrative scene all fail with
    /// [`TraversalError::InvalidChoice`].
    pub fn record_choice(&mut self, tag: ChoiceTag) -> Result<(), TraversalError> {
        let scene_id = self.current_scene().id();
        match self.state.phase {
            TraversalPhase::Complete => Err(TraversalError::StoryComplete),
            TraversalPhase::AwaitingAdvance | TraversalPhase::ChoiceRecorded => {
                Err(TraversalError::InvalidChoice { scene_id, tag })
            }
            TraversalPhase::AwaitingChoice => {
                let option = self
                    .current_scene()
                    .options()
                    .iter()
                    .find(|option| option.tag == tag)
                    .ok_or(TraversalError::InvalidChoice { scene_id, tag })?;

                let result_text = option.result_text.clone();
                log::debug!("scene {scene_id}: recording choice `{tag}`");
                self.state.history.push(tag);
                self.state.pending_result_text = Some(result_text);
                self.state.phase = TraversalPhase::ChoiceRecorded;
                Ok(())
            }
        }
    }

    /// Move to the next eligible scene, or signal completion.
    ///
    /// Scans forward from `position + 1`, skipping every scene whose gate
    /// the history does not satisfy; skipped scenes are never revisited. An
    /// ending scene has no successor: advancing from it completes the story
    /// even if later scenes would pass their gates. When nothing eligible
    /// remains, the story is likewise complete.
    pub fn advance(&mut self) -> Result<NextAction, TraversalError> {
        match self.state.phase {
            TraversalPhase::Complete => Err(TraversalError::StoryComplete),
            TraversalPhase::AwaitingChoice => Err(TraversalError::ChoicePending {
                scene_id: self.current_scene().id(),
            }),
            TraversalPhase::AwaitingAdvance | TraversalPhase::ChoiceRecorded => {
                if self.current_scene().is_ending() {
                    log::debug!(
                        "scene {} is an ending, completing the story",
                        self.current_scene().id()
                    );
                    return Ok(self.complete());
                }

                match next_eligible(&self.catalog, &self.state.history, self.state.position + 1) {
                    Some(index) => {
                        self.state.position = index;
                        self.state.pending_result_text = None;
                        self.state.phase = TraversalPhase::arriving_at(self.current_scene());
                        log::debug!(
                            "advanced to scene {} at index {index}",
                            self.current_scene().id()
                        );
                        Ok(self.next_action())
                    }
                    None => {
                        log::debug!("no eligible scene remains, completing the story");
                        Ok(self.complete())
                    }
                }
            }
        }
    }

    /// Discard the play-through and start over at scene 0, as if freshly
    /// constructed.
    pub fn reset(&mut self) {
        self.state = TraversalState::at_start(first_scene(&self.catalog));
    }

    fn complete(&mut self) -> NextAction {
        self.state.phase = TraversalPhase::Complete;
        self.state.pending_result_text = None;
        NextAction::Finished
    }
}

fn first_scene(catalog: &StoryCatalog) -> &Scene {
    catalog
        .scene_at(0)
        .expect("a validated catalog is never empty")
}
