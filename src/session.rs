//! Player session - turns traversal progress into displayable steps
//!
//! The traversal engine exposes scenes; a terminal player wants a stream of
//! things to print. `PlayerSession` does the unpacking: chapter heading
//! first when a scene opens a chapter, then the body, then the options if
//! any, and the immediate aftermath of a choice before the story moves on.

use crate::traversal::{NextAction, Traversal, TraversalError};
use crate::types::catalog::StoryCatalog;
use crate::types::scene::Scene;
use std::collections::VecDeque;

/// One unit of presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayStep {
    /// Interstitial shown before a chapter-opening scene's body.
    ChapterHeading {
        title: String,
        subtitle: Option<String>,
    },
    /// A scene body, with its media reference when one is attached.
    Passage {
        text: String,
        media: Option<String>,
        is_ending: bool,
    },
    /// The options of a choice scene, in catalog order.
    ChoicePrompt { options: Vec<ChoiceItem> },
    /// Immediate-feedback text revealed right after a choice.
    Aftermath { text: String },
}

/// A single selectable option, indexed for digit input.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceItem {
    /// Zero-based position among the scene's options.
    pub index: usize,
    pub label: String,
}

/// Result of asking the session for the next step.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerResult {
    Step(DisplayStep),
    Ended,
}

/// Errors at the session boundary.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("choice index {index} is out of range")]
    IndexOutOfRange { index: usize },

    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

/// Drives one play-through for an interactive player.
pub struct PlayerSession {
    traversal: Traversal,
    queue: VecDeque<DisplayStep>,
}

impl PlayerSession {
    pub fn new(catalog: StoryCatalog) -> Self {
        let mut session = Self {
            traversal: Traversal::new(catalog),
            queue: VecDeque::new(),
        };
        session.enqueue_current_scene();
        session
    }

    /// The underlying traversal, for debug displays.
    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    pub fn is_complete(&self) -> bool {
        self.traversal.is_complete()
    }

    /// Next step to display, advancing the traversal when the current
    /// scene is spent.
    pub fn next(&mut self) -> PlayerResult {
        if let Some(step) = self.queue.pop_front() {
            return PlayerResult::Step(step);
        }

        match self.traversal.next_action() {
            NextAction::Finished => PlayerResult::Ended,
            // The host asked for the next step without choosing; show the
            // options again rather than erroring.
            NextAction::WaitChoice => {
                PlayerResult::Step(choice_prompt(self.traversal.current_scene()))
            }
            NextAction::WaitAdvance => match self.traversal.advance() {
                Ok(NextAction::Finished) | Err(_) => PlayerResult::Ended,
                Ok(_) => {
                    self.enqueue_current_scene();
                    match self.queue.pop_front() {
                        Some(step) => PlayerResult::Step(step),
                        None => PlayerResult::Ended,
                    }
                }
            },
        }
    }

    /// Record the option at `index` (zero-based) and reveal its aftermath.
    pub fn choose(&mut self, index: usize) -> Result<PlayerResult, SessionError> {
        let tag = self
            .traversal
            .current_scene()
            .options()
            .get(index)
            .map(|option| option.tag)
            .ok_or(SessionError::IndexOutOfRange { index })?;

        self.traversal.record_choice(tag)?;

        let text = self
            .traversal
            .pending_result_text()
            .unwrap_or_default()
            .to_string();
        Ok(PlayerResult::Step(DisplayStep::Aftermath { text }))
    }

    /// Discard the play-through and start over at scene 0.
    pub fn restart(&mut self) {
        self.traversal.reset();
        self.queue.clear();
        self.enqueue_current_scene();
    }

    fn enqueue_current_scene(&mut self) {
        let scene = self.traversal.current_scene().clone();

        if let Some(heading) = scene.chapter() {
            self.queue.push_back(DisplayStep::ChapterHeading {
                title: heading.title.clone(),
                subtitle: heading.subtitle.clone(),
            });
        }

        self.queue.push_back(DisplayStep::Passage {
            text: scene.body().to_string(),
            media: scene.media().map(|media| media.as_str().to_string()),
            is_ending: scene.is_ending(),
        });

        if scene.kind().is_choice() {
            self.queue.push_back(choice_prompt(&scene));
        }
    }
}

fn choice_prompt(scene: &Scene) -> DisplayStep {
    DisplayStep::ChoicePrompt {
        options: scene
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| ChoiceItem {
                index,
                label: option.label.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scene::Choice;
    use crate::types::tag::ChoiceTag;

    fn catalog() -> StoryCatalog {
        StoryCatalog::new(
            "session",
            vec![
                Scene::narrative(0, "intro").with_chapter("Chapter 1", "The Comment"),
                Scene::choice(
                    1,
                    "pick",
                    vec![
                        Choice::new("warm", "warmth follows", ChoiceTag::InterestedResponse),
                        Choice::new("silence", "nothing follows", ChoiceTag::Ignored),
                    ],
                ),
                Scene::narrative(2, "the end")
                    .with_requirement(ChoiceTag::Ignored)
                    .ending(),
                Scene::narrative(3, "warm road").with_requirement(ChoiceTag::InterestedResponse),
            ],
        )
        .unwrap()
    }

    #[test]
    fn opener_yields_heading_then_passage() {
        let mut session = PlayerSession::new(catalog());

        match session.next() {
            PlayerResult::Step(DisplayStep::ChapterHeading { title, subtitle }) => {
                assert_eq!(title, "Chapter 1");
                assert_eq!(subtitle.as_deref(), Some("The Comment"));
            }
            other => panic!("expected chapter heading, got {other:?}"),
        }

        match session.next() {
            PlayerResult::Step(DisplayStep::Passage { text, .. }) => assert_eq!(text, "intro"),
            other => panic!("expected passage, got {other:?}"),
        }
    }

    #[test]
    fn choice_scene_yields_prompt_and_aftermath() {
        let mut session = PlayerSession::new(catalog());
        session.next();
        session.next();

        // Scene 1: passage then prompt.
        match session.next() {
            PlayerResult::Step(DisplayStep::Passage { text, .. }) => assert_eq!(text, "pick"),
            other => panic!("expected passage, got {other:?}"),
        }
        match session.next() {
            PlayerResult::Step(DisplayStep::ChoicePrompt { options }) => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[1].label, "silence");
            }
            other => panic!("expected prompt, got {other:?}"),
        }

        match session.choose(1).unwrap() {
            PlayerResult::Step(DisplayStep::Aftermath { text }) => {
                assert_eq!(text, "nothing follows");
            }
            other => panic!("expected aftermath, got {other:?}"),
        }
    }

    #[test]
    fn asking_again_without_choosing_re_emits_the_prompt() {
        let mut session = PlayerSession::new(catalog());
        for _ in 0..4 {
            session.next();
        }
        // Queue is drained and the scene still awaits a choice.
        match session.next() {
            PlayerResult::Step(DisplayStep::ChoicePrompt { options }) => {
                assert_eq!(options.len(), 2);
            }
            other => panic!("expected prompt again, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut session = PlayerSession::new(catalog());
        for _ in 0..4 {
            session.next();
        }
        assert!(matches!(
            session.choose(5),
            Err(SessionError::IndexOutOfRange { index: 5 })
        ));
    }

    #[test]
    fn session_ends_after_an_ending_passage_and_restarts_cleanly() {
        let mut session = PlayerSession::new(catalog());
        for _ in 0..4 {
            session.next();
        }
        session.choose(1).unwrap();

        match session.next() {
            PlayerResult::Step(DisplayStep::Passage { text, is_ending, .. }) => {
                assert_eq!(text, "the end");
                assert!(is_ending);
            }
            other => panic!("expected ending passage, got {other:?}"),
        }
        assert_eq!(session.next(), PlayerResult::Ended);
        assert!(session.is_complete());

        session.restart();
        assert!(!session.is_complete());
        match session.next() {
            PlayerResult::Step(DisplayStep::ChapterHeading { title, .. }) => {
                assert_eq!(title, "Chapter 1");
            }
            other => panic!("expected heading after restart, got {other:?}"),
        }
    }
}
