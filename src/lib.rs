//! # enredo
//!
//! A branching-narrative traversal engine: an ordered catalog of scenes,
//! choice scenes that record tags into an append-only history, and a
//! forward-only scan that decides which scene comes next and when the story
//! has reached an ending.
//!
//! Presentation (animation, audio, styling) is somebody else's job: the
//! engine hands out scene data and takes back two intents, advance and
//! choose.
//!
//! ## Quick Start
//!
//! ```rust
//! use enredo::{content, ChoiceTag, NextAction, Traversal};
//!
//! # fn main() -> Result<(), enredo::TraversalError> {
//! let mut story = Traversal::new(content::love_story());
//!
//! // Walk to the first decision point.
//! while story.next_action() == NextAction::WaitAdvance {
//!     story.advance()?;
//! }
//!
//! // The reader picks an option; the tag gates which scenes come later.
//! story.record_choice(ChoiceTag::InterestedResponse)?;
//! println!("{}", story.pending_result_text().unwrap_or(""));
//! story.advance()?;
//! assert!(!story.is_complete());
//! # Ok(())
//! # }
//! ```
//!
//! ## Repositories and the terminal player
//!
//! ```rust
//! use enredo::repository::{CatalogId, CatalogRepository, InMemoryCatalogRepository};
//! use enredo::PlayerSession;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryCatalogRepository::with_builtin();
//! let catalog = repository
//!     .load_catalog(&CatalogId::from("love-story"))
//!     .await?;
//! let _session = PlayerSession::new(catalog);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod content;
pub mod eligibility;
pub mod lint;
pub mod repository;
pub mod session;
pub mod traversal;
pub mod types;

pub use eligibility::{is_satisfied, next_eligible};
pub use session::{ChoiceItem, DisplayStep, PlayerResult, PlayerSession, SessionError};
pub use traversal::{NextAction, Traversal, TraversalError};
pub use types::{
    CatalogError, ChapterHeading, Choice, ChoiceTag, MediaRef, Requirement, Scene, SceneKind,
    StoryCatalog, TraversalPhase, TraversalState,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_story_opens_on_the_first_chapter() {
        let story = Traversal::new(content::love_story());
        let scene = story.current_scene();

        assert!(scene.is_chapter_opener());
        assert_eq!(scene.chapter().unwrap().title, "Chapter 1");
        assert_eq!(story.next_action(), NextAction::WaitAdvance);
    }

    #[test]
    fn first_decision_offers_three_replies() {
        let mut story = Traversal::new(content::love_story());
        while story.next_action() == NextAction::WaitAdvance {
            story.advance().unwrap();
        }

        let options = story.current_scene().options();
        let tags: Vec<ChoiceTag> = options.iter().map(|option| option.tag).collect();
        assert_eq!(
            tags,
            vec![
                ChoiceTag::InterestedResponse,
                ChoiceTag::DryResponse,
                ChoiceTag::Ignored,
            ]
        );
    }

    #[test]
    fn choosing_silence_reaches_the_sad_epilogue() {
        let mut story = Traversal::new(content::love_story());
        while story.next_action() == NextAction::WaitAdvance {
            story.advance().unwrap();
        }
        story.record_choice(ChoiceTag::Ignored).unwrap();

        let action = story.advance().unwrap();
        assert_eq!(action, NextAction::WaitAdvance);
        assert!(story.current_scene().is_ending());
        assert_eq!(
            story.current_scene().requires(),
            Some(&Requirement::Tag(ChoiceTag::Ignored))
        );

        assert_eq!(story.advance().unwrap(), NextAction::Finished);
        assert!(story.is_complete());
    }
}
