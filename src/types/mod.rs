//! Core types for the enredo library
//!
//! This module contains the fundamental types that form the public API:
//! - Catalog: the immutable, ordered list of scene definitions
//! - Scene: one story beat, narrative or choice-bearing
//! - Tag: the closed set of choice identifiers and gating requirements
//! - State: per-play-through traversal state and its phase machine

pub mod catalog;
pub mod scene;
pub mod state;
pub mod tag;

pub use catalog::{CatalogError, StoryCatalog};
pub use scene::{ChapterHeading, Choice, MediaRef, Scene, SceneKind};
pub use state::{TraversalPhase, TraversalState};
pub use tag::{ChoiceTag, Requirement};
