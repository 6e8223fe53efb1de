//! Choice tags and gating requirements

use serde::{Deserialize, Serialize};

/// Identifier recorded into the play-through history when a choice is taken.
///
/// The set is closed: a tag that no scene produces cannot be constructed,
/// so an unrecognized tag can never reach the traversal engine at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceTag {
    InterestedResponse,
    DryResponse,
    Ignored,
    TextOnly,
    VoiceCalls,
    Breakthrough,
    DistantFriends,
    AcceptMarriage,
    HesitantMarriage,
    NotReadyMarriage,
}

impl ChoiceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceTag::InterestedResponse => "interested_response",
            ChoiceTag::DryResponse => "dry_response",
            ChoiceTag::Ignored => "ignored",
            ChoiceTag::TextOnly => "text_only",
            ChoiceTag::VoiceCalls => "voice_calls",
            ChoiceTag::Breakthrough => "breakthrough",
            ChoiceTag::DistantFriends => "distant_friends",
            ChoiceTag::AcceptMarriage => "accept_marriage",
            ChoiceTag::HesitantMarriage => "hesitant_marriage",
            ChoiceTag::NotReadyMarriage => "not_ready_marriage",
        }
    }
}

impl std::fmt::Display for ChoiceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gating condition on the accumulated choice history.
///
/// A multi-tag requirement is conjunctive: every listed tag must have been
/// recorded for the requirement to be satisfied. A list is not a set of
/// alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    /// Satisfied iff the tag appears anywhere in history.
    Tag(ChoiceTag),
    /// Satisfied iff every tag appears in history (logical AND).
    AllOf(Vec<ChoiceTag>),
}

impl Requirement {
    /// The tags this requirement consults, in declaration order.
    pub fn tags(&self) -> &[ChoiceTag] {
        match self {
            Requirement::Tag(tag) => std::slice::from_ref(tag),
            Requirement::AllOf(tags) => tags,
        }
    }
}

impl From<ChoiceTag> for Requirement {
    fn from(tag: ChoiceTag) -> Self {
        Requirement::Tag(tag)
    }
}

impl<const N: usize> From<[ChoiceTag; N]> for Requirement {
    fn from(tags: [ChoiceTag; N]) -> Self {
        Requirement::AllOf(tags.to_vec())
    }
}
