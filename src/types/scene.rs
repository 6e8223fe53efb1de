//! Scene definitions - one story beat each

use crate::types::tag::{ChoiceTag, Requirement};
use serde::{Deserialize, Serialize};

/// A single story beat in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    id: u32,
    chapter: Option<ChapterHeading>,
    body: String,
    kind: SceneKind,
    is_ending: bool,
    requires: Option<Requirement>,
    media: Option<MediaRef>,
}

impl Scene {
    /// Create a narrative scene (no decision point).
    pub fn narrative(id: u32, body: impl Into<String>) -> Self {
        Self {
            id,
            chapter: None,
            body: body.into(),
            kind: SceneKind::Narrative,
            is_ending: false,
            requires: None,
            media: None,
        }
    }

    /// Create a choice scene; the reader must pick one option before advancing.
    pub fn choice(id: u32, body: impl Into<String>, options: Vec<Choice>) -> Self {
        Self {
            id,
            chapter: None,
            body: body.into(),
            kind: SceneKind::Choice { options },
            is_ending: false,
            requires: None,
            media: None,
        }
    }

    /// Mark this scene as a chapter opener with the given heading.
    pub fn with_chapter(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.chapter = Some(ChapterHeading {
            title: title.into(),
            subtitle: Some(subtitle.into()),
        });
        self
    }

    /// Gate this scene on a requirement over the accumulated history.
    pub fn with_requirement(mut self, requirement: impl Into<Requirement>) -> Self {
        self.requires = Some(requirement.into());
        self
    }

    /// Attach an opaque media reference, passed through to the presentation
    /// layer untouched.
    pub fn with_media(mut self, media: impl Into<MediaRef>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Mark this scene as a story ending.
    pub fn ending(mut self) -> Self {
        self.is_ending = true;
        self
    }

    /// Assemble a scene from already-deserialized parts. Only the catalog
    /// document conversion uses this; content code goes through the builders.
    pub(crate) fn assemble(
        id: u32,
        chapter: Option<ChapterHeading>,
        body: String,
        kind: SceneKind,
        is_ending: bool,
        requires: Option<Requirement>,
        media: Option<MediaRef>,
    ) -> Self {
        Self {
            id,
            chapter,
            body,
            kind,
            is_ending,
            requires,
            media,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn chapter(&self) -> Option<&ChapterHeading> {
        self.chapter.as_ref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> &SceneKind {
        &self.kind
    }

    /// Options offered by this scene; empty for narrative scenes.
    pub fn options(&self) -> &[Choice] {
        match &self.kind {
            SceneKind::Narrative => &[],
            SceneKind::Choice { options } => options,
        }
    }

    pub fn is_chapter_opener(&self) -> bool {
        self.chapter.is_some()
    }

    pub fn is_ending(&self) -> bool {
        self.is_ending
    }

    pub fn requires(&self) -> Option<&Requirement> {
        self.requires.as_ref()
    }

    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }
}

/// Whether a scene is plain narration or a decision point.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneKind {
    Narrative,
    Choice { options: Vec<Choice> },
}

impl SceneKind {
    pub fn is_choice(&self) -> bool {
        matches!(self, SceneKind::Choice { .. })
    }
}

/// One selectable option at a choice scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the reader.
    pub label: String,
    /// Narrative text revealed immediately after this choice is taken,
    /// before the next scene is reached.
    pub result_text: String,
    /// Recorded into history when taken; later gates consult it.
    pub tag: ChoiceTag,
}

impl Choice {
    pub fn new(label: impl Into<String>, result_text: impl Into<String>, tag: ChoiceTag) -> Self {
        Self {
            label: label.into(),
            result_text: result_text.into(),
            tag,
        }
    }
}

/// Heading shown before a chapter-opening scene's body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterHeading {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Opaque reference to illustrative media. The engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MediaRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
