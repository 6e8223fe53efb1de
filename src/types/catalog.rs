//! The story catalog - the immutable ordered list of scenes

use crate::types::scene::{ChapterHeading, Choice, MediaRef, Scene, SceneKind};
use crate::types::tag::{ChoiceTag, Requirement};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Immutable, ordered collection of scene definitions.
///
/// Validation runs at construction: a catalog that deserializes or builds
/// successfully cannot hand the traversal engine a gate over a tag that no
/// choice produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog", into = "RawCatalog")]
pub struct StoryCatalog {
    title: String,
    scenes: Vec<Scene>,
}

impl StoryCatalog {
    pub fn new(title: impl Into<String>, scenes: Vec<Scene>) -> Result<Self, CatalogError> {
        validate(&scenes)?;
        Ok(Self {
            title: title.into(),
            scenes,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scene_at(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Every tag some choice in the catalog produces.
    pub fn produced_tags(&self) -> HashSet<ChoiceTag> {
        self.scenes
            .iter()
            .flat_map(|scene| scene.options().iter().map(|choice| choice.tag))
            .collect()
    }
}

fn validate(scenes: &[Scene]) -> Result<(), CatalogError> {
    if scenes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen_ids = HashSet::new();
    let mut produced = HashSet::new();

    for scene in scenes {
        if !seen_ids.insert(scene.id()) {
            return Err(CatalogError::DuplicateSceneId { id: scene.id() });
        }

        if let SceneKind::Choice { options } = scene.kind() {
            if options.is_empty() {
                return Err(CatalogError::NoOptions {
                    scene_id: scene.id(),
                });
            }
            let mut scene_tags = HashSet::new();
            for choice in options {
                if !scene_tags.insert(choice.tag) {
                    return Err(CatalogError::DuplicateChoiceTag {
                        scene_id: scene.id(),
                        tag: choice.tag,
                    });
                }
                produced.insert(choice.tag);
            }
        }
    }

    for scene in scenes {
        if let Some(requirement) = scene.requires() {
            for tag in requirement.tags() {
                if !produced.contains(tag) {
                    return Err(CatalogError::UnproducedTag {
                        scene_id: scene.id(),
                        tag: *tag,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Catalog construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no scenes")]
    Empty,

    #[error("scene id {id} is defined more than once")]
    DuplicateSceneId { id: u32 },

    #[error("choice scene {scene_id} offers no options")]
    NoOptions { scene_id: u32 },

    #[error("scene {scene_id} offers the tag `{tag}` more than once")]
    DuplicateChoiceTag { scene_id: u32, tag: ChoiceTag },

    #[error("scene {scene_id} is gated on `{tag}`, which no choice produces")]
    UnproducedTag { scene_id: u32, tag: ChoiceTag },
}

/// On-disk document shape for a catalog. Kept close to the data the original
/// story format used: `options` only on choice scenes, `requires` as a single
/// tag or a list, booleans defaulted off.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCatalog {
    title: String,
    scenes: Vec<RawScene>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawScene {
    id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chapter: Option<ChapterHeading>,
    body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<Choice>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    ending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requires: Option<Requirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    media: Option<MediaRef>,
}

impl TryFrom<RawCatalog> for StoryCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let scenes = raw
            .scenes
            .into_iter()
            .map(|scene| {
                let kind = match scene.options {
                    Some(options) => SceneKind::Choice { options },
                    None => SceneKind::Narrative,
                };
                Scene::assemble(
                    scene.id,
                    scene.chapter,
                    scene.body,
                    kind,
                    scene.ending,
                    scene.requires,
                    scene.media,
                )
            })
            .collect();
        StoryCatalog::new(raw.title, scenes)
    }
}

impl From<StoryCatalog> for RawCatalog {
    fn from(catalog: StoryCatalog) -> Self {
        let scenes = catalog
            .scenes
            .iter()
            .map(|scene| RawScene {
                id: scene.id(),
                chapter: scene.chapter().cloned(),
                body: scene.body().to_string(),
                options: match scene.kind() {
                    SceneKind::Narrative => None,
                    SceneKind::Choice { options } => Some(options.clone()),
                },
                ending: scene.is_ending(),
                requires: scene.requires().cloned(),
                media: scene.media().cloned(),
            })
            .collect();
        RawCatalog {
            title: catalog.title,
            scenes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_choice(id: u32) -> Scene {
        Scene::choice(
            id,
            "She replied...",
            vec![
                Choice::new("Warm", "Kind words.", ChoiceTag::InterestedResponse),
                Choice::new("Curt", "Short words.", ChoiceTag::DryResponse),
            ],
        )
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(
            StoryCatalog::new("empty", Vec::new()).unwrap_err(),
            CatalogError::Empty
        );
    }

    #[test]
    fn duplicate_scene_ids_are_rejected() {
        let scenes = vec![Scene::narrative(0, "a"), Scene::narrative(0, "b")];
        assert_eq!(
            StoryCatalog::new("dup", scenes).unwrap_err(),
            CatalogError::DuplicateSceneId { id: 0 }
        );
    }

    #[test]
    fn choice_scene_without_options_is_rejected() {
        let scenes = vec![Scene::choice(0, "pick", Vec::new())];
        assert_eq!(
            StoryCatalog::new("bare", scenes).unwrap_err(),
            CatalogError::NoOptions { scene_id: 0 }
        );
    }

    #[test]
    fn duplicate_tags_within_a_scene_are_rejected() {
        let scenes = vec![Scene::choice(
            0,
            "pick",
            vec![
                Choice::new("a", "a", ChoiceTag::Ignored),
                Choice::new("b", "b", ChoiceTag::Ignored),
            ],
        )];
        assert_eq!(
            StoryCatalog::new("dup-tag", scenes).unwrap_err(),
            CatalogError::DuplicateChoiceTag {
                scene_id: 0,
                tag: ChoiceTag::Ignored,
            }
        );
    }

    #[test]
    fn gate_over_unproduced_tag_is_rejected() {
        let scenes = vec![
            reply_choice(0),
            Scene::narrative(1, "later").with_requirement(ChoiceTag::AcceptMarriage),
        ];
        assert_eq!(
            StoryCatalog::new("dangling", scenes).unwrap_err(),
            CatalogError::UnproducedTag {
                scene_id: 1,
                tag: ChoiceTag::AcceptMarriage,
            }
        );
    }

    #[test]
    fn valid_catalog_exposes_scenes_in_order() {
        let scenes = vec![
            Scene::narrative(0, "opening"),
            reply_choice(1),
            Scene::narrative(2, "warm path").with_requirement(ChoiceTag::InterestedResponse),
        ];
        let catalog = StoryCatalog::new("mini", scenes).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.scene_at(1).unwrap().id(), 1);
        assert!(catalog.scene_at(3).is_none());
        assert!(catalog.produced_tags().contains(&ChoiceTag::DryResponse));
    }

    #[test]
    fn deserialization_runs_validation() {
        let doc = r#"{
            "title": "broken",
            "scenes": [
                { "id": 0, "body": "gated", "requires": "ignored" }
            ]
        }"#;
        let err = serde_json::from_str::<StoryCatalog>(doc).unwrap_err();
        assert!(err.to_string().contains("no choice produces"));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let scenes = vec![
            Scene::narrative(0, "opening").with_chapter("Chapter 1", "The Comment"),
            reply_choice(1),
            Scene::narrative(2, "warm path")
                .with_requirement([ChoiceTag::InterestedResponse, ChoiceTag::DryResponse])
                .with_media("/images/proposal.jpg")
                .ending(),
        ];
        let catalog = StoryCatalog::new("mini", scenes).unwrap();

        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let reparsed: StoryCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, reparsed);
    }
}
