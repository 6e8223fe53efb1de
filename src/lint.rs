//! Catalog diagnostics
//!
//! Construction-time validation rejects malformed catalogs; this module
//! finds content that is well-formed but dead. The main customer is the
//! conjunctive-gating ambiguity: a multi-tag gate whose tags can never
//! co-occur in one play-through usually means the author intended "any of"
//! where the engine reads "all of". Such gates are surfaced as warnings
//! instead of silently never firing.

use crate::eligibility::next_eligible;
use crate::types::catalog::StoryCatalog;
use crate::types::scene::SceneKind;
use crate::types::tag::ChoiceTag;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Lint severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LintLevel {
    /// Should be reviewed; the content cannot behave as written.
    Warning,
    /// For your information.
    Info,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintIssue {
    pub level: LintLevel,
    pub message: String,
    /// Scene the finding is anchored to, when there is one.
    pub scene_id: Option<u32>,
    pub category: String,
}

/// Result of linting a catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LintResult {
    pub issues: Vec<LintIssue>,
    pub warning_count: usize,
    pub info_count: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: LintIssue) {
        match issue.level {
            LintLevel::Warning => self.warning_count += 1,
            LintLevel::Info => self.info_count += 1,
        }
        self.issues.push(issue);
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Lint a validated catalog.
pub fn lint(catalog: &StoryCatalog) -> LintResult {
    let mut result = LintResult::new();
    let walk = walk_all_paths(catalog);

    check_reachability(catalog, &walk, &mut result);
    check_unconsulted_tags(catalog, &mut result);

    result
}

/// Everything the exhaustive walk of the catalog discovered.
struct WalkOutcome {
    /// Scene indices some play-through lands on.
    visited: HashSet<usize>,
    /// Histories of completed play-throughs. Histories only grow, so any
    /// satisfiable requirement is satisfied by at least one of these.
    final_histories: Vec<BTreeSet<ChoiceTag>>,
}

/// Exhaustively simulate every play-through. The catalog is forward-only
/// and the tag set is closed, so the state space is small; memoization on
/// (position, history-set) keeps revisits out.
fn walk_all_paths(catalog: &StoryCatalog) -> WalkOutcome {
    let mut visited = HashSet::new();
    let mut final_histories = Vec::new();
    let mut seen_states: HashSet<(usize, BTreeSet<ChoiceTag>)> = HashSet::new();
    let mut stack: Vec<(usize, Vec<ChoiceTag>)> = vec![(0, Vec::new())];

    while let Some((index, history)) = stack.pop() {
        let key = (index, history.iter().copied().collect::<BTreeSet<_>>());
        if !seen_states.insert(key) {
            continue;
        }
        visited.insert(index);

        let scene = match catalog.scene_at(index) {
            Some(scene) => scene,
            None => continue,
        };

        if scene.is_ending() {
            final_histories.push(history.iter().copied().collect());
            continue;
        }

        match scene.kind() {
            SceneKind::Narrative => {
                follow(catalog, index, history, &mut stack, &mut final_histories);
            }
            SceneKind::Choice { options } => {
                for option in options {
                    let mut branched = history.clone();
                    branched.push(option.tag);
                    follow(catalog, index, branched, &mut stack, &mut final_histories);
                }
            }
        }
    }

    WalkOutcome {
        visited,
        final_histories,
    }
}

fn follow(
    catalog: &StoryCatalog,
    index: usize,
    history: Vec<ChoiceTag>,
    stack: &mut Vec<(usize, Vec<ChoiceTag>)>,
    final_histories: &mut Vec<BTreeSet<ChoiceTag>>,
) {
    match next_eligible(catalog, &history, index + 1) {
        Some(next) => stack.push((next, history)),
        None => final_histories.push(history.into_iter().collect()),
    }
}

fn check_reachability(catalog: &StoryCatalog, walk: &WalkOutcome, result: &mut LintResult) {
    for (index, scene) in catalog.scenes().iter().enumerate() {
        if walk.visited.contains(&index) {
            continue;
        }

        let unsatisfiable_gate = scene.requires().is_some_and(|requirement| {
            requirement.tags().len() > 1
                && !walk
                    .final_histories
                    .iter()
                    .any(|history| requirement.tags().iter().all(|tag| history.contains(tag)))
        });

        if unsatisfiable_gate {
            result.add_issue(LintIssue {
                level: LintLevel::Warning,
                message: format!(
                    "scene {}: no play-through ever holds all of {:?}; \
                     if alternatives were intended, split the scene per tag",
                    scene.id(),
                    scene.requires().map(|r| r.tags()).unwrap_or_default()
                ),
                scene_id: Some(scene.id()),
                category: "gating".to_string(),
            });
        } else {
            result.add_issue(LintIssue {
                level: LintLevel::Warning,
                message: format!("scene {} is unreachable from scene 0", scene.id()),
                scene_id: Some(scene.id()),
                category: "reachability".to_string(),
            });
        }
    }
}

fn check_unconsulted_tags(catalog: &StoryCatalog, result: &mut LintResult) {
    let consulted: HashSet<ChoiceTag> = catalog
        .scenes()
        .iter()
        .filter_map(|scene| scene.requires())
        .flat_map(|requirement| requirement.tags().iter().copied())
        .collect();

    let mut produced: Vec<ChoiceTag> = catalog.produced_tags().into_iter().collect();
    produced.sort();

    for tag in produced {
        if !consulted.contains(&tag) {
            result.add_issue(LintIssue {
                level: LintLevel::Info,
                message: format!("choice tag `{tag}` is recorded but no gate consults it"),
                scene_id: None,
                category: "tags".to_string(),
            });
        }
    }
}
