//! Requirement evaluation and the forward eligibility scan
//!
//! Both functions are pure: they read the catalog and history and return a
//! verdict, independent of any rendering timer or engine state.

use crate::types::catalog::StoryCatalog;
use crate::types::tag::{ChoiceTag, Requirement};

/// Whether a gating requirement is satisfied by the accumulated history.
///
/// An absent requirement is always satisfied. A multi-tag requirement is
/// conjunctive: every listed tag must appear somewhere in `history`. Order
/// and multiplicity of history entries are irrelevant, so the result is
/// monotonic - growing the history never turns `true` into `false`.
pub fn is_satisfied(requirement: Option<&Requirement>, history: &[ChoiceTag]) -> bool {
    match requirement {
        None => true,
        Some(requirement) => requirement
            .tags()
            .iter()
            .all(|tag| history.contains(tag)),
    }
}

/// Index of the first scene at or after `start` whose requirement the
/// history satisfies, or `None` when no eligible scene remains.
///
/// Scenes skipped by this scan are permanently bypassed for the
/// play-through: the traversal never moves backwards.
pub fn next_eligible(
    catalog: &StoryCatalog,
    history: &[ChoiceTag],
    start: usize,
) -> Option<usize> {
    for index in start..catalog.len() {
        let scene = catalog.scene_at(index)?;
        if is_satisfied(scene.requires(), history) {
            return Some(index);
        }
        log::trace!(
            "scene {} skipped, gate {:?} unmet by history {:?}",
            scene.id(),
            scene.requires(),
            history
        );
    }
    None
}
