//! Skill Truncator — caps how many items each skill group shows.

use crate::models::SkillGroup;

/// Keeps the first `max_per_group` items of every group.
///
/// Groups are never dropped or reordered. `max_per_group <= 0` keeps every
/// group with an empty item list.
pub fn truncate_skills(groups: &[SkillGroup], max_per_group: i64) -> Vec<SkillGroup> {
    let cap = usize::try_from(max_per_group).unwrap_or(0);

    groups
        .iter()
        .map(|group| SkillGroup {
            name: group.name.clone(),
            items: group.items.iter().take(cap).cloned().collect(),
        })
        .collect()
}
