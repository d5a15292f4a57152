//! Layer merger
//!
//! Merges one section across the global (default) and local (override)
//! layers:
//! - Same key: the local value wins (replaces entirely, lists included)
//! - Different keys: all are kept

use std::cmp::Ordering;

use crate::domain::entities::Section;
use crate::domain::services::differ::compare_elements;
use crate::domain::value_objects::Value;

/// A local key that shadows a global default with a different value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideInfo {
    pub key: String,
    pub default: Value,
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSection {
    pub section: Section,
    pub overrides: Vec<OverrideInfo>,
}

/// Merge a section from both layers.
///
/// Returns `None` when neither layer defines the section.
pub fn merge_sections(global: Option<&Section>, local: Option<&Section>) -> Option<MergedSection> {
    match (global, local) {
        (None, None) => None,
        (Some(global), None) => Some(MergedSection {
            section: global.clone(),
            overrides: Vec::new(),
        }),
        (None, Some(local)) => Some(MergedSection {
            section: local.clone(),
            overrides: Vec::new(),
        }),
        (Some(global), Some(local)) => {
            let overrides = local
                .iter()
                .filter_map(|(key, value)| {
                    let default = global.get(key)?;
                    (compare_elements(value, default) != Ordering::Equal).then(|| OverrideInfo {
                        key: key.to_string(),
                        default: default.clone(),
                        value: value.clone(),
                    })
                })
                .collect();

            let mut section = global.clone();
            section.extend_from(local);

            Some(MergedSection { section, overrides })
        }
    }
}
