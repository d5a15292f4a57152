//! Save planning service
//!
//! Pure domain logic deciding what the local override file must contain.
//! It compares the runtime view of every section with the defaults and with
//! what is already stored locally, without performing any I/O.

use crate::domain::entities::{Document, Section};
use crate::domain::value_objects::Value;
use crate::domain::services::differ::{array_unmerge, sections_differ};

/// Whether a section forces the local file to be rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    /// Stored overrides no longer match the runtime view
    Write,
    /// Stored overrides are up to date
    Skip,
}

/// The plan for a single section
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSection {
    /// Section name
    pub name: String,
    /// Non-default values of the runtime view (what would be written)
    pub config: Section,
    /// Non-default values currently stored locally
    pub local: Section,
    pub action: SectionAction,
}

impl PlannedSection {
    pub fn is_dirty(&self) -> bool {
        matches!(self.action, SectionAction::Write)
    }
}

/// Result of planning a save
#[derive(Debug, Clone, Default)]
pub struct SavePlan {
    pub sections: Vec<PlannedSection>,
}

impl SavePlan {
    /// True when at least one section must be rewritten
    pub fn is_dirty(&self) -> bool {
        self.sections.iter().any(PlannedSection::is_dirty)
    }

    pub fn dirty_sections(&self) -> impl Iterator<Item = &PlannedSection> {
        self.sections.iter().filter(|s| s.is_dirty())
    }

    /// The document to store locally: every section with non-default values.
    pub fn to_document(&self) -> Document {
        self.sections
            .iter()
            .filter(|s| !s.config.is_empty())
            .map(|s| (s.name.clone(), s.config.clone()))
            .collect()
    }
}

/// Plan a save.
///
/// `cache` is the runtime view. Local sections that were never read are
/// taken as-is so untouched overrides survive the rewrite. Sections are
/// visited in global order, then cache-only sections in insertion order.
///
/// A section is dirty when exactly one of {runtime diff, stored diff} is
/// empty, or both are non-empty and differ. Two empty diffs are never dirty.
/// Empty lists have no written form and are left out of the runtime diff.
pub fn plan_save(global: &Document, local: &Document, cache: &Document) -> SavePlan {
    let mut effective = cache.clone();
    for (name, section) in local.iter() {
        if !effective.contains(name) {
            effective.insert(name, section.clone());
        }
    }

    let mut names: Vec<&str> = global.names().collect();
    for name in effective.names() {
        if !global.contains(name) {
            names.push(name);
        }
    }

    let empty = Section::new();
    let mut plan = SavePlan::default();

    for name in names {
        let Some(current) = effective.get(name) else {
            continue;
        };
        let defaults = global.get(name).unwrap_or(&empty);

        let config = without_empty_lists(array_unmerge(defaults, current));
        let stored = array_unmerge(defaults, local.get(name).unwrap_or(&empty));

        let dirty = config.is_empty() != stored.is_empty()
            || (!config.is_empty() && sections_differ(&config, &stored));

        plan.sections.push(PlannedSection {
            name: name.to_string(),
            config,
            local: stored,
            action: if dirty {
                SectionAction::Write
            } else {
                SectionAction::Skip
            },
        });
    }

    plan
}

fn without_empty_lists(section: Section) -> Section {
    section
        .into_iter()
        .filter(|(_, value)| !matches!(value, Value::List(items) if items.is_empty()))
        .collect()
}
