//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod differ;
pub mod layer_merger;
pub mod planner;

pub use differ::{array_unmerge, compare_elements, sections_differ, DiffLine, DiffResult, DiffTag, Differ};
pub use layer_merger::{merge_sections, MergedSection, OverrideInfo};
pub use planner::{plan_save, PlannedSection, SavePlan, SectionAction};
