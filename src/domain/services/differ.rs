//! Differ Domain Service
//!
//! Computes the difference between an effective section and its defaults
//! (what must be stored locally to reconstruct it), and line diffs of the
//! local file for save previews.

use std::cmp::Ordering;

use similar::{ChangeTag, TextDiff};

use crate::domain::entities::Section;
use crate::domain::value_objects::Value;

/// Total order over values, used only to decide equality.
///
/// - two lists compare by their canonical (JSON) forms
/// - a list is always greater than a scalar
/// - two scalars compare as strings
pub fn compare_elements(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::List(_), Value::List(_)) => a.canonical().cmp(&b.canonical()),
        (Value::List(_), Value::Scalar(_)) => Ordering::Greater,
        (Value::Scalar(_), Value::List(_)) => Ordering::Less,
        (Value::Scalar(x), Value::Scalar(y)) => x.cmp(y),
    }
}

/// Entries of `modified` that are absent from `original` or differ from it.
///
/// Keys that only exist in `original` are dropped.
pub fn array_unmerge(original: &Section, modified: &Section) -> Section {
    modified
        .iter()
        .filter(|(key, value)| match original.get(key) {
            Some(default) => compare_elements(value, default) != Ordering::Equal,
            None => true,
        })
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Whether two sections differ under the comparison rule.
pub fn sections_differ(a: &Section, b: &Section) -> bool {
    if a.len() != b.len() {
        return true;
    }
    a.iter().any(|(key, value)| match b.get(key) {
        Some(other) => compare_elements(value, other) != Ordering::Equal,
        None => true,
    })
}

/// A single line change in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// The type of change
    pub tag: DiffTag,
    /// Line number in the old version (if applicable)
    pub old_line: Option<usize>,
    /// Line number in the new version (if applicable)
    pub new_line: Option<usize>,
    /// The content of the line
    pub content: String,
}

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of a line diff
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub additions: usize,
    pub deletions: usize,
    pub has_changes: bool,
}

impl DiffResult {
    /// Only the inserted and deleted lines
    pub fn changed_lines(&self) -> Vec<&DiffLine> {
        self.lines
            .iter()
            .filter(|l| l.tag != DiffTag::Equal)
            .collect()
    }

    /// Short summary, e.g. "+5, -3"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Line differ for configuration file text
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Compute the line diff between two texts
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);

        let mut result = DiffResult::default();

        for change in text_diff.iter_all_changes() {
            let tag = DiffTag::from(change.tag());

            match tag {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }

            result.lines.push(DiffLine {
                tag,
                old_line: change.old_index().map(|i| i + 1),
                new_line: change.new_index().map(|i| i + 1),
                content: change.value().to_string(),
            });
        }

        result.has_changes = result.additions > 0 || result.deletions > 0;
        result
    }
}
