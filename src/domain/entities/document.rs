//! Document entity - a whole configuration file
//!
//! Maps section names to sections. Unlike keys inside a section, section
//! order is kept as first inserted so files are written back in the order
//! administrators are used to.

use crate::domain::entities::Section;

/// Ordered mapping from section name to section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<(String, Section)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.insert(name, section);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Insert or replace a section; a replaced section keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => Some(std::mem::replace(existing, section)),
            None => {
                self.sections.push((name, section));
                None
            }
        }
    }

    /// Mutable access to a section, creating an empty one at the end if needed.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.sections.push((name.to_string(), Section::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index].1
    }

    pub fn remove(&mut self, name: &str) -> Option<Section> {
        let index = self.sections.iter().position(|(n, _)| n == name)?;
        Some(self.sections.remove(index).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Section names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Copy of this document without empty sections
    pub fn without_empty_sections(&self) -> Document {
        Document {
            sections: self
                .sections
                .iter()
                .filter(|(_, s)| !s.is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl<N: Into<String>> FromIterator<(N, Section)> for Document {
    fn from_iter<I: IntoIterator<Item = (N, Section)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (name, section) in iter {
            doc.insert(name, section);
        }
        doc
    }
}
