use serde::{Deserialize, Serialize};

/// Number of blank option slots a new choice question starts with.
pub const DEFAULT_OPTION_SLOTS: usize = 4;

/// Ordered answer options of a choice-type question.
///
/// Edits made through [`OptionList::edit`] keep a single blank slot available at the end
/// of the list for the next option: a cleared option is dropped, and filling the last slot
/// opens a new one. [`OptionList::remove`] is the explicit delete and leaves the list as is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OptionList(Vec<String>);

impl OptionList {
    pub fn blank(slots: usize) -> Self {
        OptionList(vec![String::new(); slots])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Overwrites the option at `index` and re-sizes the list.
    ///
    /// Returns `None` when `index` is out of range, otherwise the index that was dropped
    /// because the new value was blank (if any).
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> Option<Option<usize>> {
        let slot = self.0.get_mut(index)?;
        *slot = value.into();
        Some(self.normalize_after_edit(index))
    }

    /// Applies the blank-slot rule after the option at `index` was changed.
    ///
    /// The removal check runs before the append check.
    pub fn normalize_after_edit(&mut self, index: usize) -> Option<usize> {
        let mut removed = None;

        if self.0.get(index).is_some_and(|value| value.trim().is_empty()) {
            self.0.remove(index);
            removed = Some(index);
        }

        if self.0.last().is_some_and(|last| !last.is_empty()) {
            self.0.push(String::new());
        }

        removed
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Number of blank options at the end of the list.
    pub fn trailing_blanks(&self) -> usize {
        self.0.iter().rev().take_while(|value| value.is_empty()).count()
    }
}

impl From<Vec<String>> for OptionList {
    fn from(options: Vec<String>) -> Self {
        OptionList(options)
    }
}

impl<'a> From<Vec<&'a str>> for OptionList {
    fn from(options: Vec<&'a str>) -> Self {
        OptionList(options.into_iter().map(str::to_string).collect())
    }
}
