//! Searchable single-choice select, independent of any widget library.
//!
//! The select owns its option list and current selection. Until options
//! arrive it stays usable but empty and shows a loading placeholder.

use serde::{Deserialize, Serialize};

use crate::error::HomeLoanError;
use crate::HomeLoanResult;

pub const LOADING_PLACEHOLDER: &str = "Loading cities…";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlledSelect {
    label: String,
    placeholder: String,
    options: Vec<String>,
    selection: Option<String>,
    loading: bool,
}

impl ControlledSelect {
    /// A select waiting for its options.
    pub fn loading(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            options: Vec::new(),
            selection: None,
            loading: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Text shown while nothing is selected.
    pub fn placeholder(&self) -> &str {
        if self.loading {
            LOADING_PLACEHOLDER
        } else {
            &self.placeholder
        }
    }

    /// Install the option list. A selection no longer offered is dropped.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.loading = false;
        if let Some(current) = &self.selection {
            if !self.options.contains(current) {
                self.selection = None;
            }
        }
    }

    pub fn select(&mut self, value: &str) -> HomeLoanResult<()> {
        if !self.options.iter().any(|o| o == value) {
            return Err(HomeLoanError::InvalidInput {
                field: self.label.clone(),
                reason: format!("'{value}' is not one of the offered options"),
            });
        }
        self.selection = Some(value.to_string());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The selection as a form value: empty when unset.
    pub fn value(&self) -> &str {
        self.selection().unwrap_or("")
    }

    /// Options containing `query`, ignoring case. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<String> {
        ["Mumbai", "Navi Mumbai", "Pune"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_usable_before_options_arrive() {
        let s = ControlledSelect::loading("Property Location", "Select Property Location");
        assert!(s.is_loading());
        assert_eq!(s.placeholder(), LOADING_PLACEHOLDER);
        assert!(s.options().is_empty());
        assert_eq!(s.value(), "");
    }

    #[test]
    fn test_select_only_offered_values() {
        let mut s = ControlledSelect::loading("Property Location", "Select Property Location");
        s.set_options(cities());
        assert_eq!(s.placeholder(), "Select Property Location");
        assert!(s.select("Chennai").is_err());
        s.select("Pune").unwrap();
        assert_eq!(s.value(), "Pune");
        s.clear();
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn test_new_options_drop_stale_selection() {
        let mut s = ControlledSelect::loading("Office", "Select Office");
        s.set_options(cities());
        s.select("Mumbai").unwrap();
        s.set_options(vec!["Delhi".into()]);
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut s = ControlledSelect::loading("Office", "Select Office");
        s.set_options(cities());
        assert_eq!(s.search("mum"), vec!["Mumbai", "Navi Mumbai"]);
        assert_eq!(s.search("  ").len(), 3);
        assert!(s.search("xyz").is_empty());
    }
}
