use crate::model::Recipe;
use std::collections::BTreeSet;

/// Sorted set of distinct category labels found in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    labels: Vec<String>,
}

impl CategoryIndex {
    pub fn from_recipes<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Self {
        let labels: BTreeSet<&str> = recipes.into_iter().map(|r| r.category.as_str()).collect();
        CategoryIndex {
            labels: labels.into_iter().map(String::from).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels
            .binary_search_by(|probe| probe.as_str().cmp(label))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
