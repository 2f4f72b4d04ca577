use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recipe ids the user has marked as favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    /// Flips the favorite flag for `id` and returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let favorited = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        log::debug!("Recipe {} favorite = {}", id, favorited);
        favorited
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
