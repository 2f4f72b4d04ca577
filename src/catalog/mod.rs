//! The in-memory recipe catalog.
//!
//! The catalog is loaded once from the bundled JSON document and then only
//! grows through [`RecipeCatalog::append`]. The category index is rebuilt on
//! every mutation so it always covers every loaded recipe.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;

mod favorites;
mod index;

pub use favorites::Favorites;
pub use index::CategoryIndex;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to locate recipe data file: {0}")]
    SourceMissing(Utf8PathBuf),

    #[error("Failed to read recipe data file: {0}")]
    IoError(#[from] io::Error),

    #[error("Unknown recipe id: {0}")]
    UnknownRecipe(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    categories: CategoryIndex,
    favorites: Favorites,
}

impl RecipeCatalog {
    /// Loads the catalog from a bundled JSON file.
    ///
    /// A missing file is an error the app cannot recover from. A file that
    /// exists but does not decode is logged and yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SourceMissing` if `path` does not exist and
    /// `CatalogError::IoError` if it exists but cannot be read.
    pub fn load(path: &Utf8Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::SourceMissing(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let catalog = Self::from_json(&data);
        log::info!("Loaded {} recipes from {}", catalog.len(), path);
        Ok(catalog)
    }

    /// Builds a catalog from a JSON array of recipes.
    pub fn from_json(data: &str) -> Self {
        match serde_json::from_str::<Vec<Recipe>>(data) {
            Ok(recipes) => Self::from_recipes(recipes),
            Err(e) => {
                log::error!("Failed to decode recipe data: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let categories = CategoryIndex::from_recipes(&recipes);
        RecipeCatalog {
            recipes,
            categories,
            favorites: Favorites::default(),
        }
    }

    /// Adds a recipe and refreshes the category index.
    pub fn append(&mut self, recipe: Recipe) {
        log::info!("Adding recipe {} ({})", recipe.name, recipe.id);
        self.recipes.push(recipe);
        self.categories = CategoryIndex::from_recipes(&self.recipes);
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn recipes_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Recipe> {
        self.recipes.iter().filter(move |r| r.category == category)
    }

    /// Returns the recipe whose image represents `category` in the category list.
    pub fn first_in_category(&self, category: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.category == category)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Toggles the favorite flag of a recipe in this catalog.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, CatalogError> {
        if self.get(id).is_none() {
            return Err(CatalogError::UnknownRecipe(id.to_string()));
        }
        Ok(self.favorites.toggle(id))
    }

    pub fn favorite_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(|r| self.favorites.contains(&r.id))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
