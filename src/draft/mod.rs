//! Collecting and saving a new recipe.
//!
//! A [`RecipeDraft`] backs the add-recipe form: free-text fields, ingredient
//! and instruction builders, a category picked from [`Category::ALL`] and an
//! optional image. Saving writes the image to the [`ImageStore`] and appends
//! the finished recipe to the catalog.

use crate::catalog::RecipeCatalog;
use crate::model::{Category, Ingredient, Nutrition, Recipe};
use thiserror::Error;
use uuid::Uuid;

mod image;

pub use image::{ImagePicker, ImageSource, ImageStore, PickedImage};

/// Validation failures reported back to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please enter an item and amount.")]
    MissingItemOrAmount,

    #[error("Invalid amount. Please enter a valid numeric value.")]
    InvalidAmount(String),

    #[error("Please enter an instruction.")]
    EmptyInstruction,

    #[error("No entry at position {0}")]
    OutOfRange(usize),
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Error saving image: {0}")]
    ImageWrite(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    /// Raw text from the servings field
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub category: Category,
    ingredients: Vec<Ingredient>,
    instructions: Vec<String>,
    image: Option<Vec<u8>>,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the ingredient fields and appends the ingredient.
    ///
    /// Nothing is appended when validation fails. An empty unit is stored as
    /// no unit.
    pub fn add_ingredient(&mut self, item: &str, amount: &str, unit: &str) -> Result<(), DraftError> {
        let item = item.trim();
        let amount = amount.trim();
        if item.is_empty() || amount.is_empty() {
            return Err(DraftError::MissingItemOrAmount);
        }

        let value = amount
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| DraftError::InvalidAmount(amount.to_string()))?;

        let unit = unit.trim();
        let unit = (!unit.is_empty()).then(|| unit.to_string());
        self.ingredients.push(Ingredient::new(item, value, unit));
        Ok(())
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Result<Ingredient, DraftError> {
        if index >= self.ingredients.len() {
            return Err(DraftError::OutOfRange(index));
        }
        Ok(self.ingredients.remove(index))
    }

    pub fn add_instruction(&mut self, text: &str) -> Result<(), DraftError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DraftError::EmptyInstruction);
        }
        self.instructions.push(text.to_string());
        Ok(())
    }

    pub fn remove_instruction(&mut self, index: usize) -> Result<String, DraftError> {
        if index >= self.instructions.len() {
            return Err(DraftError::OutOfRange(index));
        }
        Ok(self.instructions.remove(index))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Asks the picker for an image. A cancelled pick keeps the current one.
    pub fn pick_image(&mut self, picker: &mut dyn ImagePicker, source: ImageSource) -> bool {
        match picker.pick_image(source) {
            PickedImage::Picked(bytes) => {
                self.image = Some(bytes);
                true
            }
            PickedImage::Cancelled => false,
        }
    }

    pub fn set_image(&mut self, bytes: Vec<u8>) {
        self.image = Some(bytes);
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Serving count the saved recipe will carry. Anything that is not a
    /// positive integer falls back to 1.
    pub fn base_servings(&self) -> u32 {
        self.servings
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(1)
    }

    /// Writes the image, builds the recipe and appends it to `catalog`.
    ///
    /// Returns the id of the new recipe. If the image cannot be written the
    /// catalog is left untouched.
    pub fn save(&self, store: &ImageStore, catalog: &mut RecipeCatalog) -> Result<String, SaveError> {
        let image = match &self.image {
            Some(bytes) => store.write(bytes).map_err(|e| {
                log::error!("Error saving image to {}: {}", store.dir(), e);
                SaveError::ImageWrite(e)
            })?,
            None => String::new(),
        };

        let recipe = self.build(image);
        let id = recipe.id.clone();
        catalog.append(recipe);
        Ok(id)
    }

    fn build(&self, image: String) -> Recipe {
        Recipe {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            servings: self.base_servings(),
            prep_time: self.prep_time.trim().to_string(),
            cook_time: self.cook_time.trim().to_string(),
            total_time: String::new(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            notes: String::new(),
            tags: Vec::new(),
            category: self.category.label().to_string(),
            image,
            nutrition: Nutrition::default(),
            published_date: String::new(),
            rating: 0.0,
        }
    }
}
