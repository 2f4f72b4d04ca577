//! UniFFI bindings for the iOS and Android apps.
//!
//! The platform UI owns the screens; this module exposes the catalog, the
//! add-recipe draft and the cook timer as FFI objects. Domain types are
//! converted to plain records at the boundary.

use crate::catalog::{CatalogError, RecipeCatalog};
use crate::config::{Config, ConfigError};
use crate::draft::{DraftError, ImageStore, RecipeDraft, SaveError};
use crate::model::{Category, Ingredient, Nutrition, Recipe, UnknownCategory};
use crate::quantity::scale::{
    clamp_servings_to, scale_ingredients_with_precision, ScaleError, ScaledIngredient,
};
use crate::search::search as search_internal;
use crate::share::share_text_for_servings_with_precision;
use crate::timer::{CookTimer, TimerState};
use camino::Utf8PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum FoodScribeError {
    #[error("Recipe data missing: {message}")]
    SourceMissing { message: String },

    #[error("Recipe not found: {message}")]
    NotFound { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Invalid servings: {message}")]
    InvalidServings { message: String },
}

impl From<CatalogError> for FoodScribeError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::SourceMissing(p) => FoodScribeError::SourceMissing {
                message: p.to_string(),
            },
            CatalogError::IoError(e) => FoodScribeError::IoError {
                message: e.to_string(),
            },
            CatalogError::UnknownRecipe(id) => FoodScribeError::NotFound { message: id },
        }
    }
}

impl From<ConfigError> for FoodScribeError {
    fn from(e: ConfigError) -> Self {
        FoodScribeError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<DraftError> for FoodScribeError {
    fn from(e: DraftError) -> Self {
        FoodScribeError::InvalidInput {
            message: e.to_string(),
        }
    }
}

impl From<UnknownCategory> for FoodScribeError {
    fn from(e: UnknownCategory) -> Self {
        FoodScribeError::InvalidInput {
            message: e.to_string(),
        }
    }
}

impl From<SaveError> for FoodScribeError {
    fn from(e: SaveError) -> Self {
        FoodScribeError::IoError {
            message: e.to_string(),
        }
    }
}

impl From<ScaleError> for FoodScribeError {
    fn from(e: ScaleError) -> Self {
        FoodScribeError::InvalidServings {
            message: e.to_string(),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredient {
    pub item: String,
    pub amount: f64,
    pub unit: Option<String>,
}

impl From<&Ingredient> for FfiIngredient {
    fn from(i: &Ingredient) -> Self {
        FfiIngredient {
            item: i.item.clone(),
            amount: i.amount,
            unit: i.unit.clone(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNutrition {
    pub calories: u32,
    pub fat: u32,
    pub carbs: u32,
    pub protein: u32,
}

impl From<&Nutrition> for FfiNutrition {
    fn from(n: &Nutrition) -> Self {
        FfiNutrition {
            calories: n.calories,
            fat: n.fat,
            carbs: n.carbs,
            protein: n.protein,
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub servings: u32,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub ingredients: Vec<FfiIngredient>,
    pub instructions: Vec<String>,
    pub notes: String,
    pub tags: Vec<String>,
    pub category: String,
    pub image: String,
    pub nutrition: FfiNutrition,
    pub published_date: String,
    pub rating: f64,
    /// True if the user marked this recipe as a favorite
    pub is_favorite: bool,
}

impl FfiRecipe {
    fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        FfiRecipe {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            servings: recipe.servings,
            prep_time: recipe.prep_time.clone(),
            cook_time: recipe.cook_time.clone(),
            total_time: recipe.total_time.clone(),
            ingredients: recipe.ingredients.iter().map(FfiIngredient::from).collect(),
            instructions: recipe.instructions.clone(),
            notes: recipe.notes.clone(),
            tags: recipe.tags.clone(),
            category: recipe.category.clone(),
            image: recipe.image.clone(),
            nutrition: FfiNutrition::from(&recipe.nutrition),
            published_date: recipe.published_date.clone(),
            rating: recipe.rating,
            is_favorite,
        }
    }
}

/// An ingredient scaled to the selected serving count.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScaledIngredient {
    pub item: String,
    pub amount: f64,
    pub unit: Option<String>,
    /// Amount as a whole number or fraction, e.g. "3/4"
    pub display_amount: String,
    /// Full line, e.g. "3/4 cup Flour"
    pub display_line: String,
}

impl From<&ScaledIngredient> for FfiScaledIngredient {
    fn from(s: &ScaledIngredient) -> Self {
        FfiScaledIngredient {
            item: s.item.clone(),
            amount: s.amount,
            unit: s.unit.clone(),
            display_amount: s.display_amount.clone(),
            display_line: s.display_line(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiTimerState {
    Idle,
    Running,
    Expired,
}

impl From<TimerState> for FfiTimerState {
    fn from(s: TimerState) -> Self {
        match s {
            TimerState::Idle => FfiTimerState::Idle,
            TimerState::Running => FfiTimerState::Running,
            TimerState::Expired => FfiTimerState::Expired,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfig {
    pub data_file: String,
    pub image_dir: String,
    pub min_servings: u32,
    pub max_servings: u32,
    pub quantity_epsilon: f64,
    pub tick_interval_ms: u64,
}

impl From<&Config> for FfiConfig {
    fn from(c: &Config) -> Self {
        FfiConfig {
            data_file: c.data_file.to_string(),
            image_dir: c.image_dir.to_string(),
            min_servings: c.min_servings,
            max_servings: c.max_servings,
            quantity_epsilon: c.quantity_epsilon,
            tick_interval_ms: c.tick_interval_ms,
        }
    }
}

/// The recipe catalog shared by every screen.
#[derive(uniffi::Object)]
pub struct FfiCatalog {
    inner: Mutex<RecipeCatalog>,
    config: Config,
}

#[uniffi::export]
impl FfiCatalog {
    /// Returns the sorted, distinct category labels.
    pub fn categories(&self) -> Vec<String> {
        lock(&self.inner).categories().as_slice().to_vec()
    }

    /// Returns every recipe in catalog order.
    pub fn recipes(&self) -> Vec<FfiRecipe> {
        let catalog = lock(&self.inner);
        catalog
            .recipes()
            .iter()
            .map(|r| FfiRecipe::new(r, catalog.favorites().contains(&r.id)))
            .collect()
    }

    /// Returns the recipes filed under `category`.
    pub fn recipes_in_category(&self, category: String) -> Vec<FfiRecipe> {
        let catalog = lock(&self.inner);
        catalog
            .recipes_in_category(&category)
            .map(|r| FfiRecipe::new(r, catalog.favorites().contains(&r.id)))
            .collect()
    }

    /// Returns the image of the first recipe in `category`, used as its thumbnail.
    pub fn category_image(&self, category: String) -> Option<String> {
        lock(&self.inner)
            .first_in_category(&category)
            .map(|r| r.image.clone())
    }

    /// Gets a recipe by id.
    pub fn recipe(&self, id: String) -> Option<FfiRecipe> {
        let catalog = lock(&self.inner);
        catalog
            .get(&id)
            .map(|r| FfiRecipe::new(r, catalog.favorites().contains(&r.id)))
    }

    /// Searches recipe names, descriptions, tags, ingredients and steps.
    pub fn search(&self, query: String) -> Vec<FfiRecipe> {
        let catalog = lock(&self.inner);
        search_internal(&catalog, &query)
            .into_iter()
            .map(|r| FfiRecipe::new(r, catalog.favorites().contains(&r.id)))
            .collect()
    }

    /// Toggles a recipe's favorite flag and returns the new value.
    pub fn toggle_favorite(&self, id: String) -> Result<bool, FoodScribeError> {
        Ok(lock(&self.inner).toggle_favorite(&id)?)
    }

    pub fn favorite_recipes(&self) -> Vec<FfiRecipe> {
        lock(&self.inner)
            .favorite_recipes()
            .map(|r| FfiRecipe::new(r, true))
            .collect()
    }

    /// Clamps a requested serving count into the supported range.
    pub fn clamp_servings(&self, servings: u32) -> u32 {
        clamp_servings_to(servings, &self.config.servings_range())
    }

    /// Returns a recipe's ingredients scaled to `servings`.
    ///
    /// `servings` is clamped into the configured range first.
    pub fn scaled_ingredients(
        &self,
        id: String,
        servings: u32,
    ) -> Result<Vec<FfiScaledIngredient>, FoodScribeError> {
        let catalog = lock(&self.inner);
        let recipe = catalog
            .get(&id)
            .ok_or(FoodScribeError::NotFound { message: id.clone() })?;
        let scaled = scale_ingredients_with_precision(
            &recipe.ingredients,
            recipe.servings,
            self.clamp_servings(servings),
            self.config.quantity_epsilon,
        )?;
        Ok(scaled.iter().map(FfiScaledIngredient::from).collect())
    }

    /// Returns the text handed to the share sheet.
    pub fn share_text(&self, id: String, servings: u32) -> Result<String, FoodScribeError> {
        let catalog = lock(&self.inner);
        let recipe = catalog
            .get(&id)
            .ok_or(FoodScribeError::NotFound { message: id.clone() })?;
        Ok(share_text_for_servings_with_precision(
            recipe,
            self.clamp_servings(servings),
            self.config.quantity_epsilon,
        )?)
    }

    /// Creates an idle cook timer loaded with the recipe's cook time.
    pub fn cook_timer(&self, id: String) -> Result<Arc<FfiCookTimer>, FoodScribeError> {
        let catalog = lock(&self.inner);
        let recipe = catalog
            .get(&id)
            .ok_or(FoodScribeError::NotFound { message: id.clone() })?;
        let timer = CookTimer::from_text(&recipe.cook_time).with_interval(self.config.tick_interval());
        Ok(Arc::new(FfiCookTimer::new(timer)))
    }

    pub fn config(&self) -> FfiConfig {
        FfiConfig::from(&self.config)
    }

    pub fn len(&self) -> u64 {
        lock(&self.inner).len() as u64
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).is_empty()
    }
}

impl FfiCatalog {
    fn new(catalog: RecipeCatalog, config: Config) -> Self {
        FfiCatalog {
            inner: Mutex::new(catalog),
            config,
        }
    }
}

/// Backing state of the add-recipe form.
#[derive(uniffi::Object)]
pub struct FfiRecipeDraft {
    inner: Mutex<RecipeDraft>,
}

#[uniffi::export]
impl FfiRecipeDraft {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(FfiRecipeDraft {
            inner: Mutex::new(RecipeDraft::new()),
        })
    }

    pub fn set_name(&self, name: String) {
        lock(&self.inner).name = name;
    }

    pub fn set_description(&self, description: String) {
        lock(&self.inner).description = description;
    }

    pub fn set_servings(&self, servings: String) {
        lock(&self.inner).servings = servings;
    }

    pub fn set_prep_time(&self, prep_time: String) {
        lock(&self.inner).prep_time = prep_time;
    }

    pub fn set_cook_time(&self, cook_time: String) {
        lock(&self.inner).cook_time = cook_time;
    }

    /// Selects one of the labels returned by [`available_categories`].
    pub fn set_category(&self, category: String) -> Result<(), FoodScribeError> {
        lock(&self.inner).category = category.parse::<Category>()?;
        Ok(())
    }

    pub fn category(&self) -> String {
        lock(&self.inner).category.to_string()
    }

    /// Validates and appends an ingredient. The error message is meant for the user.
    pub fn add_ingredient(
        &self,
        item: String,
        amount: String,
        unit: String,
    ) -> Result<(), FoodScribeError> {
        Ok(lock(&self.inner).add_ingredient(&item, &amount, &unit)?)
    }

    pub fn remove_ingredient(&self, index: u32) -> Result<(), FoodScribeError> {
        lock(&self.inner).remove_ingredient(index as usize)?;
        Ok(())
    }

    pub fn ingredients(&self) -> Vec<FfiIngredient> {
        lock(&self.inner)
            .ingredients()
            .iter()
            .map(FfiIngredient::from)
            .collect()
    }

    pub fn add_instruction(&self, text: String) -> Result<(), FoodScribeError> {
        Ok(lock(&self.inner).add_instruction(&text)?)
    }

    pub fn remove_instruction(&self, index: u32) -> Result<(), FoodScribeError> {
        lock(&self.inner).remove_instruction(index as usize)?;
        Ok(())
    }

    pub fn instructions(&self) -> Vec<String> {
        lock(&self.inner).instructions().to_vec()
    }

    /// Stores the JPEG bytes returned by the platform image picker.
    pub fn set_image(&self, bytes: Vec<u8>) {
        lock(&self.inner).set_image(bytes);
    }

    pub fn has_image(&self) -> bool {
        lock(&self.inner).has_image()
    }

    /// Saves the draft into `catalog`, writing the image to the configured
    /// image directory. Returns the new recipe id.
    pub fn save(&self, catalog: Arc<FfiCatalog>) -> Result<String, FoodScribeError> {
        let draft = lock(&self.inner);
        let store = ImageStore::new(catalog.config.image_dir.clone());
        let mut inner = lock(&catalog.inner);
        Ok(draft.save(&store, &mut inner)?)
    }
}

/// Countdown timer driven by the platform's repeating timer.
///
/// Call `start`, schedule a repeating callback every `tick_interval_ms`
/// milliseconds that calls `tick`, and invalidate it once `tick` no longer
/// returns `Running`.
#[derive(uniffi::Object)]
pub struct FfiCookTimer {
    inner: Mutex<CookTimer>,
}

#[uniffi::export]
impl FfiCookTimer {
    /// Creates a timer from a duration such as "1 hour 30 minutes" that
    /// ticks every `tick_interval_ms` milliseconds.
    ///
    /// Use [`FfiCatalog::cook_timer`] to pick up the configured interval.
    #[uniffi::constructor]
    pub fn from_text(text: String, tick_interval_ms: u64) -> Arc<Self> {
        let timer = CookTimer::from_text(&text).with_interval(Duration::from_millis(tick_interval_ms));
        Arc::new(FfiCookTimer::new(timer))
    }

    /// Starts the countdown and returns the tick interval in milliseconds.
    pub fn start(&self) -> u64 {
        let handle = lock(&self.inner).start();
        handle.interval().as_millis() as u64
    }

    pub fn stop(&self) {
        lock(&self.inner).stop();
    }

    pub fn tick(&self) -> FfiTimerState {
        lock(&self.inner).tick().into()
    }

    pub fn state(&self) -> FfiTimerState {
        lock(&self.inner).state().into()
    }

    pub fn is_running(&self) -> bool {
        lock(&self.inner).is_running()
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u64 {
        lock(&self.inner).remaining()
    }

    pub fn remaining_display(&self) -> String {
        lock(&self.inner).remaining_display()
    }

    pub fn tick_interval_ms(&self) -> u64 {
        lock(&self.inner).interval().as_millis() as u64
    }
}

impl FfiCookTimer {
    fn new(timer: CookTimer) -> Self {
        FfiCookTimer {
            inner: Mutex::new(timer),
        }
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Loads the config (defaults when `config_path` is `None`) and then the
/// bundled recipe catalog it points to.
///
/// A missing data file is returned as `SourceMissing`; the app cannot
/// continue without it. A malformed data file yields an empty catalog.
#[uniffi::export]
pub fn open_catalog(config_path: Option<String>) -> Result<Arc<FfiCatalog>, FoodScribeError> {
    let config = match config_path {
        Some(path) => Config::load(&Utf8PathBuf::from(path))?,
        None => Config::default(),
    };
    let catalog = RecipeCatalog::load(&config.data_file)?;
    Ok(Arc::new(FfiCatalog::new(catalog, config)))
}

/// Builds a catalog from a JSON document already in memory, with the default config.
#[uniffi::export]
pub fn catalog_from_json(json: String) -> Arc<FfiCatalog> {
    Arc::new(FfiCatalog::new(
        RecipeCatalog::from_json(&json),
        Config::default(),
    ))
}

/// Parses and validates a YAML config file.
#[uniffi::export]
pub fn load_config(path: String) -> Result<FfiConfig, FoodScribeError> {
    let config = Config::load(&Utf8PathBuf::from(path))?;
    Ok(FfiConfig::from(&config))
}

/// Labels offered by the add-recipe category picker.
#[uniffi::export]
pub fn available_categories() -> Vec<String> {
    Category::ALL.iter().map(|c| c.to_string()).collect()
}

/// Formats an amount as a whole number or fraction, e.g. "3/4".
#[uniffi::export]
pub fn format_quantity(amount: f64) -> String {
    crate::quantity::format_quantity(amount)
}

/// Converts a duration such as "1 hour 30 minutes" into seconds.
#[uniffi::export]
pub fn parse_duration(text: String) -> u64 {
    crate::timer::parse_duration(&text)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BUNDLED: &str = include_str!("../data/foodscribe.json");

    fn write_config(dir: &TempDir) -> String {
        let data_file = dir.path().join("foodscribe.json");
        fs::write(&data_file, BUNDLED).unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(
            &config_path,
            format!(
                "data_file: {}\nimage_dir: {}\nmax_servings: 8\n",
                data_file.display(),
                dir.path().join("images").display()
            ),
        )
        .unwrap();
        config_path.to_str().unwrap().to_string()
    }

    fn id_of(catalog: &FfiCatalog, name: &str) -> String {
        catalog
            .recipes()
            .into_iter()
            .find(|r| r.name == name)
            .unwrap()
            .id
    }

    #[test]
    fn test_open_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = open_catalog(Some(write_config(&temp_dir))).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.categories(), vec!["Appetizers", "Desserts", "Entrees"]);
        assert_eq!(catalog.config().max_servings, 8);
        assert_eq!(
            catalog.category_image("Appetizers".to_string()),
            Some("bruschetta".to_string())
        );
    }

    #[test]
    fn test_open_catalog_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "data_file: /nonexistent/foodscribe.json\n").unwrap();

        let result = open_catalog(Some(config_path.to_str().unwrap().to_string()));
        assert!(matches!(result, Err(FoodScribeError::SourceMissing { .. })));
    }

    #[test]
    fn test_scaled_ingredients_are_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = open_catalog(Some(write_config(&temp_dir))).unwrap();
        let id = id_of(&catalog, "Chocolate Lava Cake");

        // max_servings is 8 in this config, lava cake serves 2
        let scaled = catalog.scaled_ingredients(id, 20).unwrap();
        assert_eq!(scaled[0].display_line, "16 oz Dark chocolate");
        assert_eq!(scaled[1].display_amount, "1");
        assert_eq!(scaled[2].display_line, "8 Eggs");
    }

    #[test]
    fn test_detail_and_share_use_configured_precision() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir);
        let mut yaml = fs::read_to_string(&config_path).unwrap();
        yaml.push_str("quantity_epsilon: 0.001\n");
        fs::write(&config_path, yaml).unwrap();

        let catalog = open_catalog(Some(config_path)).unwrap();
        let id = id_of(&catalog, "Chocolate Lava Cake");

        let scaled = catalog.scaled_ingredients(id.clone(), 8).unwrap();
        assert_eq!(scaled[3].display_line, "4/3 cup Sugar");

        let text = catalog.share_text(id, 8).unwrap();
        assert!(text.contains(&format!("- {}\n", scaled[3].display_line)));
    }

    #[test]
    fn test_cook_timer_from_text_interval() {
        let timer = FfiCookTimer::from_text("45 minutes".to_string(), 250);
        assert_eq!(timer.remaining(), 2700);
        assert_eq!(timer.tick_interval_ms(), 250);
        assert_eq!(timer.start(), 250);
    }

    #[test]
    fn test_unknown_recipe() {
        let catalog = catalog_from_json(BUNDLED.to_string());
        assert!(catalog.recipe("missing".to_string()).is_none());
        assert!(matches!(
            catalog.scaled_ingredients("missing".to_string(), 2),
            Err(FoodScribeError::NotFound { .. })
        ));
        assert!(matches!(
            catalog.toggle_favorite("missing".to_string()),
            Err(FoodScribeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_favorites_roundtrip() {
        let catalog = catalog_from_json(BUNDLED.to_string());
        let id = id_of(&catalog, "Bruschetta");

        assert!(catalog.toggle_favorite(id.clone()).unwrap());
        assert!(catalog.recipe(id.clone()).unwrap().is_favorite);
        assert_eq!(catalog.favorite_recipes().len(), 1);
        assert!(!catalog.toggle_favorite(id.clone()).unwrap());
        assert!(!catalog.recipe(id).unwrap().is_favorite);
    }

    #[test]
    fn test_draft_save_into_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = open_catalog(Some(write_config(&temp_dir))).unwrap();

        let draft = FfiRecipeDraft::new();
        draft.set_name("Caesar Salad".to_string());
        draft.set_servings("2".to_string());
        draft.set_category("Salads".to_string()).unwrap();
        draft
            .add_ingredient("Romaine".to_string(), "1".to_string(), "head".to_string())
            .unwrap();
        let err = draft
            .add_ingredient("Croutons".to_string(), "".to_string(), "cup".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter an item and amount.");
        assert_eq!(draft.ingredients().len(), 1);
        draft.add_instruction("Toss everything".to_string()).unwrap();
        draft.set_image(vec![0xFF, 0xD8, 0xFF]);

        let id = draft.save(catalog.clone()).unwrap();
        let saved = catalog.recipe(id).unwrap();
        assert_eq!(saved.category, "Salads");
        assert!(temp_dir.path().join("images").join(&saved.image).exists());
        assert!(catalog.categories().contains(&"Salads".to_string()));
    }

    #[test]
    fn test_draft_rejects_unknown_category() {
        let draft = FfiRecipeDraft::new();
        assert!(matches!(
            draft.set_category("Soups".to_string()),
            Err(FoodScribeError::InvalidInput { .. })
        ));
        assert_eq!(draft.category(), "Appetizers");
    }

    #[test]
    fn test_cook_timer_from_recipe() {
        let catalog = catalog_from_json(BUNDLED.to_string());
        let id = id_of(&catalog, "Margherita Flatbread");

        let timer = catalog.cook_timer(id).unwrap();
        assert_eq!(timer.remaining(), 4200);
        assert_eq!(timer.state(), FfiTimerState::Idle);
        assert_eq!(timer.start(), 1000);
        assert_eq!(timer.tick(), FfiTimerState::Running);
        assert_eq!(timer.remaining_display(), "1:09:59");
        timer.stop();
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), FfiTimerState::Idle);
    }

    #[test]
    fn test_share_text() {
        let catalog = catalog_from_json(BUNDLED.to_string());
        let id = id_of(&catalog, "Bruschetta");
        let text = catalog.share_text(id, 2).unwrap();
        assert!(text.starts_with("Bruschetta\n"));
        assert!(text.contains("- 1/8 cup Olive oil\n"));
        assert!(text.contains("3. Spoon the tomato mixture onto the toast.\n"));
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(format_quantity(0.5), "1/2");
        assert_eq!(parse_duration("1 hour 30 minutes".to_string()), 5400);
        assert_eq!(available_categories().len(), 5);
        assert_eq!(library_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_malformed_json_catalog_is_empty() {
        let catalog = catalog_from_json("[".to_string());
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
