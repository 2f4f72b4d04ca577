uniffi::setup_scaffolding!();

pub mod catalog;
pub mod config;
pub mod draft;
pub mod ffi;
pub mod model;
pub mod quantity;
pub mod search;
pub mod share;
pub mod timer;

pub use catalog::{CatalogError, CategoryIndex, Favorites, RecipeCatalog};
pub use config::{Config, ConfigError};
pub use draft::{DraftError, ImagePicker, ImageSource, ImageStore, PickedImage, RecipeDraft, SaveError};
pub use model::*;
pub use quantity::{format_quantity, format_quantity_with_precision, scale::*};
pub use search::search;
pub use share::{share_text, share_text_for_servings, share_text_for_servings_with_precision};
pub use timer::{parse_duration, CookTimer, TickHandle, TimerState};
