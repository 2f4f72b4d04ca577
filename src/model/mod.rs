mod category;
mod recipe;

pub use category::{Category, UnknownCategory};
pub use recipe::{Ingredient, Nutrition, Recipe};
