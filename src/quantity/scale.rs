use super::{format_quantity_with_precision, DEFAULT_EPSILON};
use crate::model::Ingredient;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Serving counts the detail screen lets the user pick from.
pub const SERVINGS_RANGE: RangeInclusive<u32> = 1..=12;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScaleError {
    #[error("Base servings must be at least 1, got {0}")]
    InvalidBaseServings(u32),
}

/// An ingredient scaled to a selected serving count.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub item: String,
    pub amount: f64,
    pub unit: Option<String>,
    /// `amount` rendered as a whole number or fraction
    pub display_amount: String,
}

impl ScaledIngredient {
    /// Returns the line shown in ingredient lists, e.g. `"3/4 cup Flour"`.
    pub fn display_line(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {} {}", self.display_amount, unit, self.item),
            None => format!("{} {}", self.display_amount, self.item),
        }
    }
}

/// Scales a single amount from `base` servings to `selected` servings.
pub fn scale_amount(amount: f64, selected: u32, base: u32) -> Result<f64, ScaleError> {
    if base == 0 {
        return Err(ScaleError::InvalidBaseServings(base));
    }
    Ok(amount * (f64::from(selected) / f64::from(base)))
}

/// Scales every ingredient and formats the resulting amounts.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    base: u32,
    selected: u32,
) -> Result<Vec<ScaledIngredient>, ScaleError> {
    scale_ingredients_with_precision(ingredients, base, selected, DEFAULT_EPSILON)
}

/// Like [`scale_ingredients`], formatting amounts with tolerance `eps`.
pub fn scale_ingredients_with_precision(
    ingredients: &[Ingredient],
    base: u32,
    selected: u32,
    eps: f64,
) -> Result<Vec<ScaledIngredient>, ScaleError> {
    ingredients
        .iter()
        .map(|ingredient| {
            let amount = scale_amount(ingredient.amount, selected, base)?;
            Ok(ScaledIngredient {
                item: ingredient.item.clone(),
                amount,
                unit: ingredient.unit.clone(),
                display_amount: format_quantity_with_precision(amount, eps),
            })
        })
        .collect()
}

/// Clamps a requested serving count into [`SERVINGS_RANGE`].
pub fn clamp_servings(requested: u32) -> u32 {
    clamp_servings_to(requested, &SERVINGS_RANGE)
}

/// Clamps a requested serving count into a custom range.
pub fn clamp_servings_to(requested: u32, range: &RangeInclusive<u32>) -> u32 {
    requested.clamp(*range.start(), *range.end())
}
