//! Plain-text recipe summaries for the platform share sheet.

use crate::model::Recipe;
use crate::quantity::scale::{scale_ingredients_with_precision, ScaleError};
use crate::quantity::{format_quantity, DEFAULT_EPSILON};

/// Formats a recipe as shareable text at its own serving count.
///
/// ```text
/// Bruschetta
///
/// Ingredients:
/// - 1 Baguette
/// - 2 cloves Garlic
///
/// Instructions:
/// 1. Slice the baguette and toast until golden.
/// ```
pub fn share_text(recipe: &Recipe) -> String {
    let lines = recipe
        .ingredients
        .iter()
        .map(|i| ingredient_line(&format_quantity(i.amount), i.unit.as_deref(), &i.item))
        .collect::<Vec<_>>();
    render(recipe, lines)
}

/// Formats a recipe as shareable text with amounts scaled to `servings`.
pub fn share_text_for_servings(recipe: &Recipe, servings: u32) -> Result<String, ScaleError> {
    share_text_for_servings_with_precision(recipe, servings, DEFAULT_EPSILON)
}

/// Like [`share_text_for_servings`], formatting amounts with tolerance `eps`.
pub fn share_text_for_servings_with_precision(
    recipe: &Recipe,
    servings: u32,
    eps: f64,
) -> Result<String, ScaleError> {
    let lines = scale_ingredients_with_precision(&recipe.ingredients, recipe.servings, servings, eps)?
        .iter()
        .map(|i| ingredient_line(&i.display_amount, i.unit.as_deref(), &i.item))
        .collect::<Vec<_>>();
    Ok(render(recipe, lines))
}

fn ingredient_line(amount: &str, unit: Option<&str>, item: &str) -> String {
    match unit {
        Some(unit) => format!("- {amount} {unit} {item}"),
        None => format!("- {amount} {item}"),
    }
}

fn render(recipe: &Recipe, ingredient_lines: Vec<String>) -> String {
    let mut lines = vec![recipe.name.clone(), String::new(), "Ingredients:".to_string()];
    lines.extend(ingredient_lines);
    lines.push(String::new());
    lines.push("Instructions:".to_string());
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step)),
    );

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
