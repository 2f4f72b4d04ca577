use crate::{Recipe, RecipeCatalog};

mod model;

use model::*;

/// Search the catalog for recipes matching the given text, best match first
pub fn search<'a>(catalog: &'a RecipeCatalog, query: &str) -> Vec<&'a Recipe> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }
    let terms: Vec<String> = query_lower.split_whitespace().map(String::from).collect();

    let mut scored_results = vec![];
    for recipe in catalog.recipes() {
        let mut result = SearchResult::new(recipe);

        // Score based on name match (using full query)
        result.add_score(score_name_match(&recipe.name, &query_lower));

        // Score based on content matches (using individual terms)
        result.add_score(score_content_matches(recipe, &terms));

        if result.score > 0.0 {
            scored_results.push(result);
        }
    }

    sort_results(&mut scored_results);
    scored_results.into_iter().map(|r| r.recipe).collect()
}

/// Calculate score for recipe name matches
fn score_name_match(name: &str, query: &str) -> f64 {
    let name = name.to_lowercase();
    if name == query {
        20.0
    } else if name.contains(query) {
        10.0
    } else {
        0.0
    }
}

/// Calculate score for term hits in description, tags, ingredients and steps
fn score_content_matches(recipe: &Recipe, terms: &[String]) -> f64 {
    let matches = count_matches(recipe, terms);
    if matches > 0 {
        // Base score for having any match, plus a capped bonus
        1.0 + (0.1 * matches as f64).min(5.0)
    } else {
        0.0
    }
}

fn count_matches(recipe: &Recipe, terms: &[String]) -> usize {
    let fields = std::iter::once(&recipe.description)
        .chain(recipe.tags.iter())
        .chain(recipe.ingredients.iter().map(|i| &i.item))
        .chain(recipe.instructions.iter());

    fields
        .map(|field| {
            let field = field.to_lowercase();
            terms
                .iter()
                .map(|term| field.matches(term.as_str()).count())
                .sum::<usize>()
        })
        .sum()
}

/// Sort search results by score in descending order, then by name
fn sort_results(results: &mut [SearchResult<'_>]) {
    results.sort_unstable_by(|a, b| {
        let score_cmp = b
            .score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal);

        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }

        a.recipe
            .name
            .to_lowercase()
            .cmp(&b.recipe.name.to_lowercase())
    });
}
