/// A search hit with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub recipe: &'a crate::Recipe,
    pub score: f64,
}

impl<'a> SearchResult<'a> {
    pub(crate) fn new(recipe: &'a crate::Recipe) -> Self {
        Self { recipe, score: 0.0 }
    }

    pub(crate) fn add_score(&mut self, points: f64) {
        self.score += points;
    }
}
