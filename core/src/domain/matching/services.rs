use crate::domain::{
    catalog::entities::Catalog,
    matching::{
        entities::{MatchError, MenuMatch},
        scoring::normalize,
        value_objects::MatchStrategy,
    },
};

pub const DEFAULT_THRESHOLD: u8 = 70;

/// Resolves free text emitted by the vision model to a canonical menu name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuMatcher {
    threshold: u8,
    strategy: MatchStrategy,
}

impl MenuMatcher {
    /// `threshold` is on a 0-100 scale; larger values are clamped to 100.
    pub fn new(threshold: u8, strategy: MatchStrategy) -> Self {
        Self {
            threshold: threshold.min(100),
            strategy,
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Returns the best scoring catalog name when its score reaches the
    /// threshold. On equal scores the name listed first in the catalog wins.
    pub fn match_item(&self, free_text: &str, catalog: &Catalog) -> Result<MenuMatch, MatchError> {
        let query = normalize(free_text);
        let mut best: Option<(&str, u8)> = None;

        for name in catalog.names() {
            let score = self.strategy.score(&query, &normalize(name));
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((name, score));
            }
        }

        match best {
            Some((name, score)) if score >= self.threshold => {
                tracing::debug!("Matched '{}' to '{}' with score {}", free_text, name, score);
                Ok(MenuMatch {
                    canonical_name: name.to_string(),
                    score,
                })
            }
            _ => Err(MatchError::NoMatch {
                best_score: best.map(|(_, score)| score),
            }),
        }
    }
}

impl Default for MenuMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, MatchStrategy::Extract)
    }
}
