use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Book, RecommendedBook, TopRatedBook, TrendingBook, UserPreferences},
    services::{
        catalog::{lookup_many, BookCatalog},
        discovery, scoring,
        recommender::BookRecommender,
    },
};

/// Where trending and top-rated titles come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSource {
    /// Titles suggested by the text-generation model, resolved in the catalog
    #[default]
    Ai,
    /// Titles pooled from broad catalog queries
    Catalog,
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub lookup_delay: Duration,
    pub recommendation_count: usize,
    pub showcase_count: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lookup_delay: Duration::from_millis(500),
            recommendation_count: 5,
            showcase_count: 12,
        }
    }
}

/// Result of a personalized recommendation run
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub user_preferences: UserPreferences,
    pub recommendations: Vec<RecommendedBook>,
    /// Recommendations the catalog actually resolved (placeholders excluded)
    pub total_found: usize,
    pub generated_at: DateTime<Utc>,
}

/// Generates personalized and showcase book lists
///
/// Pipeline: model titles → serial catalog lookups → heuristic annotation.
pub struct RecommendationEngine {
    recommender: BookRecommender,
    catalog: Arc<dyn BookCatalog>,
    settings: EngineSettings,
}

impl RecommendationEngine {
    pub fn new(
        recommender: BookRecommender,
        catalog: Arc<dyn BookCatalog>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            recommender,
            catalog,
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub async fn recommend(&self, preferences: UserPreferences) -> AppResult<RecommendationOutcome> {
        let titles = self
            .recommender
            .recommendation_titles(&preferences, self.settings.recommendation_count)
            .await;

        // A reply with no usable titles is a failure; only generator errors fall back
        if titles.is_empty() {
            return Err(AppError::Generation(
                "Failed to generate recommendations".to_string(),
            ));
        }

        let books = lookup_many(self.catalog.as_ref(), &titles, self.settings.lookup_delay).await;
        let total_found = books.iter().filter(|b| !b.placeholder).count();

        // Books line up with titles, placeholders included
        let recommendations = titles
            .into_iter()
            .zip(books)
            .enumerate()
            .map(|(i, (title, book))| annotate(&preferences, i + 1, title, book))
            .collect();

        Ok(RecommendationOutcome {
            user_preferences: preferences,
            recommendations,
            total_found,
            generated_at: Utc::now(),
        })
    }

    pub async fn trending(&self, limit: usize, source: ListSource) -> Vec<TrendingBook> {
        match source {
            ListSource::Ai => {
                let titles = self.recommender.trending_titles(limit).await;
                self.resolve(&titles)
                    .await
                    .into_iter()
                    .enumerate()
                    .map(|(i, book)| TrendingBook::ranked(book, i + 1, None))
                    .collect()
            }
            ListSource::Catalog => {
                discovery::catalog_trending(self.catalog.as_ref(), limit, self.settings.lookup_delay)
                    .await
                    .into_iter()
                    .enumerate()
                    .map(|(i, (book, score))| TrendingBook::ranked(book, i + 1, Some(score)))
                    .collect()
            }
        }
    }

    pub async fn top_rated(&self, limit: usize, source: ListSource) -> Vec<TopRatedBook> {
        let books = match source {
            ListSource::Ai => {
                let titles = self.recommender.top_rated_titles(limit).await;
                self.resolve(&titles).await
            }
            ListSource::Catalog => {
                discovery::catalog_top_rated(self.catalog.as_ref(), limit, self.settings.lookup_delay)
                    .await
            }
        };

        books
            .into_iter()
            .enumerate()
            .map(|(i, book)| TopRatedBook::ranked(book, i + 1))
            .collect()
    }

    async fn resolve(&self, titles: &[String]) -> Vec<Book> {
        lookup_many(self.catalog.as_ref(), titles, self.settings.lookup_delay).await
    }
}

fn annotate(
    preferences: &UserPreferences,
    rank: usize,
    ai_title: String,
    book: Book,
) -> RecommendedBook {
    RecommendedBook {
        recommendation_rank: rank,
        ai_recommended_title: ai_title,
        recommendation_explanation: scoring::explanation(preferences, &book),
        relevance_score: scoring::relevance_score(preferences, &book),
        match_reasons: scoring::match_reasons(preferences, &book),
        book,
    }
}
