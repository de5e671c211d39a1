use std::sync::Arc;

use crate::{
    models::UserPreferences,
    services::{fallback, generator::TitleGenerator, prompts, title_parser::parse_titles},
};

/// Turns preferences into candidate titles via the text-generation model
///
/// Model failures never surface to callers: each list falls back to a fixed
/// set of titles and the failure is logged.
#[derive(Clone)]
pub struct BookRecommender {
    generator: Arc<dyn TitleGenerator>,
}

impl BookRecommender {
    pub fn new(generator: Arc<dyn TitleGenerator>) -> Self {
        Self { generator }
    }

    /// Personalized titles, at most `count`
    pub async fn recommendation_titles(
        &self,
        preferences: &UserPreferences,
        count: usize,
    ) -> Vec<String> {
        let prompt = prompts::recommendation_prompt(preferences, count);

        match self.generator.generate(&prompt).await {
            Ok(reply) => {
                let titles = parse_titles(&reply, count);
                tracing::info!(
                    provider = self.generator.name(),
                    titles = titles.len(),
                    "Recommendation titles generated"
                );
                titles
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.generator.name(),
                    "Recommendation generation failed, using fallback titles"
                );
                fallback::recommendation_titles(&preferences.genres, count)
            }
        }
    }

    pub async fn trending_titles(&self, limit: usize) -> Vec<String> {
        self.showcase_titles(
            "trending",
            prompts::trending_prompt(limit),
            limit,
            fallback::trending_titles,
        )
        .await
    }

    pub async fn top_rated_titles(&self, limit: usize) -> Vec<String> {
        self.showcase_titles(
            "top_rated",
            prompts::top_rated_prompt(limit),
            limit,
            fallback::top_rated_titles,
        )
        .await
    }

    async fn showcase_titles(
        &self,
        list: &'static str,
        prompt: String,
        limit: usize,
        fallback_titles: fn(usize) -> Vec<String>,
    ) -> Vec<String> {
        match self.generator.generate(&prompt).await {
            Ok(reply) => {
                let titles = parse_titles(&reply, limit);
                tracing::info!(list, titles = titles.len(), "Showcase titles generated");
                titles
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    list,
                    "Showcase generation failed, using fallback titles"
                );
                fallback_titles(limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::generator::MockTitleGenerator;

    fn recommender_with(mock: MockTitleGenerator) -> BookRecommender {
        BookRecommender::new(Arc::new(mock))
    }

    fn mystery_prefs() -> UserPreferences {
        UserPreferences {
            genres: vec!["Mystery".to_string()],
            favorite_books: vec!["Gone Girl".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_recommendation_titles_parses_reply() {
        let mut mock = MockTitleGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| prompt.contains("Favorite Books: Gone Girl"))
            .times(1)
            .returning(|_| Ok("1. The Secret History\n2. In the Woods\n3. Rebecca".to_string()));
        mock.expect_name().return_const("mock");

        let titles = recommender_with(mock)
            .recommendation_titles(&mystery_prefs(), 5)
            .await;
        assert_eq!(titles, vec!["The Secret History", "In the Woods", "Rebecca"]);
    }

    #[tokio::test]
    async fn test_recommendation_titles_falls_back_on_error() {
        let mut mock = MockTitleGenerator::new();
        mock.expect_generate()
            .returning(|_| Err(AppError::ExternalApi("quota exceeded".to_string())));
        mock.expect_name().return_const("mock");

        let titles = recommender_with(mock)
            .recommendation_titles(&mystery_prefs(), 5)
            .await;
        assert_eq!(titles, vec!["The Silent Patient", "Gone Girl"]);
    }

    #[tokio::test]
    async fn test_empty_reply_is_not_replaced_by_fallback() {
        let mut mock = MockTitleGenerator::new();
        mock.expect_generate().returning(|_| Ok("Your recommendations:".to_string()));
        mock.expect_name().return_const("mock");

        let titles = recommender_with(mock)
            .recommendation_titles(&mystery_prefs(), 5)
            .await;
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_trending_titles_limit() {
        let mut mock = MockTitleGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| prompt.contains("Provide 2 currently trending books"))
            .returning(|_| Ok("Fourth Wing\nIron Flame\nYellowface".to_string()));

        let titles = recommender_with(mock).trending_titles(2).await;
        assert_eq!(titles, vec!["Fourth Wing", "Iron Flame"]);
    }

    #[tokio::test]
    async fn test_top_rated_titles_fallback() {
        let mut mock = MockTitleGenerator::new();
        mock.expect_generate()
            .returning(|_| Err(AppError::Generation("no text".to_string())));

        let titles = recommender_with(mock).top_rated_titles(3).await;
        assert_eq!(
            titles,
            vec!["The Seven Husbands of Evelyn Hugo", "Educated", "Where the Crawdads Sing"]
        );
    }
}
