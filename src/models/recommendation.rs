use serde::Serialize;

use super::Book;

/// A catalog book annotated with why it was recommended
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendedBook {
    #[serde(flatten)]
    pub book: Book,
    /// 1-based position in the model's answer
    pub recommendation_rank: usize,
    /// Title as the model wrote it, before catalog resolution
    pub ai_recommended_title: String,
    pub recommendation_explanation: String,
    pub relevance_score: f64,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendingBook {
    #[serde(flatten)]
    pub book: Book,
    pub is_trending: bool,
    pub trending_rank: usize,
    /// Only present for catalog-sourced lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f64>,
}

impl TrendingBook {
    pub fn ranked(book: Book, rank: usize, trending_score: Option<f64>) -> Self {
        Self {
            book,
            is_trending: true,
            trending_rank: rank,
            trending_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopRatedBook {
    #[serde(flatten)]
    pub book: Book,
    pub is_top_rated: bool,
    pub top_rated_rank: usize,
}

impl TopRatedBook {
    pub fn ranked(book: Book, rank: usize) -> Self {
        Self {
            book,
            is_top_rated: true,
            top_rated_rank: rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_book_flattens_book_fields() {
        let recommended = RecommendedBook {
            book: Book::placeholder("Circe"),
            recommendation_rank: 1,
            ai_recommended_title: "Circe".to_string(),
            recommendation_explanation: "Recommended because it fits.".to_string(),
            relevance_score: 50.0,
            match_reasons: vec![],
        };

        let value = serde_json::to_value(&recommended).unwrap();
        assert_eq!(value["title"], "Circe");
        assert_eq!(value["recommendation_rank"], 1);
        assert_eq!(value["relevance_score"], 50.0);
        assert!(value.get("book").is_none());
    }

    #[test]
    fn test_trending_score_omitted_when_absent() {
        let value = serde_json::to_value(TrendingBook::ranked(Book::placeholder("X"), 2, None))
            .unwrap();
        assert_eq!(value["is_trending"], true);
        assert_eq!(value["trending_rank"], 2);
        assert!(value.get("trending_score").is_none());
    }
}
