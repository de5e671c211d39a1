use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Request body for POST /api/recommendations, as sent by the front end
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationRequest {
    /// Newline-separated titles
    #[serde(deserialize_with = "null_as_empty")]
    pub favorite_books: String,
    /// Newline-separated author names
    #[serde(deserialize_with = "null_as_empty")]
    pub favorite_authors: String,
    /// Selected genres; the front end sends `[null]` when none is picked
    #[serde(deserialize_with = "genre_list")]
    pub genres: Vec<String>,
    /// Free-text notes such as mood or preferred length
    #[serde(deserialize_with = "null_as_empty")]
    pub additional_preferences: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn genre_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let genres = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(genres.unwrap_or_default().into_iter().flatten().collect())
}

/// Normalized reader preferences
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UserPreferences {
    pub favorite_books: Vec<String>,
    pub favorite_authors: Vec<String>,
    pub genres: Vec<String>,
    pub additional_preferences: String,
}

impl UserPreferences {
    /// Normalizes a request and rejects one with nothing to go on
    pub fn from_request(request: RecommendationRequest) -> AppResult<Self> {
        let preferences = Self {
            favorite_books: split_lines(&request.favorite_books),
            favorite_authors: split_lines(&request.favorite_authors),
            genres: request
                .genres
                .iter()
                .map(|g| g.trim())
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
            additional_preferences: request.additional_preferences.trim().to_string(),
        };

        if !preferences.has_any() {
            return Err(AppError::InvalidInput(
                "Please provide at least one preference".to_string(),
            ));
        }

        Ok(preferences)
    }

    /// Whether any of books, authors or genres were given
    pub fn has_any(&self) -> bool {
        !self.favorite_books.is_empty()
            || !self.favorite_authors.is_empty()
            || !self.genres.is_empty()
    }

    /// Genres lowercased for matching against catalog categories
    pub fn genres_lowercase(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.to_lowercase()).collect()
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{
            "favoriteBooks": "Gone Girl\nRebecca",
            "favoriteAuthors": "",
            "genres": ["Mystery"],
            "additionalPreferences": "Something short"
        }"#;

        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.favorite_books, "Gone Girl\nRebecca");
        assert_eq!(request.genres, vec!["Mystery".to_string()]);
        assert_eq!(request.additional_preferences, "Something short");
    }

    #[test]
    fn test_request_missing_fields_default() {
        let request: RecommendationRequest = serde_json::from_str(r#"{"genres": []}"#).unwrap();
        assert!(request.favorite_books.is_empty());
        assert!(request.favorite_authors.is_empty());
    }

    #[test]
    fn test_request_tolerates_nulls() {
        let json = r#"{
            "favoriteBooks": null,
            "favoriteAuthors": "Tana French",
            "genres": [null, "Mystery"],
            "additionalPreferences": null
        }"#;

        let request: RecommendationRequest = serde_json::from_str(json).unwrap();
        assert!(request.favorite_books.is_empty());
        assert_eq!(request.genres, vec!["Mystery".to_string()]);
        assert!(request.additional_preferences.is_empty());

        let request: RecommendationRequest =
            serde_json::from_str(r#"{"genres": null}"#).unwrap();
        assert!(request.genres.is_empty());
    }

    #[test]
    fn test_from_request_splits_and_trims() {
        let request = RecommendationRequest {
            favorite_books: " Gone Girl \r\n\n Rebecca".to_string(),
            favorite_authors: "Tana French\n".to_string(),
            genres: vec!["Mystery".to_string(), "  ".to_string()],
            additional_preferences: "  dark  ".to_string(),
        };

        let prefs = UserPreferences::from_request(request).unwrap();
        assert_eq!(prefs.favorite_books, vec!["Gone Girl", "Rebecca"]);
        assert_eq!(prefs.favorite_authors, vec!["Tana French"]);
        assert_eq!(prefs.genres, vec!["Mystery"]);
        assert_eq!(prefs.additional_preferences, "dark");
    }

    #[test]
    fn test_from_request_rejects_empty() {
        let request = RecommendationRequest {
            additional_preferences: "only notes".to_string(),
            ..Default::default()
        };

        let err = UserPreferences::from_request(request).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_lines_do_not_count_as_preferences() {
        let request = RecommendationRequest {
            favorite_books: "\n  \n".to_string(),
            ..Default::default()
        };
        assert!(UserPreferences::from_request(request).is_err());
    }
}
