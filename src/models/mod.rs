use serde::{Deserialize, Serialize};

pub mod recommendation;
pub mod user_preferences;

pub use recommendation::{RecommendedBook, TopRatedBook, TrendingBook};
pub use user_preferences::{RecommendationRequest, UserPreferences};

const UNKNOWN_AUTHOR: &str = "Unknown Author";
const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
const MAX_DESCRIPTION_CHARS: usize = 500;

/// Book metadata returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub author_string: String,
    pub published_date: String,
    pub description: String,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u64>,
    pub categories: Vec<String>,
    pub thumbnail: String,
    pub page_count: Option<u32>,
    pub publisher: String,
    pub google_books_id: Option<String>,
    pub preview_link: String,
    pub info_link: String,
    /// Set when the catalog had no match and the entry only echoes the requested title
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
}

impl Book {
    /// Stand-in for a title the catalog could not resolve
    pub fn placeholder(title: &str) -> Self {
        Self {
            title: title.to_string(),
            authors: vec![UNKNOWN_AUTHOR.to_string()],
            author_string: UNKNOWN_AUTHOR.to_string(),
            published_date: "Unknown".to_string(),
            description: "Book information not available. This might be a lesser-known title \
                          or the search didn't find an exact match."
                .to_string(),
            average_rating: None,
            ratings_count: None,
            categories: Vec::new(),
            thumbnail: String::new(),
            page_count: None,
            publisher: UNKNOWN_PUBLISHER.to_string(),
            google_books_id: None,
            preview_link: String::new(),
            info_link: String::new(),
            placeholder: true,
        }
    }

    /// First listed author, if any
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

// ============================================================================
// Google Books API Types
// ============================================================================

/// Response from GET /volumes
#[derive(Debug, Clone, Deserialize, Default)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<VolumeItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u64>,
    pub categories: Option<Vec<String>>,
    pub image_links: Option<ImageLinks>,
    pub page_count: Option<u32>,
    pub publisher: Option<String>,
    pub preview_link: Option<String>,
    pub info_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

impl From<VolumeItem> for Book {
    fn from(item: VolumeItem) -> Self {
        let info = item.volume_info;

        let authors = info
            .authors
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| vec![UNKNOWN_AUTHOR.to_string()]);

        let thumbnail = info
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail))
            .map(|url| force_https(&url))
            .unwrap_or_default();

        let description = info
            .description
            .map(|d| truncate_description(&d))
            .unwrap_or_else(|| "Description not available.".to_string());

        Book {
            title: info.title.unwrap_or_else(|| "Unknown Title".to_string()),
            author_string: authors.join(", "),
            authors,
            published_date: info.published_date.unwrap_or_else(|| "Unknown".to_string()),
            description,
            average_rating: info.average_rating,
            ratings_count: info.ratings_count,
            categories: info.categories.unwrap_or_default(),
            thumbnail,
            page_count: info.page_count,
            publisher: info
                .publisher
                .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string()),
            google_books_id: item.id,
            preview_link: info.preview_link.unwrap_or_default(),
            info_link: info.info_link.unwrap_or_default(),
            placeholder: false,
        }
    }
}

fn force_https(url: &str) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{}", rest),
        None => url.to_string(),
    }
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description.to_string();
    }
    let cut: String = description.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
    format!("{}...", cut)
}
