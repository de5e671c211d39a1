//! Google Books volumes API catalog
//!
//! Title lookup flow:
//! 1. Exact search: `intitle:"<title>"` (plus `inauthor:"<author>"`), first hit wins
//! 2. On no hits, a broader keyword search on the leading words of the title,
//!    accepting the first result whose title shares one of those words
use crate::{
    error::{AppError, AppResult},
    models::{Book, VolumesResponse},
    services::catalog::BookCatalog,
};
use reqwest::Client as HttpClient;

const PRINT_TYPE: &str = "books";
const FALLBACK_MAX_RESULTS: usize = 5;
const ARTICLES: [&str; 3] = ["The", "A", "An"];

#[derive(Clone)]
pub struct GoogleBooksCatalog {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleBooksCatalog {
    pub fn new(http_client: HttpClient, api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Builds the `q` parameter for an exact title search
    fn exact_query(title: &str, author: Option<&str>) -> String {
        let mut query = format!("intitle:\"{}\"", title);
        if let Some(author) = author.filter(|a| !a.trim().is_empty()) {
            query.push_str(&format!(" inauthor:\"{}\"", author));
        }
        query
    }

    /// Title words with articles removed
    fn significant_words(title: &str) -> Vec<&str> {
        title
            .split_whitespace()
            .filter(|word| !ARTICLES.contains(word))
            .collect()
    }

    async fn fetch_volumes(
        &self,
        query: &str,
        max_results: usize,
        order_by: Option<&str>,
    ) -> AppResult<VolumesResponse> {
        let url = format!("{}/volumes", self.api_url);
        let max_results = max_results.to_string();

        let mut params: Vec<(&str, &str)> = vec![
            ("q", query),
            ("maxResults", max_results.as_str()),
            ("printType", PRINT_TYPE),
        ];
        if let Some(order_by) = order_by {
            params.push(("orderBy", order_by));
        }
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }

        // Transport errors drop the URL on conversion, keeping the key out of logs
        let response = self.http_client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Google Books API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Broader keyword search used when the exact search has no hits
    async fn fallback_search(&self, title: &str) -> AppResult<Option<Book>> {
        let words = Self::significant_words(title);
        if words.len() < 2 {
            return Ok(None);
        }

        let query = words.iter().take(3).copied().collect::<Vec<_>>().join(" ");
        let leading: Vec<String> = words.iter().take(2).map(|w| w.to_lowercase()).collect();

        let volumes = self
            .fetch_volumes(&query, FALLBACK_MAX_RESULTS, None)
            .await?;

        let book = volumes
            .items
            .into_iter()
            .find(|item| {
                let item_title = item
                    .volume_info
                    .title
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase();
                leading.iter().any(|word| item_title.contains(word.as_str()))
            })
            .map(Book::from);

        tracing::debug!(
            title = %title,
            query = %query,
            found = book.is_some(),
            provider = "google_books",
            "Fallback search completed"
        );

        Ok(book)
    }
}

#[async_trait::async_trait]
impl BookCatalog for GoogleBooksCatalog {
    async fn search(&self, title: &str, author: Option<&str>) -> AppResult<Option<Book>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search title cannot be empty".to_string(),
            ));
        }

        let query = Self::exact_query(title, author);
        let volumes = self.fetch_volumes(&query, 1, None).await?;

        if let Some(item) = volumes.items.into_iter().next() {
            tracing::debug!(title = %title, provider = "google_books", "Exact match found");
            return Ok(Some(Book::from(item)));
        }

        match self.fallback_search(title).await {
            Ok(book) => Ok(book),
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Fallback search failed");
                Ok(None)
            }
        }
    }

    async fn query(
        &self,
        query: &str,
        max_results: usize,
        order_by: Option<&str>,
    ) -> AppResult<Vec<Book>> {
        let volumes = self.fetch_volumes(query, max_results, order_by).await?;
        let books: Vec<Book> = volumes.items.into_iter().map(Book::from).collect();

        tracing::info!(
            query = %query,
            results = books.len(),
            provider = "google_books",
            "Catalog query completed"
        );

        Ok(books)
    }

    fn name(&self) -> &'static str {
        "google_books"
    }
}
