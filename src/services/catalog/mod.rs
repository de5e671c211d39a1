//! Book catalog abstraction
//!
//! A catalog resolves free-form titles to metadata and answers raw keyword
//! queries. The Google Books volumes API is the only implementation; tests use
//! in-memory stubs.
use std::time::Duration;

use tracing::instrument;

use crate::{error::AppResult, models::Book};

pub mod google_books;

pub use google_books::GoogleBooksCatalog;

#[async_trait::async_trait]
pub trait BookCatalog: Send + Sync {
    /// Resolves a single title, optionally narrowed by author
    ///
    /// Returns `Ok(None)` when neither the exact search nor the broader
    /// fallback search found a plausible match.
    async fn search(&self, title: &str, author: Option<&str>) -> AppResult<Option<Book>>;

    /// Runs a raw keyword query
    async fn query(
        &self,
        query: &str,
        max_results: usize,
        order_by: Option<&str>,
    ) -> AppResult<Vec<Book>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Resolves titles one at a time, pausing `delay` between lookups
///
/// The result lines up with `titles`: a title that could not be resolved, or
/// whose lookup failed, becomes a placeholder entry.
#[instrument(skip(catalog, titles), fields(provider = catalog.name(), count = titles.len()))]
pub async fn lookup_many(
    catalog: &dyn BookCatalog,
    titles: &[String],
    delay: Duration,
) -> Vec<Book> {
    let mut books = Vec::with_capacity(titles.len());

    for (i, title) in titles.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        // Misses and failures both keep their slot as a placeholder
        let book = match catalog.search(title, None).await {
            Ok(Some(book)) => book,
            Ok(None) => {
                tracing::debug!(title = %title, "No catalog match, using placeholder");
                Book::placeholder(title)
            }
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Catalog lookup failed");
                Book::placeholder(title)
            }
        };
        books.push(book);
    }

    let found = books.iter().filter(|b| !b.placeholder).count();
    tracing::info!(found, missing = books.len() - found, "Catalog lookups completed");

    books
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub fn book(title: &str, author: &str) -> Book {
        let mut book = Book::placeholder(title);
        book.authors = vec![author.to_string()];
        book.author_string = author.to_string();
        book.placeholder = false;
        book
    }

    /// In-memory catalog keyed by title and by query string
    #[derive(Default)]
    pub struct StubCatalog {
        pub titles: HashMap<String, Book>,
        pub queries: HashMap<String, Vec<Book>>,
        pub failing: Vec<String>,
        pub calls: Mutex<Vec<String>>,
    }

    impl StubCatalog {
        pub fn with_title(mut self, book: Book) -> Self {
            self.titles.insert(book.title.clone(), book);
            self
        }

        pub fn with_query(mut self, query: &str, books: Vec<Book>) -> Self {
            self.queries.insert(query.to_string(), books);
            self
        }

        pub fn failing_on(mut self, key: &str) -> Self {
            self.failing.push(key.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl BookCatalog for StubCatalog {
        async fn search(&self, title: &str, _author: Option<&str>) -> AppResult<Option<Book>> {
            self.calls.lock().unwrap().push(title.to_string());
            if self.failing.iter().any(|f| f == title) {
                return Err(AppError::ExternalApi("catalog down".to_string()));
            }
            Ok(self.titles.get(title).cloned())
        }

        async fn query(
            &self,
            query: &str,
            max_results: usize,
            _order_by: Option<&str>,
        ) -> AppResult<Vec<Book>> {
            self.calls.lock().unwrap().push(query.to_string());
            if self.failing.iter().any(|f| f == query) {
                return Err(AppError::ExternalApi("catalog down".to_string()));
            }
            Ok(self
                .queries
                .get(query)
                .map(|books| books.iter().take(max_results).cloned().collect())
                .unwrap_or_default())
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }
}
