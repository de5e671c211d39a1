//! Trending and top-rated lists built purely from catalog queries
//!
//! Both lists pool results from a fixed set of broad queries, dedupe them,
//! keep the books that clear a quality bar (or the whole pool when too few do)
//! and rank what is left.

use std::cmp::Ordering;
use std::time::Duration;

use crate::{
    models::Book,
    services::{catalog::BookCatalog, scoring},
};

const TRENDING_QUERIES: [&str; 6] = [
    "bestseller 2024",
    "popular fiction",
    "trending books",
    "award winning books",
    "book club picks",
    "new releases",
];

const TOP_RATED_SUBJECTS: [&str; 8] = [
    "fiction",
    "mystery",
    "romance",
    "science fiction",
    "fantasy",
    "biography",
    "self help",
    "history",
];

const ORDER_BY: &str = "relevance";

/// Runs each query in turn and pools results until the pool holds `cap` books
async fn pool_queries(
    catalog: &dyn BookCatalog,
    queries: &[String],
    per_query: usize,
    cap: usize,
    delay: Duration,
) -> Vec<Book> {
    let mut pool = Vec::new();

    for (i, query) in queries.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match catalog.query(query, per_query, Some(ORDER_BY)).await {
            Ok(books) => {
                // Stop growing once the pool is full but keep the query cadence
                let room = cap.saturating_sub(pool.len());
                pool.extend(books.into_iter().take(room));
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Discovery query failed, skipping");
            }
        }
    }

    scoring::dedupe(pool)
}

/// Books ranked by trending score, each paired with its score
pub async fn catalog_trending(
    catalog: &dyn BookCatalog,
    limit: usize,
    delay: Duration,
) -> Vec<(Book, f64)> {
    let queries: Vec<String> = TRENDING_QUERIES.iter().map(|q| q.to_string()).collect();
    let per_query = limit / TRENDING_QUERIES.len() + 2;

    let pool = pool_queries(catalog, &queries, per_query, limit * 2, delay).await;

    let scored: Vec<(Book, f64)> = pool
        .into_iter()
        .map(|book| {
            let score = scoring::trending_score(&book);
            (book, score)
        })
        .collect();

    let quality = |(book, _): &(Book, f64)| {
        book.ratings_count.unwrap_or(0) > 10 && book.average_rating.unwrap_or(0.0) >= 3.0
    };
    let mut ranked = keep_quality_or_all(scored, quality, limit);

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    tracing::info!(limit, returned = ranked.len(), "Catalog trending list built");
    ranked
}

/// Books ranked by average rating, then by number of ratings
pub async fn catalog_top_rated(
    catalog: &dyn BookCatalog,
    limit: usize,
    delay: Duration,
) -> Vec<Book> {
    let queries: Vec<String> = TOP_RATED_SUBJECTS
        .iter()
        .map(|subject| format!("subject:{}", subject))
        .collect();
    let per_subject = limit / TOP_RATED_SUBJECTS.len() + 3;

    let pool = pool_queries(catalog, &queries, per_subject, limit * 2, delay).await;

    let quality = |book: &Book| {
        book.average_rating.unwrap_or(0.0) >= 3.5 && book.ratings_count.unwrap_or(0) > 5
    };
    let mut ranked = keep_quality_or_all(pool, quality, limit);

    ranked.sort_by(|a, b| {
        let rating_a = a.average_rating.unwrap_or(0.0);
        let rating_b = b.average_rating.unwrap_or(0.0);
        rating_b
            .partial_cmp(&rating_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.ratings_count.unwrap_or(0).cmp(&a.ratings_count.unwrap_or(0)))
    });
    ranked.truncate(limit);

    tracing::info!(limit, returned = ranked.len(), "Catalog top-rated list built");
    ranked
}

/// Items passing `is_quality`, or all items when fewer than `limit` pass
fn keep_quality_or_all<T, F>(items: Vec<T>, is_quality: F, limit: usize) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    let quality_count = items.iter().filter(|item| is_quality(item)).count();
    if quality_count < limit {
        return items;
    }
    items.into_iter().filter(|item| is_quality(item)).collect()
}
