use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, ListFailure},
    middleware::request_id::RequestId,
    models::{TopRatedBook, TrendingBook},
    routes::AppState,
    services::ListSource,
};

const LIST_FIELD: &str = "books";
const MAX_LIMIT: usize = 40;

#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseQuery {
    pub limit: Option<usize>,
    #[serde(default)]
    pub source: ListSource,
}

impl ShowcaseQuery {
    fn resolve_limit(&self, default_limit: usize) -> AppResult<usize> {
        let limit = self.limit.unwrap_or(default_limit);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::InvalidInput(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        Ok(limit)
    }
}

#[derive(Debug, Serialize)]
pub struct ShowcaseResponse<T> {
    pub success: bool,
    pub books: Vec<T>,
    pub total_found: usize,
}

impl<T> From<Vec<T>> for ShowcaseResponse<T> {
    fn from(books: Vec<T>) -> Self {
        Self {
            success: true,
            total_found: books.len(),
            books,
        }
    }
}

fn list_failure(list: &str, error: AppError) -> ListFailure {
    let mut failure = ListFailure::from_error(&error, LIST_FIELD);
    failure.message = format!("Failed to fetch {} books: {}", list, failure.message);
    failure
}

/// Parses the query string and resolves the limit
fn showcase_params(
    list: &str,
    params: Result<Query<ShowcaseQuery>, QueryRejection>,
    default_limit: usize,
) -> Result<(usize, ListSource), ListFailure> {
    let Query(params) = params
        .map_err(|rejection| list_failure(list, AppError::InvalidInput(rejection.body_text())))?;
    let limit = params
        .resolve_limit(default_limit)
        .map_err(|e| list_failure(list, e))?;
    Ok((limit, params.source))
}

/// Handler for the trending books endpoint
pub async fn trending(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<ShowcaseQuery>, QueryRejection>,
) -> Result<Json<ShowcaseResponse<TrendingBook>>, ListFailure> {
    let (limit, source) =
        showcase_params("trending", params, state.engine.settings().showcase_count)?;

    tracing::info!(
        request_id = %request_id,
        limit,
        source = ?source,
        "Processing trending request"
    );

    let books = state.engine.trending(limit, source).await;
    Ok(Json(books.into()))
}

/// Handler for the top-rated books endpoint
pub async fn top_rated(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    params: Result<Query<ShowcaseQuery>, QueryRejection>,
) -> Result<Json<ShowcaseResponse<TopRatedBook>>, ListFailure> {
    let (limit, source) =
        showcase_params("top-rated", params, state.engine.settings().showcase_count)?;

    tracing::info!(
        request_id = %request_id,
        limit,
        source = ?source,
        "Processing top-rated request"
    );

    let books = state.engine.top_rated(limit, source).await;
    Ok(Json(books.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_resolve_limit_defaults_and_bounds() {
        let query = ShowcaseQuery::default();
        assert_eq!(query.resolve_limit(12).unwrap(), 12);

        let query = ShowcaseQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert!(query.resolve_limit(12).is_err());

        let query = ShowcaseQuery {
            limit: Some(41),
            ..Default::default()
        };
        assert!(query.resolve_limit(12).is_err());

        let query = ShowcaseQuery {
            limit: Some(40),
            ..Default::default()
        };
        assert_eq!(query.resolve_limit(12).unwrap(), 40);
    }

    #[test]
    fn test_list_failure_keeps_upstream_status() {
        let failure = list_failure("top-rated", AppError::ExternalApi("quota exceeded".into()));
        assert_eq!(failure.status, StatusCode::BAD_GATEWAY);
        assert_eq!(failure.message, "Failed to fetch top-rated books: quota exceeded");
    }

    #[test]
    fn test_list_failure_message() {
        let failure = list_failure("trending", AppError::InvalidInput("bad limit".into()));
        assert_eq!(failure.status, StatusCode::BAD_REQUEST);
        assert_eq!(failure.message, "Failed to fetch trending books: bad limit");
        assert_eq!(failure.list_field, "books");
    }
}
