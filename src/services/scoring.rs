//! Heuristic annotations for catalog books
//!
//! Genre matching throughout is a case-insensitive substring test of the
//! reader's genre against each of the book's catalog categories, so "mystery"
//! matches "Fiction / Mystery & Detective".

use std::collections::HashSet;

use crate::models::{Book, UserPreferences};

const BASE_RELEVANCE: f64 = 50.0;
const HIGH_RATING: f64 = 4.0;
const MAX_MATCH_REASONS: usize = 3;

/// Reader genres (lowercased) that occur in any of the book's categories
fn matched_genres(preferences: &UserPreferences, book: &Book) -> Vec<String> {
    let categories: Vec<String> = book.categories.iter().map(|c| c.to_lowercase()).collect();

    preferences
        .genres_lowercase()
        .into_iter()
        .filter(|genre| categories.iter().any(|category| category.contains(genre.as_str())))
        .collect()
}

fn high_rating(book: &Book) -> Option<f64> {
    book.average_rating.filter(|r| *r >= HIGH_RATING)
}

/// Relevance score in 0..=100
pub fn relevance_score(preferences: &UserPreferences, book: &Book) -> f64 {
    let mut score = BASE_RELEVANCE;

    score += matched_genres(preferences, book).len() as f64 * 10.0;

    if let Some(rating) = book.average_rating {
        score += (rating - 3.0) * 5.0;
    }

    if let Some(count) = book.ratings_count {
        if count > 1_000 {
            score += 5.0;
        }
        if count > 10_000 {
            score += 5.0;
        }
    }

    score.clamp(0.0, 100.0)
}

/// One-sentence explanation of why the book was recommended
pub fn explanation(preferences: &UserPreferences, book: &Book) -> String {
    let mut reasons = Vec::new();

    let genres = matched_genres(preferences, book);
    if !genres.is_empty() {
        reasons.push(format!("matches your interest in {}", genres.join(", ")));
    }

    if !preferences.favorite_authors.is_empty() {
        reasons.push("has a writing style similar to your favorite authors".to_string());
    }

    if let Some(rating) = high_rating(book) {
        reasons.push(format!("has excellent ratings ({:.1}/5)", rating));
    }

    if reasons.is_empty() {
        reasons.push("matches your reading preferences based on AI analysis".to_string());
    }

    format!("Recommended because it {}.", reasons.join(" and "))
}

/// Short badges shown next to a recommendation, at most three
pub fn match_reasons(preferences: &UserPreferences, book: &Book) -> Vec<String> {
    let mut reasons: Vec<String> = matched_genres(preferences, book)
        .iter()
        .map(|genre| format!("Genre: {}", title_case(genre)))
        .collect();

    if let Some(rating) = high_rating(book) {
        reasons.push(format!("Highly Rated: {:.1}⭐", rating));
    }

    if book.ratings_count.is_some_and(|count| count > 5_000) {
        reasons.push("Popular Choice".to_string());
    }

    reasons.truncate(MAX_MATCH_REASONS);
    reasons
}

/// Popularity score in 0..=100 used to order catalog-sourced trending lists
pub fn trending_score(book: &Book) -> f64 {
    let rating = book.average_rating.unwrap_or(0.0);
    let count = book.ratings_count.unwrap_or(0);

    let bonus = match count {
        c if c > 10_000 => 30.0,
        c if c > 5_000 => 20.0,
        c if c > 1_000 => 10.0,
        c if c > 100 => 5.0,
        _ => 0.0,
    };

    (rating * 20.0 + bonus).min(100.0)
}

/// Drops repeats of the same (title, first author), keeping the first
pub fn dedupe(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::new();

    books
        .into_iter()
        .filter(|book| {
            let key = (
                book.title.to_lowercase(),
                book.primary_author().unwrap_or_default().to_lowercase(),
            );
            seen.insert(key)
        })
        .collect()
}

/// Capitalizes the first letter of every alphabetic run
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(categories: &[&str], rating: Option<f64>, count: Option<u64>) -> Book {
        let mut book = Book::placeholder("Test Book");
        book.placeholder = false;
        book.categories = categories.iter().map(|c| c.to_string()).collect();
        book.average_rating = rating;
        book.ratings_count = count;
        book
    }

    fn prefs(genres: &[&str], authors: &[&str]) -> UserPreferences {
        UserPreferences {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            favorite_authors: authors.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_relevance_base_score() {
        let score = relevance_score(&prefs(&["Romance"], &[]), &book_with(&[], None, None));
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_relevance_genre_rating_and_popularity() {
        let book = book_with(
            &["Fiction / Mystery & Detective", "Thrillers"],
            Some(4.5),
            Some(20_000),
        );
        // 50 + 2 genres * 10 + (4.5 - 3) * 5 + 5 + 5
        let score = relevance_score(&prefs(&["Mystery", "Thriller", "Poetry"], &[]), &book);
        assert_eq!(score, 87.5);
    }

    #[test]
    fn test_relevance_low_rating_reduces_score() {
        let score = relevance_score(&prefs(&[], &[]), &book_with(&[], Some(1.0), None));
        assert_eq!(score, 40.0);
    }

    #[test]
    fn test_relevance_clamped_to_100() {
        let book = book_with(
            &["mystery thriller horror fantasy romance"],
            Some(5.0),
            Some(50_000),
        );
        let score = relevance_score(
            &prefs(&["mystery", "thriller", "horror", "fantasy", "romance"], &[]),
            &book,
        );
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_explanation_all_reasons() {
        let book = book_with(&["Fiction / Mystery"], Some(4.0), None);
        assert_eq!(
            explanation(&prefs(&["Mystery"], &["Tana French"]), &book),
            "Recommended because it matches your interest in mystery and has a writing style \
             similar to your favorite authors and has excellent ratings (4.0/5)."
        );
    }

    #[test]
    fn test_explanation_default() {
        let book = book_with(&["Cooking"], Some(3.9), None);
        assert_eq!(
            explanation(&prefs(&["Mystery"], &[]), &book),
            "Recommended because it matches your reading preferences based on AI analysis."
        );
    }

    #[test]
    fn test_match_reasons_capped_at_three() {
        let book = book_with(
            &["Science Fiction", "Fantasy"],
            Some(4.2),
            Some(8_000),
        );
        let reasons = match_reasons(&prefs(&["science fiction", "fantasy"], &[]), &book);
        assert_eq!(
            reasons,
            vec!["Genre: Science Fiction", "Genre: Fantasy", "Highly Rated: 4.2⭐"]
        );
    }

    #[test]
    fn test_match_reasons_popular_choice() {
        let book = book_with(&[], Some(3.5), Some(5_001));
        assert_eq!(match_reasons(&prefs(&[], &[]), &book), vec!["Popular Choice"]);
    }

    #[test]
    fn test_trending_score_tiers() {
        assert_eq!(trending_score(&book_with(&[], None, None)), 0.0);
        assert_eq!(trending_score(&book_with(&[], Some(4.0), Some(101))), 85.0);
        assert_eq!(trending_score(&book_with(&[], Some(3.0), Some(1_500))), 70.0);
        assert_eq!(trending_score(&book_with(&[], Some(4.0), Some(6_000))), 100.0);
        assert_eq!(trending_score(&book_with(&[], Some(4.5), Some(20_000))), 100.0);
    }

    #[test]
    fn test_dedupe_by_title_and_first_author() {
        let mut a = book_with(&[], None, None);
        a.title = "Dune".into();
        a.authors = vec!["Frank Herbert".into()];
        let mut b = a.clone();
        b.title = "DUNE".into();
        b.authors = vec!["frank herbert".into()];
        let mut c = a.clone();
        c.authors = vec!["Someone Else".into()];

        let unique = dedupe(vec![a.clone(), b, c.clone()]);
        assert_eq!(unique, vec![a, c]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("science fiction"), "Science Fiction");
        assert_eq!(title_case("non-fiction"), "Non-Fiction");
    }
}
