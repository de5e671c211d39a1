//! Prompt templates sent to the text-generation model
//!
//! Every prompt asks for a bare list of titles, one per line, so the reply can
//! go straight through [`crate::services::title_parser::parse_titles`].

use crate::models::UserPreferences;

const NOT_SPECIFIED: &str = "Not specified";

fn or_not_specified(values: &[String]) -> String {
    if values.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        values.join(", ")
    }
}

/// Prompt for personalized recommendations
pub fn recommendation_prompt(preferences: &UserPreferences, count: usize) -> String {
    let notes = if preferences.additional_preferences.is_empty() {
        String::new()
    } else {
        format!(
            "- Additional Notes: {}\n",
            preferences.additional_preferences
        )
    };

    format!(
        "You are an expert book recommender. Based on the following user preferences, \
recommend {count} books that they would love to read.

User Preferences:
- Favorite Genres: {genres}
- Favorite Books: {books}
- Favorite Authors: {authors}
{notes}
Instructions:
1. Recommend {count} different books
2. Each book should match the user's taste based on their preferences
3. Include a mix of popular and lesser-known gems
4. Don't recommend books they already mentioned as favorites
5. Format your response as a simple list of book titles, one per line
6. Only provide the book title, no descriptions or explanations

Format example:
The Silent Patient
Where the Crawdads Sing
The Seven Husbands of Evelyn Hugo
Educated
The Midnight Library

Your recommendations:
",
        count = count,
        genres = or_not_specified(&preferences.genres),
        books = or_not_specified(&preferences.favorite_books),
        authors = or_not_specified(&preferences.favorite_authors),
        notes = notes,
    )
}

/// Prompt for books currently popular with readers
pub fn trending_prompt(count: usize) -> String {
    format!(
        "You are a book industry expert with access to current reading trends and popularity data.

Provide {count} currently trending books that are:
1. Popular on social media and book communities
2. Frequently discussed in book clubs
3. Generating high engagement and buzz this year
4. Bestsellers and viral book recommendations
5. A mix of fiction and non-fiction
6. Both recent releases and books gaining renewed popularity

Consider books that are:
- BookTok favorites
- Award winners and nominees from recent years
- Celebrity book club picks
- Trending on Goodreads

Format your response as a simple list of book titles, one per line.
Only provide the book title, no descriptions or explanations.

Example format:
Fourth Wing
Tomorrow, and Tomorrow, and Tomorrow
Book Lovers

Your trending book recommendations:
"
    )
}

/// Prompt for critically acclaimed, highly rated books
pub fn top_rated_prompt(count: usize) -> String {
    format!(
        "You are a literary critic and book expert with knowledge of the highest-rated books.

Provide {count} top-rated books that have:
1. Excellent average ratings (4.5+ stars) on platforms like Goodreads
2. Critical acclaim from literary reviewers
3. Awards and recognition from prestigious literary organizations
4. Consistently high reader satisfaction
5. Strong literary merit and quality writing
6. A mix of classic and contemporary titles

Consider books that are:
- Winners of major literary awards (Pulitzer, Booker, etc.)
- Critically acclaimed modern classics
- Consistently appearing on \"best of\" lists
- Highly rated across different reader demographics

Format your response as a simple list of book titles, one per line.
Only provide the book title, no descriptions or explanations.

Example format:
The Seven Husbands of Evelyn Hugo
Educated
Where the Crawdads Sing

Your top-rated book recommendations:
"
    )
}
