//! Fixed title lists served when the text-generation model is unavailable

const GENRE_FALLBACKS: &[(&str, &[&str])] = &[
    ("fiction", &["The Seven Husbands of Evelyn Hugo", "Where the Crawdads Sing"]),
    ("mystery", &["The Silent Patient", "Gone Girl"]),
    ("romance", &["Beach Read", "The Hating Game"]),
    ("fantasy", &["The Name of the Wind", "The Way of Kings"]),
    ("science fiction", &["Klara and the Sun", "Project Hail Mary"]),
    ("non-fiction", &["Educated", "Becoming"]),
    ("thriller", &["The Girl with the Dragon Tattoo", "The Guest List"]),
];

const GENERAL_FALLBACK: &[&str] = &[
    "The Midnight Library",
    "Atomic Habits",
    "The Thursday Murder Club",
    "Circe",
    "The Invisible Life of Addie LaRue",
];

const TRENDING_FALLBACK: &[&str] = &[
    "Fourth Wing",
    "Tomorrow, and Tomorrow, and Tomorrow",
    "Book Lovers",
    "The Seven Moons of Maali Almeida",
    "The Atlas Six",
    "People We Meet on Vacation",
    "The Song of Achilles",
    "It Ends with Us",
    "The House in the Cerulean Sea",
    "Mexican Gothic",
    "The Invisible Life of Addie LaRue",
    "Klara and the Sun",
];

const TOP_RATED_FALLBACK: &[&str] = &[
    "The Seven Husbands of Evelyn Hugo",
    "Educated",
    "Where the Crawdads Sing",
    "The Midnight Library",
    "Circe",
    "The Silent Patient",
    "Atomic Habits",
    "Becoming",
    "The Thursday Murder Club",
    "Project Hail Mary",
    "The Guest List",
    "Normal People",
];

fn owned(titles: &[&str], limit: usize) -> Vec<String> {
    titles.iter().take(limit).map(|t| t.to_string()).collect()
}

/// Titles for the reader's genres, in the order the genres were given
pub fn recommendation_titles(genres: &[String], limit: usize) -> Vec<String> {
    let matched: Vec<&str> = genres
        .iter()
        .filter_map(|genre| {
            let genre = genre.to_lowercase();
            GENRE_FALLBACKS
                .iter()
                .find(|(name, _)| *name == genre)
                .map(|(_, titles)| *titles)
        })
        .flatten()
        .copied()
        .collect();

    if matched.is_empty() {
        owned(GENERAL_FALLBACK, limit)
    } else {
        owned(&matched, limit)
    }
}

pub fn trending_titles(limit: usize) -> Vec<String> {
    owned(TRENDING_FALLBACK, limit)
}

pub fn top_rated_titles(limit: usize) -> Vec<String> {
    owned(TOP_RATED_FALLBACK, limit)
}
