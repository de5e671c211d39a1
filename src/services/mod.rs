pub mod catalog;
pub mod discovery;
pub mod fallback;
pub mod generator;
pub mod prompts;
pub mod recommendations;
pub mod recommender;
pub mod scoring;
pub mod title_parser;

pub use recommendations::{EngineSettings, ListSource, RecommendationEngine};
pub use recommender::BookRecommender;
