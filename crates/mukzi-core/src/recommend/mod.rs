//! Integrated multi-signal recommendation.

pub mod appetite;
pub mod model;
pub mod scorer;
pub mod service;

pub use appetite::AppetiteClass;
pub use model::{SatietyLevel, ScoredCategory};
pub use scorer::{calculate_top_categories, calculate_top_n};
pub use service::RecommendationService;
