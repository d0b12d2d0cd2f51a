pub mod engine;
pub mod math;
pub mod models;
pub mod selection;


pub use engine::ContributionSimulator;
pub use models::*;
pub use selection::{select_candidates, target_weights};
