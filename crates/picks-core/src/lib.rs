pub mod error;
pub mod series;
pub mod traits;
pub mod types;
pub mod universe;

pub use error::*;
pub use series::PriceSeries;
pub use traits::*;
pub use types::*;
