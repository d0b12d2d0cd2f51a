use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid weight for {criterion}: {weight} (must be 0-10)")]
    InvalidWeight { criterion: String, weight: u32 },
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}
