use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub category: String,
    pub confidence: f64,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to run classifier command: {0}")]
    Io(#[from] std::io::Error),
    #[error("classifier exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
    #[error("classifier output was not a prediction: {0}")]
    Parse(#[from] serde_json::Error),
}
