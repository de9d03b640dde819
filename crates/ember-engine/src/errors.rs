use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to parse scene: {0}")]
    Parse(String),
    #[error("variation evaluation failed: {0}")]
    Evaluation(String),
}
