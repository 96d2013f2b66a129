use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("failed to read lesson '{path}': {source}")]
    LessonRead {
        path: String,
        source: std::io::Error,
    },
    #[error("unknown motion key '{key}' in --motions")]
    UnknownMotion { key: String },
    #[error("--motions is empty")]
    EmptyMotionList,
}
