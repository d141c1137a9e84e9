use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot lay out a diagram with no entities")]
    NoEntities,
    #[error("call `{label}` references unknown entity `{name}`")]
    UnknownEntity { name: String, label: String },
    #[error("screen width {screen_width} is too narrow for {entities} entities")]
    ScreenTooNarrow { screen_width: usize, entities: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid flow file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("flow file has no flow at index {index} ({available} available)")]
    MissingFlow { index: usize, available: usize },
    #[error("call from `{from}` to `{to}` has an empty label")]
    EmptyLabel { from: String, to: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
