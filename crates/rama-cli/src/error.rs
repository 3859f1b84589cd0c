use ramakit::core::naming::convention::ConventionLoadError;
use ramakit::engine::config::ConfigError;
use ramakit::plot::svg::RenderError;
use ramakit::workflows::ramachandran::WorkflowError;
use ramakit::workflows::scan::ScanError;
use ramakit::PresentationError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Selector(#[from] ConfigError),

    #[error(transparent)]
    Convention(#[from] ConventionLoadError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ScanError> for CliError {
    fn from(e: ScanError) -> Self {
        CliError::Workflow(WorkflowError::Scan(e))
    }
}
