//! Error types for loading the dashboard

use thiserror::Error;

use crate::download::SourceKind;

/// Terminal conditions that stop the pipeline from being built.
///
/// Row-level rejections and query-level gaps are not errors; they show up as
/// absent values in the returned data.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{kind} data unavailable: {reason}")]
    SourceUnavailable { kind: SourceKind, reason: String },

    #[error("{0} data unavailable: source contained no records")]
    EmptySource(SourceKind),

    #[error("Config error: {0}")]
    Config(String),
}

impl PipelineError {
    pub fn unavailable(kind: SourceKind, reason: impl ToString) -> Self {
        PipelineError::SourceUnavailable {
            kind,
            reason: reason.to_string(),
        }
    }

    /// True for the conditions shown to users as "data unavailable".
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            PipelineError::SourceUnavailable { .. } | PipelineError::EmptySource(_)
        )
    }
}
