use std::fmt;
use thiserror::Error;

/// Which side of a merge a parse failure came from.
///
/// A candidate-side failure indicates a generator or template defect; a
/// prior-side failure indicates previously generated output that was
/// corrupted outside the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    Candidate,
    Prior,
}

impl fmt::Display for MergeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSide::Candidate => write!(f, "candidate"),
            MergeSide::Prior => write!(f, "prior"),
        }
    }
}

/// Errors produced by the generation core.
///
/// Nothing is retried: the operator fixes the definition, template, or
/// hand-edited file and re-invokes generation wholesale. A file either
/// generates fully or fails with one of these; sibling files are unaffected.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The definition document declares no service.
    #[error("no service found in definition document")]
    NoServiceFound,
    /// The generator targets exactly one service per run.
    #[error("expected exactly one service in definition document, found {count}")]
    MultipleServicesFound { count: usize },
    /// Template syntax defect or reference to an undefined context field.
    #[error("template `{path}` failed to render")]
    Template {
        path: String,
        #[source]
        source: minijinja::Error,
    },
    /// No template asset registered at the given logical path.
    #[error("no template registered at `{path}`")]
    UnknownTemplate { path: String },
    /// Candidate or prior text is not valid Rust source during a merge.
    #[error("{side} source failed to parse")]
    Parse {
        side: MergeSide,
        #[source]
        source: syn::Error,
    },
    /// Output text failed to canonicalize.
    #[error("source failed to canonicalize")]
    Syntax {
        #[source]
        source: syn::Error,
    },
}
