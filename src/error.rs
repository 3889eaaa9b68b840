use crate::{highlight::HighlightError, normalizer::NormalizeError, range::RangeError};
use thiserror::Error;

/// Any error the crate can return, for callers that mix operations.
///
/// `normalize`, `find_match_ranges` and `highlight` never fail; errors only
/// come from caller-supplied ranges and normalizer configurations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchlightError {
    #[error("range error: {0}")]
    Range(#[from] RangeError),
    #[error("normalize error: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("highlight error: {0}")]
    Highlight(#[from] HighlightError),
}

pub type Result<T, E = MatchlightError> = std::result::Result<T, E>;
