use thiserror::Error;

/// Engine-level error type.
///
/// All variants are recoverable at the profile-building boundary: extraction
/// and scoring themselves never fail on odd input (empty text yields empty
/// results, malformed postings are skipped), so the surface area here is
/// deliberately small.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Résumé text too short to analyze after extraction. Raised at the
    /// profile-building boundary, never inside the extractors.
    #[error("Insufficient resume text: {chars} chars (minimum {min})")]
    InsufficientText { chars: usize, min: usize },

    /// A job-source collaborator failed to deliver postings.
    #[error("Job source error: {0}")]
    Source(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_text_message_names_both_lengths() {
        let err = EngineError::InsufficientText { chars: 12, min: 30 };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("30"));
    }
}
