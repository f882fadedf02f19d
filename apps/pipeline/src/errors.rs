use thiserror::Error;

/// Pipeline-level error taxonomy.
///
/// Stage-local recoverable conditions (a malformed section, a missing theme
/// field) are absorbed by the renderer and theme resolver and never reach
/// this type. Everything here halts the run, except `ValidationExhausted`,
/// which is fatal only under `ExhaustedPolicy::Fail`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Validation exhausted after {attempts} attempts")]
    ValidationExhausted { attempts: u32 },

    #[error("Assembly I/O error: {0}")]
    Assembly(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Deployment error: {0}")]
    Deployment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_exhausted_is_distinguishable() {
        let err = PipelineError::ValidationExhausted { attempts: 3 };
        assert!(err.to_string().contains("3 attempts"));
        assert!(matches!(
            err,
            PipelineError::ValidationExhausted { attempts: 3 }
        ));
    }

    #[test]
    fn test_io_error_converts_to_assembly() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PipelineError = io.into();
        assert!(matches!(err, PipelineError::Assembly(_)));
    }
}
