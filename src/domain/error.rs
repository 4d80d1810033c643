//! Domain error types.
//!
//! The table and column accessors never fail; these errors only come out of
//! the optional integrity check and the configuration/output surfaces.

/// Top-level error type for barframe.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid price list entry {entry:?}: {reason}")]
    InvalidPriceList { entry: String, reason: String },

    #[error("uneven columns: {column} has {actual} rows, expected {expected}")]
    UnevenColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FrameError> for std::process::ExitCode {
    fn from(err: &FrameError) -> Self {
        let code: u8 = match err {
            FrameError::Io(_) => 1,
            FrameError::ConfigParse { .. }
            | FrameError::ConfigInvalid { .. }
            | FrameError::InvalidPriceList { .. } => 2,
            FrameError::UnevenColumns { .. } => 3,
            FrameError::Csv(_) => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uneven_columns_message() {
        let err = FrameError::UnevenColumns {
            column: "volume".into(),
            expected: 10,
            actual: 7,
        };
        assert_eq!(
            err.to_string(),
            "uneven columns: volume has 7 rows, expected 10"
        );
    }

    #[test]
    fn config_invalid_message() {
        let err = FrameError::ConfigInvalid {
            section: "generator".into(),
            key: "precision".into(),
            reason: "precision must be at most 15".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value [generator] precision: precision must be at most 15"
        );
    }

    #[test]
    fn io_converts_via_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FrameError = io.into();
        assert!(matches!(err, FrameError::Io(_)));
    }
}
