use std::path::{Path, PathBuf};

/// Convenience result type used across padframe.
pub type BatchResult<T> = Result<T, BatchError>;

/// Top-level error type for padframe operations.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    /// A value type was built from out-of-range input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or invalid command-line input.
    #[error("input error: {0}")]
    Input(String),

    /// No file in the input directory matched the image extensions.
    #[error("no images found in '{}'", dir.display())]
    EmptyInput {
        /// Directory that was scanned.
        dir: PathBuf,
    },

    /// A single file could not be opened or decoded.
    #[error("decode error: '{}': {source}", path.display())]
    Decode {
        /// Offending file.
        path: PathBuf,
        /// Underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// The animation could not be assembled from the collected frames.
    #[error("assembly error: {0}")]
    Assembly(String),

    /// Encoding or writing the final artifact failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level failure, usually I/O with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BatchError {
    /// Build a [`BatchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BatchError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`BatchError::EmptyInput`] value.
    pub fn empty_input(dir: impl Into<PathBuf>) -> Self {
        Self::EmptyInput { dir: dir.into() }
    }

    /// Build a [`BatchError::Decode`] value.
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Build a [`BatchError::Assembly`] value.
    pub fn assembly(msg: impl Into<String>) -> Self {
        Self::Assembly(msg.into())
    }

    /// Build a [`BatchError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

/// A file that was skipped, with the message that explains why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl FileFailure {
    pub(crate) fn new(path: &Path, err: &BatchError) -> Self {
        let message = match err {
            // The path is already carried separately.
            BatchError::Decode { source, .. } => source.to_string(),
            other => format!("{other:#}"),
        };
        Self {
            path: path.to_path_buf(),
            message,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
