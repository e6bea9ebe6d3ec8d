use crate::error::FailureKind;

use common::ErrorLocation;
use models::Operation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("Encoding Error: {operation} expects {expected} parameters, got {actual} {location}")]
    Encoding {
        operation: Operation,
        expected: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("Shape Mismatch Error: {operation}: {message} {location}")]
    ShapeMismatch {
        operation: Operation,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Endianness Error: tag {tag} is neither 0 nor 1 {location}")]
    InvalidEndianness { tag: u8, location: ErrorLocation },
}

impl CodecError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CodecError::Encoding { .. } => FailureKind::EncodingError,
            CodecError::ShapeMismatch { .. } => FailureKind::ShapeMismatch,
            CodecError::InvalidEndianness { .. } => FailureKind::InvalidEndianness,
        }
    }
}
