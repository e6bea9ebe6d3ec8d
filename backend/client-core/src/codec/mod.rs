//! Schema-driven binary codec for engine messages.
//!
//! Request layout (`Operation::request_size()` bytes):
//!
//! | offset | content                                  |
//! |--------|------------------------------------------|
//! | 0      | endianness tag (0 little, 1 big)         |
//! | 1      | model selector                           |
//! | 2..8   | zero padding                             |
//! | 8..    | parameters as f64, in declared order     |
//!
//! Responses are bare f64 arrays with no header. They carry no tag: the
//! engine answers in the byte order named by the request, so a client always
//! reads them in its own order.

mod message;

pub use message::WireMessage;

use crate::endianness::{Endianness, host_byte_order};
use crate::error::CodecError;

use common::ErrorLocation;
use models::{
    ComputationRequest, ComputationResponse, DOUBLE_SIZE, HEADER_SIZE, Operation,
};

use log::trace;

pub(crate) const TAG_OFFSET: usize = 0;
pub(crate) const MODEL_OFFSET: usize = 1;

/// Encoder/decoder bound to one byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireCodec {
    byte_order: Endianness,
}

impl WireCodec {
    /// Codec using the probed host byte order.
    pub fn native() -> Self {
        Self::with_byte_order(host_byte_order().endianness())
    }

    pub const fn with_byte_order(byte_order: Endianness) -> Self {
        Self { byte_order }
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// Encode a request into its fixed-size message.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encoding`] when the request's parameter count
    /// differs from the operation's arity.
    #[track_caller]
    pub fn encode(&self, request: &ComputationRequest) -> Result<WireMessage, CodecError> {
        let operation = request.operation();

        if !request.has_declared_arity() {
            return Err(CodecError::Encoding {
                operation,
                expected: operation.arity(),
                actual: request.parameters().len(),
                location: ErrorLocation::caller(),
            });
        }

        let mut bytes = vec![0u8; operation.request_size()];
        bytes[TAG_OFFSET] = self.byte_order.tag();
        bytes[MODEL_OFFSET] = request.model();

        for (slot, value) in bytes[HEADER_SIZE..]
            .chunks_exact_mut(DOUBLE_SIZE)
            .zip(request.parameters())
        {
            slot.copy_from_slice(&self.byte_order.write_f64(*value));
        }

        debug_assert_eq!(bytes.len(), operation.request_size());
        trace!("Encoded {operation} request: {} bytes", bytes.len());

        Ok(WireMessage::new(operation, bytes))
    }

    /// Decode a response body into the operation's doubles.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ShapeMismatch`] unless `bytes` holds exactly
    /// `operation.response_doubles()` doubles.
    #[track_caller]
    pub fn decode(
        &self,
        bytes: &[u8],
        operation: Operation,
    ) -> Result<ComputationResponse, CodecError> {
        let expected = operation.response_size();

        if bytes.len() != expected {
            return Err(CodecError::ShapeMismatch {
                operation,
                message: format!("expected {expected} response bytes, got {}", bytes.len()),
                location: ErrorLocation::caller(),
            });
        }

        let values = self.read_doubles(bytes, self.byte_order);
        trace!("Decoded {operation} response: {} values", values.len());

        Ok(ComputationResponse::new(operation, values))
    }

    /// Engine side of [`WireCodec::decode`]: lay a response out as bytes.
    #[track_caller]
    pub fn encode_response(&self, response: &ComputationResponse) -> Result<Vec<u8>, CodecError> {
        let operation = response.operation();

        if !response.has_declared_shape() {
            return Err(CodecError::ShapeMismatch {
                operation,
                message: format!(
                    "expected {} response values, got {}",
                    operation.response_doubles(),
                    response.values().len()
                ),
                location: ErrorLocation::caller(),
            });
        }

        Ok(response
            .values()
            .iter()
            .flat_map(|value| self.byte_order.write_f64(*value))
            .collect())
    }

    /// Engine side of [`WireCodec::encode`]: read a request, honoring the
    /// sender's endianness tag rather than this codec's byte order.
    #[track_caller]
    pub fn decode_request(
        &self,
        bytes: &[u8],
        operation: Operation,
    ) -> Result<ComputationRequest, CodecError> {
        let expected = operation.request_size();

        if bytes.len() != expected {
            return Err(CodecError::ShapeMismatch {
                operation,
                message: format!("expected {expected} request bytes, got {}", bytes.len()),
                location: ErrorLocation::caller(),
            });
        }

        let tag = bytes[TAG_OFFSET];
        let sender_order =
            Endianness::try_from_tag(tag).ok_or_else(|| CodecError::InvalidEndianness {
                tag,
                location: ErrorLocation::caller(),
            })?;

        if sender_order != self.byte_order {
            trace!("Swapping {operation} request from {sender_order:?}");
        }

        let parameters = self.read_doubles(&bytes[HEADER_SIZE..], sender_order);

        Ok(ComputationRequest::new(operation, bytes[MODEL_OFFSET], parameters))
    }

    fn read_doubles(&self, bytes: &[u8], order: Endianness) -> Vec<f64> {
        bytes
            .chunks_exact(DOUBLE_SIZE)
            .map(|chunk| {
                let mut word = [0u8; DOUBLE_SIZE];
                word.copy_from_slice(chunk);
                order.read_f64(word)
            })
            .collect()
    }
}

impl Default for WireCodec {
    fn default() -> Self {
        Self::native()
    }
}

/// Encode with the host byte order.
#[track_caller]
pub fn encode(request: &ComputationRequest) -> Result<WireMessage, CodecError> {
    WireCodec::native().encode(request)
}

/// Decode with the host byte order.
#[track_caller]
pub fn decode(bytes: &[u8], operation: Operation) -> Result<ComputationResponse, CodecError> {
    WireCodec::native().decode(bytes, operation)
}
