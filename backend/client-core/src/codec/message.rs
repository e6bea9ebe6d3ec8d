use crate::codec::{MODEL_OFFSET, TAG_OFFSET};

use models::Operation;

/// An encoded request, exactly `operation.request_size()` bytes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireMessage {
    operation: Operation,
    bytes: Vec<u8>,
}

impl WireMessage {
    pub(crate) fn new(operation: Operation, bytes: Vec<u8>) -> Self {
        Self { operation, bytes }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn endianness_tag(&self) -> u8 {
        self.bytes[TAG_OFFSET]
    }

    pub fn model(&self) -> u8 {
        self.bytes[MODEL_OFFSET]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for WireMessage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
