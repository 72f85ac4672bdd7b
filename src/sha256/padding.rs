use crate::error::{Result, Sha256Error};

pub const BLOCK_SIZE: usize = 64;

// End-of-data marker: a single 1 bit followed by zeros
const EOD_MARKER: u8 = 0x80;

pub type Block = [u8; BLOCK_SIZE];

/// A message padded out to a whole number of 64-byte blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Box<[Block]>,
}

impl PaddedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        self.blocks.as_flattened()
    }

    pub fn len(&self) -> usize {
        self.blocks.len() * BLOCK_SIZE
    }

    /// Always false: even an empty message pads out to one block
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &Block> {
        self.blocks.iter()
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Message length in bits, as written into the length field
pub fn bit_length(len: u64) -> Result<u64> {
    len.checked_mul(8).ok_or(Sha256Error::InputTooLarge { len })
}

/// Number of 64-byte blocks needed for a message of `len` bytes (EOD marker + 8 length bytes)
pub fn block_count(len: usize) -> usize {
    len.saturating_add(1 + 8).div_ceil(BLOCK_SIZE)
}

/// Append the EOD marker, zero fill up to 56 mod 64, then the big-endian bit length
pub fn pad(msg: &[u8]) -> Result<PaddedMessage> {
    // usize is at most 64 bits wide on every supported target
    let msg_size_bits = bit_length(msg.len() as u64)?.to_be_bytes();

    // Zero fill comes for free from the initial allocation
    let mut blocks = vec![[0u8; BLOCK_SIZE]; block_count(msg.len())].into_boxed_slice();
    let buffer = blocks.as_flattened_mut();
    let end = buffer.len();

    buffer[..msg.len()].copy_from_slice(msg);
    buffer[msg.len()] = EOD_MARKER;
    buffer[end - 8..].copy_from_slice(&msg_size_bits);

    Ok(PaddedMessage { blocks })
}
