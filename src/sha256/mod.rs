pub mod compress;
pub mod constants;
pub mod padding;
pub mod schedule;

use std::{fmt, str::FromStr};

use crate::{
    error::{Result, Sha256Error},
    trace::{NoTrace, Trace},
};
use compress::{HashState, compress};
use constants::Constants;
use padding::pad;
use schedule::expand;

pub const DIGEST_SIZE: usize = 32;

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Internal SHA256 machinery
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
#[inline(always)]
fn inner_sigma(v: u32, rotr1: u32, rotr2: u32) -> u32 {
    v.rotate_right(rotr1) ^ v.rotate_right(rotr2)
}

#[inline(always)]
fn sigma(v: u32, rotr1: u32, rotr2: u32, shr: u32) -> u32 {
    inner_sigma(v, rotr1, rotr2) ^ (v >> shr)
}

#[inline(always)]
fn big_sigma(v: u32, rotr1: u32, rotr2: u32, rotr3: u32) -> u32 {
    inner_sigma(v, rotr1, rotr2) ^ v.rotate_right(rotr3)
}

#[inline(always)]
fn choose(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ ((!a) & c)
}

#[inline(always)]
fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// A 32-byte SHA-256 digest; displays as 64 lowercase hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    fn from_hash_vals(hash_vals: &HashState) -> Self {
        let mut bytes = [0u8; DIGEST_SIZE];
        for (chunk, h) in bytes.chunks_exact_mut(4).zip(hash_vals) {
            chunk.copy_from_slice(&h.to_be_bytes());
        }
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parses 64 hex characters, either case
impl FromStr for Digest {
    type Err = Sha256Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Digest(bytes))
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// SHA-256 digest of a complete message
pub fn digest(msg: &[u8]) -> Result<Digest> {
    digest_with_trace(msg, NoTrace)
}

/// As [`digest`], reporting progress to `trace`
pub fn digest_with_trace(msg: &[u8], mut trace: impl Trace) -> Result<Digest> {
    let consts = Constants::get();
    trace.constants(consts);

    let padded = pad(msg)?;
    let blk_count = padded.block_count();
    trace.padded(msg.len(), padded.len(), blk_count);

    // Each block starts from the hash values left by the one before it
    let mut hash_vals = consts.initial_hash;
    for (idx, msg_blk) in padded.blocks().enumerate() {
        trace.block(idx, blk_count);
        compress(&mut hash_vals, &consts.round, &expand(msg_blk));
    }

    Ok(Digest::from_hash_vals(&hash_vals))
}
