//! Diagnostic hooks invoked at fixed points of a digest computation.
//!
//! The hashing pipeline never prints; a caller that wants to watch it passes a [`Trace`]
//! implementation to [`digest_with_trace`](crate::sha256::digest_with_trace).

use crate::sha256::constants::{Constants, primes};

// Round constants shown by `StderrTrace`; the full table is 64 lines of noise
const ROUND_CONSTANTS_SHOWN: usize = 8;

pub trait Trace {
    /// Called once per digest, before any block is processed
    fn constants(&mut self, _consts: &Constants) {}

    /// Called after padding, with the original and padded sizes in bytes
    fn padded(&mut self, _msg_len: usize, _padded_len: usize, _blk_count: usize) {}

    /// Called on entry to each block; `index` counts from 0
    fn block(&mut self, _index: usize, _blk_count: usize) {}
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Trace for NoTrace {}

/// Writes each event to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrTrace;

impl Trace for StderrTrace {
    fn constants(&mut self, consts: &Constants) {
        eprintln!("Initial hash values:");
        for (i, (h, p)) in consts.initial_hash.iter().zip(primes()).enumerate() {
            eprintln!("H[{i}] = sqrt({p}) -> 0x{h:08x}");
        }

        eprintln!("Round constants:");
        for (i, (k, p)) in consts
            .round
            .iter()
            .zip(primes())
            .take(ROUND_CONSTANTS_SHOWN)
            .enumerate()
        {
            eprintln!("K[{i}] = cbrt({p}) -> 0x{k:08x}");
        }
    }

    fn padded(&mut self, msg_len: usize, padded_len: usize, blk_count: usize) {
        eprintln!("Message length: {msg_len} bytes, padded to {padded_len} bytes");
        eprintln!("Split into {blk_count} block(s) of 512 bits");
    }

    fn block(&mut self, index: usize, blk_count: usize) {
        eprintln!("Processing block {}/{blk_count}", index + 1);
    }
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn constants(&mut self, consts: &Constants) {
        (**self).constants(consts)
    }

    fn padded(&mut self, msg_len: usize, padded_len: usize, blk_count: usize) {
        (**self).padded(msg_len, padded_len, blk_count)
    }

    fn block(&mut self, index: usize, blk_count: usize) {
        (**self).block(index, blk_count)
    }
}
