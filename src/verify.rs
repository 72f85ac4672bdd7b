//! Checking data against a known digest.

use std::{fs, path::Path};

use crate::{
    error::Result,
    sha256::{Digest, digest},
};

/// Does the digest of `msg` equal `expected_hex`? Hex case is ignored.
pub fn verify(msg: &[u8], expected_hex: &str) -> Result<bool> {
    let expected: Digest = expected_hex.parse()?;
    Ok(digest(msg)? == expected)
}

/// File integrity check: hashes the whole file and compares it with `expected_hex`
pub fn verify_file(path: impl AsRef<Path>, expected_hex: &str) -> Result<bool> {
    let expected: Digest = expected_hex.parse()?;
    let contents = fs::read(path)?;
    Ok(digest(&contents)? == expected)
}

/// First candidate whose UTF-8 bytes hash to `target_hex`
pub fn find_preimage<'a, I>(target_hex: &str, candidates: I) -> Result<Option<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let target: Digest = target_hex.parse()?;

    for candidate in candidates {
        if digest(candidate.as_bytes())? == target {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
