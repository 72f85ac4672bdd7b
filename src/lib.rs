//! Single-shot SHA-256 as specified by FIPS 180-4.
//!
//! The initial hash values and round constants are not baked in: they are derived from the
//! fractional parts of the square and cube roots of the first primes, once per process.
//!
//! ```
//! let d = fips_sha256::digest(b"abc").unwrap();
//! assert_eq!(
//!     d.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod error;
pub mod sha256;
pub mod trace;
pub mod verify;

pub use error::{Result, Sha256Error};
pub use sha256::{DIGEST_SIZE, Digest, constants::Constants, digest, digest_with_trace};
pub use trace::{NoTrace, StderrTrace, Trace};
pub use verify::{find_preimage, verify, verify_file};
