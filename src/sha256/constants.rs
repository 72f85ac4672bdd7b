use std::sync::OnceLock;

static CONSTANTS: OnceLock<Constants> = OnceLock::new();

// 2^32 as an f64
const TWO_POW_32: f64 = 4_294_967_296.0;

/// The initial hash values and round constants, both derived from the first primes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constants {
    /// The first 32 bits of the fractional part of the square roots of the first 8 primes 2..19
    pub initial_hash: [u32; 8],
    /// The first 32 bits of the fractional part of the cube roots of the first 64 primes 2..311
    pub round: [u32; 64],
}

impl Constants {
    /// Constants shared by every digest in this process, generated on first use
    pub fn get() -> &'static Constants {
        CONSTANTS.get_or_init(Constants::generate)
    }

    pub fn generate() -> Constants {
        let mut initial_hash = [0u32; 8];
        let mut round = [0u32; 64];

        for (h, p) in initial_hash.iter_mut().zip(primes()) {
            *h = fractional_bits((p as f64).sqrt());
        }

        for (k, p) in round.iter_mut().zip(primes()) {
            *k = fractional_bits((p as f64).cbrt());
        }

        Constants {
            initial_hash,
            round,
        }
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Fractional part of `x` scaled by 2^32 and truncated.
///
/// Needs the full 53-bit mantissa of an `f64`: in `f32` the low-order bits of the larger
/// cube roots are already lost.
pub fn fractional_bits(x: f64) -> u32 {
    ((x - x.trunc()) * TWO_POW_32) as u32
}

pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }

    let mut d: u32 = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }

    true
}

/// 2, 3, 5, 7, ...
pub fn primes() -> impl Iterator<Item = u32> {
    (2u32..).filter(|&n| is_prime(n))
}
