use fips_sha256::{DIGEST_SIZE, Sha256Error, Trace, digest, digest_with_trace};

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use sha2::Digest as _;
use std::thread;
use test_case::test_case;

fn reference(msg: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(sha2::Sha256::digest(msg).as_slice());
    out
}

fn hex_digest(msg: &[u8]) -> String {
    digest(msg).map(|d| d.to_hex()).unwrap_or_else(|e| e.to_string())
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
#[test_case(b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855" ; "empty")]
#[test_case(b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad" ; "abc")]
#[test_case(
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
    "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1" ;
    "two blocks"
)]
#[test_case(
    b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
    "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1" ;
    "112 bytes"
)]
#[test_case(
    b"The quick brown fox jumps over the lazy dog",
    "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592" ;
    "quick brown fox"
)]
fn should_match_published_vector(msg: &[u8], ans: &str) {
    assert_eq!(hex_digest(msg), ans);
}

#[test]
fn should_hash_one_million_a() {
    let msg = vec![b'a'; 1_000_000];
    assert_eq!(
        hex_digest(&msg),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
struct BlockCounter(usize);

impl Trace for BlockCounter {
    fn block(&mut self, _index: usize, _blk_count: usize) {
        self.0 += 1;
    }
}

#[test_case(55, 1)]
#[test_case(56, 2)]
#[test_case(63, 2)]
#[test_case(64, 2)]
#[test_case(119, 2)]
#[test_case(120, 3)]
fn should_process_every_block_around_padding_boundary(len: usize, blocks: usize) {
    let msg: Vec<u8> = (0..len).map(|i| i as u8).collect();
    let mut counter = BlockCounter(0);

    let d = digest_with_trace(&msg, &mut counter).unwrap();

    assert_eq!(counter.0, blocks);
    assert_eq!(*d.as_bytes(), reference(&msg));
}

#[test]
fn should_agree_with_reference_on_random_inputs() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0x5348_4132_3536);

    for _ in 0..200 {
        let len = rng.gen_range(0..1_000);
        let mut msg = vec![0u8; len];
        rng.fill_bytes(&mut msg);

        let got = digest(&msg).map_err(|e| e.to_string())?;
        if *got.as_bytes() != reference(&msg) {
            return Err(format!("digest mismatch for {len}-byte input {}", hex::encode(&msg)));
        }
    }

    Ok(())
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
#[test]
fn should_be_deterministic() -> Result<(), Sha256Error> {
    let msg = b"same input, same output";
    assert_eq!(digest(msg)?, digest(msg)?);
    Ok(())
}

#[test]
fn should_always_produce_32_bytes() -> Result<(), Sha256Error> {
    for len in [0, 1, 55, 56, 64, 1000] {
        let d = digest(&vec![0x42; len])?;
        assert_eq!(d.as_bytes().len(), DIGEST_SIZE);
        assert_eq!(d.to_hex().len(), 2 * DIGEST_SIZE);
    }
    Ok(())
}

#[test]
fn should_change_many_bits_when_one_input_bit_flips() -> Result<(), Sha256Error> {
    let msg = b"The quick brown fox jumps over the lazy dog".to_vec();
    let base = digest(&msg)?;

    for bit in [0, 7, 100, 343] {
        let mut flipped = msg.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let other = digest(&flipped)?;
        let changed: u32 = base
            .as_bytes()
            .iter()
            .zip(other.as_bytes())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();

        // 256 output bits; an unbroken hash flips about half of them
        assert!(changed > 64, "only {changed} bits changed after flipping bit {bit}");
    }
    Ok(())
}

#[test]
fn should_hash_independent_inputs_on_separate_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|n| {
            thread::spawn(move || {
                let msg = vec![n; 100 * n as usize];
                (digest(&msg).map(<[u8; DIGEST_SIZE]>::from), reference(&msg))
            })
        })
        .collect();

    for handle in handles {
        let (got, ans) = handle.join().unwrap();
        assert_eq!(got.unwrap(), ans);
    }
}
