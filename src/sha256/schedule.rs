use super::{padding::Block, sigma};

pub type MessageSchedule = [u32; 64];

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Transfer the message block to the first 16 words of a fresh 64-word message schedule,
/// then populate the remaining 48 words with scrambled versions of the words before them
pub fn expand(msg_blk: &Block) -> MessageSchedule {
    let mut msg_schedule = [0u32; 64];

    // words 0..15
    for (word, bytes) in msg_schedule.iter_mut().zip(msg_blk.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    // words 16..63
    for i in 16..64 {
        msg_schedule[i] = msg_schedule[i - 16]
            .wrapping_add(sigma(msg_schedule[i - 15], 7, 18, 3))
            .wrapping_add(msg_schedule[i - 7])
            .wrapping_add(sigma(msg_schedule[i - 2], 17, 19, 10));
    }

    msg_schedule
}
