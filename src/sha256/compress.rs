use super::{big_sigma, choose, majority, schedule::MessageSchedule};

pub type HashState = [u32; 8];

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Run the 64 rounds over one block's message schedule and fold the result into the hash state
pub fn compress(hash_vals: &mut HashState, round_constants: &[u32; 64], msg_schedule: &MessageSchedule) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *hash_vals;

    for (k, w) in round_constants.iter().zip(msg_schedule) {
        let t1 = h
            .wrapping_add(big_sigma(e, 6, 11, 25))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*w);
        let t2 = big_sigma(a, 2, 13, 22).wrapping_add(majority(a, b, c));

        // Shunt working copies of the hash values
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (hash_val, working) in hash_vals.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *hash_val = hash_val.wrapping_add(working);
    }
}
