//======================================================================
// src/mix.rs
// Word-pair mixing primitives, edge protection and cross-stream
// diffusion. All arithmetic is modulo 2^32.
//======================================================================

use crate::consts::{FIBONACCI, GOLDEN_GAMMA, STATE_WORDS};
use crate::schedule::qc_rotation;

/// Type A ("golden") mixer.
#[inline(always)]
pub(crate) fn mix_golden(a: u32, b: u32, key: u32, round: usize, slot: usize) -> (u32, u32) {
    let rot1 = qc_rotation(round, slot);
    let rot2 = qc_rotation(round + 1, slot + 1);

    let mut a2 = a.rotate_right(rot1);
    a2 = a2.wrapping_add(b);
    a2 ^= key;

    let mut b2 = b.rotate_left(rot2);
    b2 ^= a2;
    b2 = b2.wrapping_add(key);

    let mix = a2.wrapping_mul(3) ^ b2.wrapping_mul(5);
    a2 ^= mix >> 11;
    b2 ^= mix << 7;
    (a2, b2)
}

/// Type B ("complementary") mixer.
#[inline(always)]
pub(crate) fn mix_complementary(a: u32, b: u32, key: u32, round: usize, slot: usize) -> (u32, u32) {
    let rot1 = qc_rotation(round, slot);
    let rot2 = qc_rotation(round + 1, slot + 1);

    let mut a2 = a ^ b;
    a2 = a2.rotate_left(rot1);
    a2 = a2.wrapping_add(key >> 1);

    let mut b2 = b.wrapping_add(a2);
    b2 = b2.rotate_right(rot2);
    b2 ^= key >> 1;
    (a2, b2)
}

/// Boundary-word transform. The fixed mixing topology leaves slots 0 and 7
/// with fewer neighbours, so they get an extra rotation, a Fibonacci-Weyl
/// constant and a mutual interaction term.
pub(crate) fn edge_protect(s: &mut [u32; STATE_WORDS], round: usize, rot_l: u32, rot_r: u32) {
    let left = FIBONACCI[round % 12].wrapping_mul(GOLDEN_GAMMA);
    s[0] = s[0].rotate_right(rot_l) ^ left;
    s[7] = s[7].rotate_left(rot_r) ^ !left;
    let interaction = (s[0] ^ s[7]) >> 16;
    s[0] = s[0].wrapping_add(interaction);
    s[7] = s[7].wrapping_add(interaction);
}

/// Couple the two streams so a perturbation cannot stay confined to one of
/// them. Updates are sequential in slot order.
pub(crate) fn cross_stream(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], rot: u32) {
    for i in 0..STATE_WORDS {
        let temp = g[i] ^ c[(i + 3) % STATE_WORDS];
        g[i] = g[i].wrapping_add(temp.rotate_right(rot));
        c[i] ^= temp.rotate_left(rot);
    }
}
