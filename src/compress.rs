//======================================================================
// src/compress.rs
// Per-block compression for both scheduling modes, the keyless sponge
// permutation, Davies–Meyer feed-forward and the two finalizers.
//======================================================================

use crate::backends;
use crate::consts::{
    BLOCK_SIZE, CROSS_STREAM_ROT, DIGEST_SIZE, EDGE_ROT_LEFT, EDGE_ROT_RIGHT, FIBONACCI_WORD,
    NG_ROUNDS, PHI_CONSTANTS, RECIPROCAL_CONSTANTS, STATE_WORDS,
};
use crate::mix::{cross_stream, edge_protect};
use crate::schedule::{
    expand_ng, expand_table, penrose_index, qc_rotation, MIX_DISPATCH, NG_ROTATION_SCHEDULE,
};

#[inline(always)]
fn feed_forward(state: &mut [u32; STATE_WORDS], original: &[u32; STATE_WORDS]) {
    for (s, o) in state.iter_mut().zip(original) {
        *s = s.wrapping_add(*o);
    }
}

/// Edge protection every 8 rounds, cross-stream diffusion every 4, as the
/// table-lookup round loops schedule them.
#[inline(always)]
fn table_lattice_step(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], r: usize) {
    if r > 0 && r % 8 == 0 {
        edge_protect(g, r, qc_rotation(r, 0), qc_rotation(r, 7));
        edge_protect(c, r, qc_rotation(r, 0), qc_rotation(r, 7));
    }
    if r > 0 && r % 4 == 0 {
        cross_stream(g, c, qc_rotation(r, 4));
    }
}

/// Compress one block in table-lookup mode: the round's mixer runs across
/// the 4 disjoint (i, i+4) pairs of each stream, keyed by the round
/// constant folded with a message word.
pub(crate) fn compress_table(
    g: &mut [u32; STATE_WORDS],
    c: &mut [u32; STATE_WORDS],
    block: &[u8; BLOCK_SIZE],
    rounds: usize,
) {
    let w = expand_table(block, rounds);
    let g0 = *g;
    let c0 = *c;

    for r in 0..rounds {
        let mixer = MIX_DISPATCH[r % FIBONACCI_WORD.len()];
        let key_g = PHI_CONSTANTS[r % 16] ^ w[r];
        let key_c = RECIPROCAL_CONSTANTS[r % 16] ^ w[(r + 1) % rounds];

        for i in 0..4 {
            let j = i + 4;
            (g[i], g[j]) = mixer(g[i], g[j], key_g, r, i);
            (c[i], c[j]) = mixer(c[i], c[j], key_c, r, j);
        }
        table_lattice_step(g, c, r);
    }

    feed_forward(g, &g0);
    feed_forward(c, &c0);
}

/// Compress one block in the vectorizable mode: additive message injection
/// into slot 0, constants XORed into slot 4, then the quarter-round phases.
pub(crate) fn compress_ng(
    g: &mut [u32; STATE_WORDS],
    c: &mut [u32; STATE_WORDS],
    block: &[u8; BLOCK_SIZE],
) {
    let w = expand_ng(block);
    let g0 = *g;
    let c0 = *c;

    for r in 0..NG_ROUNDS {
        let rots = &NG_ROTATION_SCHEDULE[r];

        g[0] = g[0].wrapping_add(w[r]);
        c[0] = c[0].wrapping_add(w[NG_ROUNDS - 1 - r]);
        g[4] ^= PHI_CONSTANTS[r % 16];
        c[4] ^= RECIPROCAL_CONSTANTS[r % 16];

        backends::ng_round(g, c, rots);

        if (r + 1) % 4 == 0 {
            cross_stream(g, c, CROSS_STREAM_ROT);
        }
        if (r + 1) % 8 == 0 {
            edge_protect(g, r, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);
            edge_protect(c, r, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);
        }
    }

    feed_forward(g, &g0);
    feed_forward(c, &c0);
}

/// Keyless permutation over the full dual state: the table-mode round
/// machinery without message injection or feed-forward.
pub(crate) fn permute(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], rounds: usize) {
    for r in 0..rounds {
        let mixer = MIX_DISPATCH[r % FIBONACCI_WORD.len()];
        let key_g = PHI_CONSTANTS[r % 16];
        let key_c = RECIPROCAL_CONSTANTS[r % 16];

        for i in 0..4 {
            let j = i + 4;
            (g[i], g[j]) = mixer(g[i], g[j], key_g, r, i);
            (c[i], c[j]) = mixer(c[i], c[j], key_c, r, j);
        }
        table_lattice_step(g, c, r);
    }
}

/// Fuse the streams into a digest, table-lookup mode: the round schedule
/// continues past the last compression round for the final edge protection.
pub(crate) fn finalize_table(
    g: &[u32; STATE_WORDS],
    c: &[u32; STATE_WORDS],
    rounds: usize,
) -> [u8; DIGEST_SIZE] {
    let mut g = *g;
    let mut c = *c;
    edge_protect(&mut g, rounds, qc_rotation(rounds, 0), qc_rotation(rounds, 7));
    edge_protect(
        &mut c,
        rounds + 1,
        qc_rotation(rounds + 1, 0),
        qc_rotation(rounds + 1, 7),
    );

    let mut digest = [0u8; DIGEST_SIZE];
    for i in 0..STATE_WORDS {
        let rot = qc_rotation(i, i);
        let fused = g[i].rotate_right(rot) ^ c[i].rotate_left(rot);
        let perturbation = (PHI_CONSTANTS[i] >> penrose_index(i * 31 + 17)) & 0xFF;
        let word = fused.wrapping_add(perturbation);
        digest[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
    digest
}

/// Fuse the streams into a digest, vectorizable mode.
pub(crate) fn finalize_ng(g: &[u32; STATE_WORDS], c: &[u32; STATE_WORDS]) -> [u8; DIGEST_SIZE] {
    let mut g = *g;
    let mut c = *c;
    edge_protect(&mut g, NG_ROUNDS, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);
    edge_protect(&mut c, NG_ROUNDS + 1, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);

    let mut digest = [0u8; DIGEST_SIZE];
    for i in 0..STATE_WORDS {
        let rot = ((i * 3 + 5) % 16 + 1) as u32;
        let fused = g[i].rotate_right(rot) ^ c[i].rotate_left(rot);
        let word = fused.wrapping_add(PHI_CONSTANTS[i]);
        digest[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
    digest
}
