//======================================================================
// src/schedule.rs
// Round scheduling (rotation lookup, mixer dispatch, fixed schedule)
// and message expansion for both scheduling modes.
//======================================================================

use crate::consts::{
    BLOCK_SIZE, FIBONACCI, FIBONACCI_WORD, NG_FIBONACCI_WORD, NG_ROUNDS, PENROSE,
    QUASICRYSTAL_ROTATIONS, ROTATIONS_A, ROTATIONS_B,
};
use crate::mix::{mix_complementary, mix_golden};

/// Rotation amount for (round, slot) in the table-lookup profiles.
#[inline(always)]
pub(crate) fn qc_rotation(round: usize, slot: usize) -> u32 {
    QUASICRYSTAL_ROTATIONS[round % 32][slot % 10] as u32
}

/// Penrose index for `n < 256`.
#[inline(always)]
pub(crate) fn penrose_index(n: usize) -> u32 {
    PENROSE[n] as u32
}

/// Word-pair mixer signature shared by the two table-mode primitives.
pub(crate) type MixFn = fn(u32, u32, u32, usize, usize) -> (u32, u32);

/// Per-round mixer dispatch, resolved once from the Fibonacci word so the
/// round loop indexes instead of branching.
pub(crate) static MIX_DISPATCH: [MixFn; FIBONACCI_WORD.len()] = build_mix_dispatch();

const fn build_mix_dispatch() -> [MixFn; FIBONACCI_WORD.len()] {
    let mut table = [mix_golden as MixFn; FIBONACCI_WORD.len()];
    let mut r = 0;
    while r < FIBONACCI_WORD.len() {
        if FIBONACCI_WORD[r] == b'B' {
            table[r] = mix_complementary as MixFn;
        }
        r += 1;
    }
    table
}

/// Per-round rotation 4-tuples of the vectorizable profile: the base set is
/// picked by the Fibonacci word and cyclically shifted by
/// `Fibonacci(r mod 12) mod 4`. Uniform across all word groups in a round,
/// which is what keeps the round body lane-parallel.
pub(crate) static NG_ROTATION_SCHEDULE: [[u32; 4]; NG_ROUNDS] = build_ng_schedule();

const fn build_ng_schedule() -> [[u32; 4]; NG_ROUNDS] {
    let mut schedule = [[0u32; 4]; NG_ROUNDS];
    let mut r = 0;
    while r < NG_ROUNDS {
        let base = if NG_FIBONACCI_WORD[r] == b'A' {
            ROTATIONS_A
        } else {
            ROTATIONS_B
        };
        let shift = (FIBONACCI[r % 12] % 4) as usize;
        let mut i = 0;
        while i < 4 {
            schedule[r][i] = base[(i + shift) % 4];
            i += 1;
        }
        r += 1;
    }
    schedule
}

/// Parse a 64-byte block as 16 big-endian words.
#[inline]
fn parse_block(block: &[u8; BLOCK_SIZE]) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    words
}

/// Expand a block into `rounds` message words using quasicrystal rotations
/// and the Penrose-derived Fibonacci factor.
pub(crate) fn expand_table(block: &[u8; BLOCK_SIZE], rounds: usize) -> [u32; 64] {
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(&parse_block(block));
    for i in 16..rounds {
        let rot1 = qc_rotation(i, 0);
        let rot2 = qc_rotation(i, 1);
        let x = w[i - 15];
        let s0 = x.rotate_right(rot1) ^ x.rotate_right(rot1 + 5) ^ (x >> 3);
        let y = w[i - 2];
        let s1 = y.rotate_right(rot2) ^ y.rotate_right(rot2 + 7) ^ (y >> 10);
        let fib = FIBONACCI[penrose_index(i) as usize % 12];
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1)
            .wrapping_add(fib);
    }
    w
}

/// Expand a block into the vectorizable profile's message words using the
/// arithmetic-progression rotations and the direct Fibonacci factor.
pub(crate) fn expand_ng(block: &[u8; BLOCK_SIZE]) -> [u32; NG_ROUNDS] {
    let mut w = [0u32; NG_ROUNDS];
    w[..16].copy_from_slice(&parse_block(block));
    for i in 16..NG_ROUNDS {
        let rot1 = 7 + (i % 5) as u32;
        let rot2 = 17 + (i % 4) as u32;
        let x = w[i - 15];
        let s0 = x.rotate_right(rot1) ^ x.rotate_right(rot1 + 11) ^ (x >> 3);
        let y = w[i - 2];
        let s1 = y.rotate_right(rot2) ^ y.rotate_right(rot2 + 2) ^ (y >> 10);
        let fib = FIBONACCI[i % 12];
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1)
            .wrapping_add(fib);
    }
    w
}
