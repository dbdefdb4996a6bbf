//======================================================================
// src/variant.rs
// The family trait and its three fixed-output profiles.
//======================================================================

use crate::compress::{compress_ng, compress_table, finalize_ng, finalize_table};
use crate::consts::{
    first_half, BLOCK_SIZE, DIGEST_SIZE, NG_INITIAL_C, NG_INITIAL_G, NG_ROUNDS, PHI_CONSTANTS,
    RECIPROCAL_CONSTANTS, STATE_WORDS,
};

/// Core trait for the HARMONIA profiles. A profile fixes the round count,
/// the initial dual state and the round-body shape; the Merkle–Damgård
/// framing in [`crate::md`] is generic over it.
pub trait HarmoniaVariant: Sized + Clone {
    /// Rounds per compressed block.
    const ROUNDS: usize;

    /// Human-readable algorithm name.
    const NAME: &'static str;

    /// Initial golden-stream state.
    const INITIAL_G: [u32; STATE_WORDS];
    /// Initial complementary-stream state.
    const INITIAL_C: [u32; STATE_WORDS];

    /// Compress one 64-byte block into the dual state.
    fn compress(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]);

    /// Fuse the final dual state into a digest.
    fn finalize(g: &[u32; STATE_WORDS], c: &[u32; STATE_WORDS]) -> [u8; DIGEST_SIZE];
}

/// 64-round profile with quasicrystal table scheduling.
#[derive(Clone)]
pub struct Harmonia64;

impl HarmoniaVariant for Harmonia64 {
    const ROUNDS: usize = 64;
    const NAME: &'static str = "Harmonia-64";
    const INITIAL_G: [u32; STATE_WORDS] = first_half(&PHI_CONSTANTS);
    const INITIAL_C: [u32; STATE_WORDS] = first_half(&RECIPROCAL_CONSTANTS);

    fn compress(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
        compress_table(g, c, block, Self::ROUNDS);
    }

    fn finalize(g: &[u32; STATE_WORDS], c: &[u32; STATE_WORDS]) -> [u8; DIGEST_SIZE] {
        finalize_table(g, c, Self::ROUNDS)
    }
}

/// 32-round profile with quasicrystal table scheduling, for workloads where
/// throughput matters more than the maximum security margin.
#[derive(Clone)]
pub struct Harmonia32;

impl HarmoniaVariant for Harmonia32 {
    const ROUNDS: usize = 32;
    const NAME: &'static str = "Harmonia-32";
    const INITIAL_G: [u32; STATE_WORDS] = first_half(&PHI_CONSTANTS);
    const INITIAL_C: [u32; STATE_WORDS] = first_half(&RECIPROCAL_CONSTANTS);

    fn compress(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
        compress_table(g, c, block, Self::ROUNDS);
    }

    fn finalize(g: &[u32; STATE_WORDS], c: &[u32; STATE_WORDS]) -> [u8; DIGEST_SIZE] {
        finalize_table(g, c, Self::ROUNDS)
    }
}

/// 32-round vectorizable profile: fixed per-round rotation schedule and
/// ChaCha-style quarter-rounds.
#[derive(Clone)]
pub struct HarmoniaNg;

impl HarmoniaVariant for HarmoniaNg {
    const ROUNDS: usize = NG_ROUNDS;
    const NAME: &'static str = "Harmonia-NG";
    const INITIAL_G: [u32; STATE_WORDS] = NG_INITIAL_G;
    const INITIAL_C: [u32; STATE_WORDS] = NG_INITIAL_C;

    fn compress(g: &mut [u32; STATE_WORDS], c: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
        compress_ng(g, c, block);
    }

    fn finalize(g: &[u32; STATE_WORDS], c: &[u32; STATE_WORDS]) -> [u8; DIGEST_SIZE] {
        finalize_ng(g, c)
    }
}
