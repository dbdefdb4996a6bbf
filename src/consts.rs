//======================================================================
// src/consts.rs
// Process-wide immutable parameter tables for the HARMONIA family.
//======================================================================

/// Message block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;
/// Digest size in bytes (256 bits).
pub const DIGEST_SIZE: usize = 32;
/// Words per state stream.
pub const STATE_WORDS: usize = 8;

/// Sponge rate in bytes (256 bits).
pub const RATE_BYTES: usize = 32;
/// Sponge capacity in bytes (256 bits).
pub const CAPACITY_BYTES: usize = 32;
/// Rounds of the keyless permutation used by the sponge.
pub const XOF_ROUNDS: usize = 24;

/// Rounds of the vectorizable profile.
pub const NG_ROUNDS: usize = 32;

/// 2^32 / φ, the Weyl increment behind the edge-protection constants.
pub const GOLDEN_GAMMA: u32 = 0x9E3779B9;

/// Golden-ratio derived round constants (Hamming weight ≈ 16).
pub const PHI_CONSTANTS: [u32; 16] = [
    0x9E37605A, 0xDAC1E0F2, 0xF287A338, 0xFA8CFC04,
    0xFD805AA6, 0xCCF29760, 0xFF8184C3, 0xFF850D11,
    0xCC32476B, 0x98767486, 0xFFF82080, 0x30E4E2F3,
    0xFCC3ACC1, 0xE5216F38, 0xF30E4CC9, 0x948395F6,
];

/// Round constants derived from 1/φ.
pub const RECIPROCAL_CONSTANTS: [u32; 16] = [
    0x7249217F, 0x5890EB7C, 0x4786B47C, 0x4C51DBE8,
    0x4E4DA61B, 0x4F76650C, 0x4F2F1A2A, 0x4F6CE289,
    0x4F1ADF40, 0x4E84BABC, 0x4F22D993, 0x497FA704,
    0x4F514F19, 0x4E8F43B8, 0x508E2FD9, 0x4B5F94A4,
];

/// First twelve Fibonacci numbers.
pub const FIBONACCI: [u32; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Fibonacci word selecting the mixer per round in the table-lookup
/// profiles, cycled modulo its length.
pub const FIBONACCI_WORD: &[u8; 31] = b"ABAABABAABAABABAABABAABAABABAAB";

/// Fibonacci word of the vectorizable profile (one entry per round).
pub const NG_FIBONACCI_WORD: &[u8; 32] = b"ABAABABAABAABABAABABAABAABABAABA";

/// Quasicrystal rotation lattice, indexed by (round mod 32, slot mod 10).
pub const QUASICRYSTAL_ROTATIONS: [[u8; 10]; 32] = [
    [14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    [8, 4, 1, 13, 6, 10, 15, 19, 4, 9],
    [3, 19, 16, 8, 17, 2, 5, 18, 14, 5],
    [11, 11, 17, 4, 15, 8, 19, 10, 6, 15],
    [17, 1, 20, 14, 5, 21, 9, 2, 16, 7],
    [6, 16, 7, 18, 11, 1, 12, 21, 13, 2],
    [2, 21, 12, 1, 11, 18, 7, 16, 6, 17],
    [19, 8, 15, 4, 17, 11, 11, 5, 14, 20],
    [9, 4, 19, 15, 10, 6, 2, 17, 8, 16],
    [4, 15, 10, 6, 19, 8, 17, 2, 5, 18],
    [15, 5, 18, 2, 17, 8, 19, 6, 10, 15],
    [21, 14, 5, 17, 8, 16, 3, 19, 14, 3],
    [7, 16, 2, 21, 9, 5, 14, 20, 1, 17],
    [1, 6, 17, 7, 18, 12, 1, 11, 21, 13],
    [13, 21, 11, 1, 12, 18, 7, 17, 6, 2],
    [18, 10, 6, 15, 4, 19, 8, 15, 17, 11],
    [9, 4, 19, 15, 10, 6, 2, 17, 8, 16],
    [4, 15, 10, 19, 6, 8, 17, 2, 5, 18],
    [15, 5, 18, 2, 17, 8, 6, 19, 10, 15],
    [21, 14, 5, 17, 8, 16, 3, 19, 14, 3],
    [7, 16, 2, 21, 9, 5, 14, 1, 20, 17],
    [1, 6, 17, 7, 12, 18, 1, 11, 21, 13],
    [13, 21, 11, 1, 12, 18, 7, 17, 6, 16],
    [5, 18, 10, 6, 15, 4, 8, 19, 17, 11],
    [9, 19, 4, 15, 10, 6, 2, 17, 8, 16],
    [18, 4, 15, 10, 6, 19, 8, 2, 17, 5],
    [15, 18, 5, 2, 17, 8, 19, 6, 10, 15],
    [3, 21, 14, 5, 8, 17, 16, 3, 14, 19],
    [17, 7, 16, 2, 21, 9, 5, 14, 20, 1],
    [13, 1, 6, 17, 7, 18, 12, 1, 21, 11],
    [2, 13, 21, 11, 1, 12, 7, 18, 6, 17],
    [11, 18, 10, 6, 15, 4, 19, 8, 17, 15],
];

/// Penrose tiling index `((⌊n·φ⌋ mod 256) ⊕ (⌊n·φ²⌋ mod 256)) mod 32`,
/// tabulated for every `n` the callers produce (all stay below 256).
pub const PENROSE: [u8; 256] = [
    0, 3, 6, 3, 12, 5, 6, 25, 24, 25, 10, 13, 12, 23, 18, 31,
    16, 23, 18, 15, 20, 23, 26, 25, 24, 9, 14, 13, 4, 5, 30, 3,
    0, 3, 14, 3, 4, 27, 30, 25, 8, 9, 14, 21, 20, 29, 18, 23,
    16, 15, 18, 23, 28, 31, 26, 23, 8, 9, 10, 5, 28, 29, 6, 1,
    0, 3, 6, 3, 28, 27, 6, 11, 8, 9, 22, 29, 28, 21, 18, 17,
    16, 23, 18, 31, 28, 23, 10, 15, 8, 25, 26, 29, 4, 5, 14, 1,
    0, 1, 30, 3, 4, 11, 14, 11, 24, 27, 30, 21, 20, 13, 14, 17,
    16, 17, 18, 23, 20, 15, 10, 23, 24, 31, 26, 5, 12, 13, 2, 1,
    0, 1, 6, 5, 12, 11, 6, 27, 24, 27, 22, 11, 12, 21, 22, 17,
    16, 17, 18, 13, 12, 23, 26, 31, 24, 7, 10, 15, 4, 5, 2, 1,
    0, 1, 14, 13, 4, 5, 30, 27, 24, 11, 14, 11, 20, 19, 30, 17,
    16, 17, 18, 21, 20, 29, 26, 23, 8, 15, 10, 7, 28, 31, 2, 1,
    0, 1, 2, 5, 28, 29, 6, 9, 8, 11, 22, 27, 28, 19, 22, 19,
    16, 17, 22, 29, 28, 21, 10, 9, 8, 7, 26, 31, 28, 7, 2, 15,
    0, 1, 2, 29, 4, 5, 14, 9, 8, 27, 30, 27, 20, 19, 14, 19,
    16, 19, 30, 21, 20, 13, 10, 9, 24, 25, 26, 7, 4, 15, 2, 7,
];

/// Base rotation set for intensive (type A) rounds.
pub const ROTATIONS_A: [u32; 4] = [7, 12, 8, 16];
/// Base rotation set for light (type B) rounds.
pub const ROTATIONS_B: [u32; 4] = [5, 11, 9, 13];

/// Initial golden-stream state of the vectorizable profile.
pub const NG_INITIAL_G: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A,
    0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

/// Initial complementary-stream state of the vectorizable profile.
pub const NG_INITIAL_C: [u32; 8] = [
    0x9E3779B9, 0x7F4A7C15, 0xF39CC060, 0x5CEDC834,
    0x2FE12A6D, 0x4786B47C, 0xC8A5E2F0, 0x3A8D6B7F,
];

/// Fixed edge-protection rotations of the vectorizable profile.
pub const EDGE_ROT_LEFT: u32 = 7;
pub const EDGE_ROT_RIGHT: u32 = 13;

/// Fixed cross-stream rotation of the vectorizable profile.
pub const CROSS_STREAM_ROT: u32 = 11;

/// First eight entries of a 16-entry constant table.
pub(crate) const fn first_half(table: &[u32; 16]) -> [u32; 8] {
    [
        table[0], table[1], table[2], table[3],
        table[4], table[5], table[6], table[7],
    ]
}
