//======================================================================
// src/md.rs
// Merkle–Damgård framing on top of the digest core API, plus the
// one-shot convenience functions.
//======================================================================

use core::fmt;
use core::marker::PhantomData;

use alloc::string::String;

use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    HashMarker, Output, Reset,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_SIZE, DIGEST_SIZE, STATE_WORDS};
use crate::variant::{Harmonia32, Harmonia64, HarmoniaNg, HarmoniaVariant};

/// Low-level Merkle–Damgård engine for a HARMONIA profile. Users interact
/// with it through [`CoreWrapper`], which provides buffering and the
/// user-facing [`digest::Digest`] surface.
#[derive(Clone)]
pub struct HarmoniaCore<V: HarmoniaVariant> {
    state_g: [u32; STATE_WORDS],
    state_c: [u32; STATE_WORDS],
    /// Number of blocks compressed so far; the padding suffix needs the
    /// total message bit length.
    block_len: u64,
    _variant: PhantomData<V>,
}

impl<V: HarmoniaVariant> Zeroize for HarmoniaCore<V> {
    fn zeroize(&mut self) {
        self.state_g.zeroize();
        self.state_c.zeroize();
        self.block_len.zeroize();
    }
}

impl<V: HarmoniaVariant> Drop for HarmoniaCore<V> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<V: HarmoniaVariant> ZeroizeOnDrop for HarmoniaCore<V> {}

impl<V: HarmoniaVariant> Default for HarmoniaCore<V> {
    fn default() -> Self {
        Self {
            state_g: V::INITIAL_G,
            state_c: V::INITIAL_C,
            block_len: 0,
            _variant: PhantomData,
        }
    }
}

impl<V: HarmoniaVariant> HashMarker for HarmoniaCore<V> {}

impl<V: HarmoniaVariant> BlockSizeUser for HarmoniaCore<V> {
    type BlockSize = digest::consts::U64;
}

impl<V: HarmoniaVariant> BufferKindUser for HarmoniaCore<V> {
    type BufferKind = Eager;
}

impl<V: HarmoniaVariant> OutputSizeUser for HarmoniaCore<V> {
    type OutputSize = digest::consts::U32;
}

impl<V: HarmoniaVariant> UpdateCore for HarmoniaCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len += blocks.len() as u64;
        for block in blocks {
            let bytes: &[u8; BLOCK_SIZE] = block.as_slice().try_into().unwrap();
            V::compress(&mut self.state_g, &mut self.state_c, bytes);
        }
    }
}

impl<V: HarmoniaVariant> FixedOutputCore for HarmoniaCore<V> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len = 8 * (buffer.get_pos() as u64 + BLOCK_SIZE as u64 * self.block_len);
        let Self { state_g, state_c, .. } = self;
        buffer.len64_padding_be(bit_len, |block| {
            let bytes: &[u8; BLOCK_SIZE] = block.as_slice().try_into().unwrap();
            V::compress(state_g, state_c, bytes);
        });
        out.copy_from_slice(&V::finalize(state_g, state_c));
    }
}

impl<V: HarmoniaVariant> Reset for HarmoniaCore<V> {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl<V: HarmoniaVariant> AlgorithmName for HarmoniaCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: HarmoniaVariant> fmt::Debug for HarmoniaCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)?;
        f.write_str("Core { ... }")
    }
}

/// Hash `data` with profile `V` in one shot.
pub(crate) fn hash<V: HarmoniaVariant>(data: &[u8]) -> [u8; DIGEST_SIZE] {
    use digest::Digest;

    let mut hasher = CoreWrapper::<HarmoniaCore<V>>::new();
    Digest::update(&mut hasher, data);
    hasher.finalize().into()
}

/// Compute the 64-round digest of `data`.
pub fn harmonia64(data: &[u8]) -> [u8; DIGEST_SIZE] {
    hash::<Harmonia64>(data)
}

/// Compute the 64-round digest of `data` as lowercase hex.
pub fn harmonia64_hex(data: &[u8]) -> String {
    hex::encode(harmonia64(data))
}

/// Compute the 32-round digest of `data`.
pub fn harmonia32(data: &[u8]) -> [u8; DIGEST_SIZE] {
    hash::<Harmonia32>(data)
}

/// Compute the 32-round digest of `data` as lowercase hex.
pub fn harmonia32_hex(data: &[u8]) -> String {
    hex::encode(harmonia32(data))
}

/// Compute the HARMONIA-NG digest of `data`.
pub fn harmonia_ng(data: &[u8]) -> [u8; DIGEST_SIZE] {
    hash::<HarmoniaNg>(data)
}

/// Compute the HARMONIA-NG digest of `data` as lowercase hex.
pub fn harmonia_ng_hex(data: &[u8]) -> String {
    hex::encode(harmonia_ng(data))
}
