//======================================================================
// src/sponge.rs
// The extendable-output function: an absorb/squeeze state machine over
// the keyless 24-round permutation, rate/capacity 32/32 bytes.
//======================================================================

use core::fmt;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::permute;
use crate::consts::{RATE_BYTES, STATE_WORDS, XOF_ROUNDS};

/// Sponge phase. The transition to `Squeezing` happens on the first
/// squeeze and is irreversible.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Absorbing,
    Squeezing,
}

/// Error returned when [`HarmoniaXof::absorb`] is called after squeezing
/// has started. The instance is unusable for further absorption; create a
/// new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidState;

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("absorb called after squeezing started")
    }
}

impl core::error::Error for InvalidState {}

/// HARMONIA sponge XOF.
///
/// ```
/// use harmonia::HarmoniaXof;
///
/// let mut xof = HarmoniaXof::new();
/// xof.absorb(b"data").unwrap();
/// let first = xof.squeeze(16);
/// let second = xof.squeeze(16);
/// assert_eq!([first, second].concat(), {
///     let mut whole = HarmoniaXof::new();
///     whole.absorb(b"data").unwrap();
///     whole.squeeze(32)
/// });
/// ```
#[derive(Clone)]
pub struct HarmoniaXof {
    /// Rate half of the state: absorbed into and squeezed from.
    rate: [u32; STATE_WORDS],
    /// Capacity half: never exposed.
    capacity: [u32; STATE_WORDS],
    /// Partially filled input block.
    input: [u8; RATE_BYTES],
    input_len: usize,
    /// Squeezed bytes not yet handed out.
    pending: [u8; RATE_BYTES],
    pending_pos: usize,
    pending_len: usize,
    phase: Phase,
}

impl Default for HarmoniaXof {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmoniaXof {
    /// Create an empty sponge in the absorbing phase.
    pub const fn new() -> Self {
        Self {
            rate: [0; STATE_WORDS],
            capacity: [0; STATE_WORDS],
            input: [0; RATE_BYTES],
            input_len: 0,
            pending: [0; RATE_BYTES],
            pending_pos: 0,
            pending_len: 0,
            phase: Phase::Absorbing,
        }
    }

    fn absorb_block(&mut self, block: &[u8; RATE_BYTES]) {
        for (word, chunk) in self.rate.iter_mut().zip(block.chunks_exact(4)) {
            *word ^= u32::from_be_bytes(chunk.try_into().unwrap());
        }
        permute(&mut self.rate, &mut self.capacity, XOF_ROUNDS);
    }

    fn absorb_bytes(&mut self, data: &[u8]) {
        let mut rest = data;
        if self.input_len > 0 {
            let take = (RATE_BYTES - self.input_len).min(rest.len());
            self.input[self.input_len..self.input_len + take].copy_from_slice(&rest[..take]);
            self.input_len += take;
            rest = &rest[take..];
            if self.input_len == RATE_BYTES {
                let block = self.input;
                self.absorb_block(&block);
                self.input_len = 0;
            }
        }
        while rest.len() >= RATE_BYTES {
            let block: &[u8; RATE_BYTES] = rest[..RATE_BYTES].try_into().unwrap();
            self.absorb_block(block);
            rest = &rest[RATE_BYTES..];
        }
        if !rest.is_empty() {
            self.input[..rest.len()].copy_from_slice(rest);
            self.input_len = rest.len();
        }
    }

    /// Absorb `data`, chainable. Fails with [`InvalidState`] once squeezing
    /// has started.
    pub fn absorb(&mut self, data: &[u8]) -> Result<&mut Self, InvalidState> {
        if self.phase == Phase::Squeezing {
            return Err(InvalidState);
        }
        self.absorb_bytes(data);
        Ok(self)
    }

    /// Pad and absorb the final block, then flip to the squeezing phase.
    /// Idempotent.
    fn finalize_absorb(&mut self) {
        if self.phase == Phase::Squeezing {
            return;
        }
        let mut block = self.input;
        if RATE_BYTES - self.input_len == 1 {
            // Exactly one byte of room: domain separator and terminator
            // collapse into one byte.
            block[self.input_len] = 0x9F;
        } else {
            block[self.input_len] = 0x1F;
            for byte in &mut block[self.input_len + 1..RATE_BYTES - 1] {
                *byte = 0;
            }
            block[RATE_BYTES - 1] = 0x80;
        }
        self.absorb_block(&block);
        self.input = [0; RATE_BYTES];
        self.input_len = 0;
        self.phase = Phase::Squeezing;
    }

    /// Serialize the rate half and advance the state.
    fn emit_block(&mut self) -> [u8; RATE_BYTES] {
        let mut block = [0u8; RATE_BYTES];
        for (chunk, word) in block.chunks_exact_mut(4).zip(&self.rate) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        permute(&mut self.rate, &mut self.capacity, XOF_ROUNDS);
        block
    }

    /// Squeeze exactly `out.len()` bytes. The first call transitions the
    /// sponge to the squeezing phase; output is resumable across calls.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.finalize_absorb();

        let mut filled = 0;
        let buffered = self.pending_len - self.pending_pos;
        if buffered > 0 {
            let take = buffered.min(out.len());
            out[..take].copy_from_slice(&self.pending[self.pending_pos..self.pending_pos + take]);
            self.pending_pos += take;
            filled = take;
        }

        while filled < out.len() {
            let block = self.emit_block();
            let take = RATE_BYTES.min(out.len() - filled);
            out[filled..filled + take].copy_from_slice(&block[..take]);
            filled += take;
            if take < RATE_BYTES {
                self.pending = block;
                self.pending_pos = take;
                self.pending_len = RATE_BYTES;
            }
        }
    }

    /// Squeeze `n` bytes.
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.squeeze_into(&mut out);
        out
    }
}

impl Zeroize for HarmoniaXof {
    fn zeroize(&mut self) {
        self.rate.zeroize();
        self.capacity.zeroize();
        self.input.zeroize();
        self.input_len = 0;
        self.pending.zeroize();
        self.pending_pos = 0;
        self.pending_len = 0;
    }
}

impl Drop for HarmoniaXof {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for HarmoniaXof {}

impl fmt::Debug for HarmoniaXof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarmoniaXof")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Absorb `data` and squeeze `output_len` bytes in one shot.
pub fn hash_xof(data: &[u8], output_len: usize) -> Vec<u8> {
    let mut xof = HarmoniaXof::new();
    xof.absorb_bytes(data);
    xof.squeeze(output_len)
}

/// [`hash_xof`] with lowercase hex output.
pub fn hash_xof_hex(data: &[u8], output_len: usize) -> String {
    hex::encode(hash_xof(data, output_len))
}
