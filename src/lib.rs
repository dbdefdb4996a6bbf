#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "simd", feature(portable_simd))]
#![no_std]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: module wiring and the public API surface.
//======================================================================

extern crate alloc;

pub mod consts;

mod backends;
mod compress;
mod mix;
mod schedule;

pub mod variant;
pub use crate::variant::{Harmonia32, Harmonia64, HarmoniaNg, HarmoniaVariant};

mod md;
pub use crate::md::{
    harmonia32, harmonia32_hex, harmonia64, harmonia64_hex, harmonia_ng, harmonia_ng_hex,
    HarmoniaCore,
};

pub mod sponge;
pub use crate::sponge::{hash_xof, hash_xof_hex, HarmoniaXof, InvalidState};

// --- Test Module ---
#[cfg(test)]
mod tests;

pub use digest;

// --- Convenience Type Aliases for Users ---

/// Streaming hasher for the 64-round profile.
pub type Harmonia64Hasher = digest::core_api::CoreWrapper<HarmoniaCore<Harmonia64>>;
/// Streaming hasher for the 32-round profile.
pub type Harmonia32Hasher = digest::core_api::CoreWrapper<HarmoniaCore<Harmonia32>>;
/// Streaming hasher for the vectorizable profile.
pub type HarmoniaNgHasher = digest::core_api::CoreWrapper<HarmoniaCore<HarmoniaNg>>;
