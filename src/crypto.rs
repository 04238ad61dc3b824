// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Collaborator seams: the external cryptography backend and entropy source.
//!
//! The engine never implements the bign signature scheme or the belt/bash
//! hash functions itself. Callers inject a [`CryptoProvider`] backed by their
//! primitive library of choice; tests inject a deterministic double.

use crate::bign::ParamSet;
use crate::error::Result;

/// External cryptography backend driven by the signature adapter.
///
/// All byte lengths are fixed by `params`: private keys are
/// `params.privkey_len()` octets, public keys `params.pubkey_len()`,
/// signatures `params.sig_len()`, hashes `params.privkey_len()`.
pub trait CryptoProvider {
    /// belt-hash (STB 34.101.31), 256-bit digest.
    fn belt_hash(&self, data: &[u8]) -> [u8; 32];

    /// bash sponge hash (STB 34.101.77) at the 192- or 256-bit security
    /// level, producing a `level / 4` byte digest.
    fn bash_hash(&self, level: usize, data: &[u8]) -> Vec<u8>;

    /// bign signature over a pre-computed hash. `hash_oid_der` is the DER
    /// encoding of the hash algorithm identifier, bound into the signature.
    /// `rand` is either `privkey_len` fresh octets or empty, in which case
    /// the scheme runs deterministically.
    fn bign_sign(
        &self,
        params: ParamSet,
        hash_oid_der: &[u8],
        hash: &[u8],
        privkey: &[u8],
        rand: &[u8],
    ) -> Result<Vec<u8>>;

    /// bign signature verification over a pre-computed hash.
    fn bign_verify(
        &self,
        params: ParamSet,
        hash_oid_der: &[u8],
        hash: &[u8],
        sig: &[u8],
        pubkey: &[u8],
    ) -> Result<()>;

    /// Derives the public key of `privkey`.
    fn bign_calc_pubkey(&self, params: ParamSet, privkey: &[u8]) -> Result<Vec<u8>>;

    /// Validates group membership of `pubkey`.
    fn bign_val_pubkey(&self, params: ParamSet, pubkey: &[u8]) -> Result<()>;

    /// Validates that `privkey` and `pubkey` form a keypair.
    fn bign_val_keypair(&self, params: ParamSet, privkey: &[u8], pubkey: &[u8]) -> Result<()>;
}

/// Source of signing randomness, consulted opportunistically: when not ready
/// the signer falls back to the deterministic mode of the scheme.
pub trait EntropySource {
    /// Reports whether the source can currently produce randomness.
    fn is_ready(&self) -> bool;

    /// Fills `buf` with random octets. Called only after [`is_ready`]
    /// returned true.
    ///
    /// [`is_ready`]: EntropySource::is_ready
    fn fill(&self, buf: &mut [u8]);
}

/// Operating-system entropy via `getrandom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn is_ready(&self) -> bool {
        getrandom::fill(&mut [0u8; 1]).is_ok()
    }

    fn fill(&self, buf: &mut [u8]) {
        getrandom::fill(buf).expect("OS entropy source failed");
    }
}

/// Entropy source that is never ready; selects deterministic signing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEntropy;

impl EntropySource for NoEntropy {
    fn is_ready(&self) -> bool {
        false
    }

    fn fill(&self, _buf: &mut [u8]) {}
}
