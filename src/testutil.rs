// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Deterministic cryptography double for tests.
//!
//! The wire codec and the validation chain are the subject under test, not
//! the signature scheme, so the provider is replaced by SHA-256 expansion
//! streams: public keys are derived from private keys, signatures are keyed
//! by the public key, the hash OID, and the digest. Verification against a
//! different key therefore fails exactly like the real scheme, while every
//! output stays reproducible.

use crate::bign::ParamSet;
use crate::crypto::{CryptoProvider, EntropySource, NoEntropy};
use crate::cvc::{Cvc, CvcEngine, Date};
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

/// Expands `parts` into `out_len` bytes of a domain-separated SHA-256 stream.
fn stream(domain: &str, parts: &[&[u8]], out_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(out_len + 32);
    let mut counter = 0u32;
    while out.len() < out_len {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(counter.to_be_bytes());
        for part in parts {
            hasher.update((part.len() as u64).to_be_bytes());
            hasher.update(part);
        }
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(out_len);
    out
}

/// Deterministic stand-in for the external bign/belt/bash backend.
pub(crate) struct StubProvider;

impl CryptoProvider for StubProvider {
    fn belt_hash(&self, data: &[u8]) -> [u8; 32] {
        stream("belt", &[data], 32).try_into().unwrap()
    }

    fn bash_hash(&self, level: usize, data: &[u8]) -> Vec<u8> {
        stream("bash", &[&level.to_be_bytes(), data], level / 4)
    }

    fn bign_sign(
        &self,
        params: ParamSet,
        hash_oid_der: &[u8],
        hash: &[u8],
        privkey: &[u8],
        _rand: &[u8],
    ) -> Result<Vec<u8>> {
        let pubkey = self.bign_calc_pubkey(params, privkey)?;
        Ok(stream("sig", &[&pubkey, hash_oid_der, hash], params.sig_len()))
    }

    fn bign_verify(
        &self,
        params: ParamSet,
        hash_oid_der: &[u8],
        hash: &[u8],
        sig: &[u8],
        pubkey: &[u8],
    ) -> Result<()> {
        let expected = stream("sig", &[pubkey, hash_oid_der, hash], params.sig_len());
        if sig == expected.as_slice() {
            Ok(())
        } else {
            Err(Error::BadSig)
        }
    }

    fn bign_calc_pubkey(&self, params: ParamSet, privkey: &[u8]) -> Result<Vec<u8>> {
        if privkey.len() != params.privkey_len() {
            return Err(Error::BadInput);
        }
        Ok(stream("pub", &[privkey], params.pubkey_len()))
    }

    fn bign_val_pubkey(&self, params: ParamSet, pubkey: &[u8]) -> Result<()> {
        if pubkey.len() != params.pubkey_len() {
            return Err(Error::BadInput);
        }
        // the double's stand-in for group membership: the zero point is out
        if pubkey.iter().all(|&b| b == 0) {
            return Err(Error::BadPubkey);
        }
        Ok(())
    }

    fn bign_val_keypair(&self, params: ParamSet, privkey: &[u8], pubkey: &[u8]) -> Result<()> {
        if self.bign_calc_pubkey(params, privkey)? != pubkey {
            return Err(Error::BadKeypair);
        }
        Ok(())
    }
}

/// Entropy stub yielding a fixed byte pattern.
pub(crate) struct FixedEntropy(pub u8);

impl EntropySource for FixedEntropy {
    fn is_ready(&self) -> bool {
        true
    }

    fn fill(&self, buf: &mut [u8]) {
        buf.fill(self.0);
    }
}

/// Engine over the deterministic double, without entropy.
pub(crate) fn engine() -> CvcEngine<StubProvider, NoEntropy> {
    CvcEngine::with_entropy(StubProvider, NoEntropy)
}

/// Private key fixture of the given length.
pub(crate) fn privkey(len: usize, seed: u8) -> Vec<u8> {
    vec![seed; len]
}

/// A well-formed record without public key or signature material.
pub(crate) fn sample_cvc() -> Cvc {
    Cvc {
        authority: "BYCA0000".to_string(),
        holder: "BYCA0001".to_string(),
        from: Date::from_digits([1, 9, 0, 1, 0, 1]),
        until: Date::from_digits([2, 9, 1, 2, 3, 1]),
        ..Cvc::default()
    }
}
