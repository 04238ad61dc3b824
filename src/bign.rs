// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! bign (STB 34.101.45) parameter selection and signing driver.
//!
//! Every cryptographic choice in a CVC — curve, hash algorithm, hash OID,
//! signature length — follows from a single integer, the key length. This
//! module holds that table and drives the external [`CryptoProvider`] with
//! the selected parameters.

use crate::crypto::{CryptoProvider, EntropySource};
use crate::error::{Error, Result};
use crate::internal::der;
use const_oid::ObjectIdentifier;
use zeroize::Zeroizing;

/// OID identifying bign public keys inside a certificate body.
pub const PUBKEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.45.2.1");

const CURVE256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.45.3.1");
const CURVE384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.45.3.2");
const CURVE512_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.45.3.3");

const BELT_HASH_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.31.81");
const BASH384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.77.12");
const BASH512_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.77.13");

/// Standard bign parameter set, selected from a key length.
///
/// | set | privkey | pubkey | sig | hash |
/// |---|---|---|---|---|
/// | `Curve256v1` | 32 | 64 | 48 | belt-hash |
/// | `Curve384v1` | 48 | 96 | 72 | bash-384 |
/// | `Curve512v1` | 64 | 128 | 96 | bash-512 |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamSet {
    Curve256v1,
    Curve384v1,
    Curve512v1,
}

impl ParamSet {
    /// Selects the parameter set for a 32/48/64 byte private key.
    pub fn from_privkey_len(len: usize) -> Option<Self> {
        match len {
            32 => Some(Self::Curve256v1),
            48 => Some(Self::Curve384v1),
            64 => Some(Self::Curve512v1),
            _ => None,
        }
    }

    /// Selects the parameter set for a 64/96/128 byte public key.
    pub fn from_pubkey_len(len: usize) -> Option<Self> {
        match len {
            64 => Some(Self::Curve256v1),
            96 => Some(Self::Curve384v1),
            128 => Some(Self::Curve512v1),
            _ => None,
        }
    }

    /// OID of the standard curve parameters.
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            Self::Curve256v1 => CURVE256_OID,
            Self::Curve384v1 => CURVE384_OID,
            Self::Curve512v1 => CURVE512_OID,
        }
    }

    /// OID of the hash algorithm bound into signatures under this set.
    pub const fn hash_oid(self) -> ObjectIdentifier {
        match self {
            Self::Curve256v1 => BELT_HASH_OID,
            Self::Curve384v1 => BASH384_OID,
            Self::Curve512v1 => BASH512_OID,
        }
    }

    /// Private key length in octets.
    pub const fn privkey_len(self) -> usize {
        match self {
            Self::Curve256v1 => 32,
            Self::Curve384v1 => 48,
            Self::Curve512v1 => 64,
        }
    }

    /// Public key length in octets, `2 * privkey_len`.
    pub const fn pubkey_len(self) -> usize {
        2 * self.privkey_len()
    }

    /// Signature length in octets, `privkey_len + privkey_len / 2`.
    pub const fn sig_len(self) -> usize {
        self.privkey_len() + self.privkey_len() / 2
    }
}

/// Hashes `data` with the hash family of the parameter set.
fn hash<P: CryptoProvider>(provider: &P, params: ParamSet, data: &[u8]) -> Vec<u8> {
    match params {
        ParamSet::Curve256v1 => provider.belt_hash(data).to_vec(),
        ParamSet::Curve384v1 => provider.bash_hash(192, data),
        ParamSet::Curve512v1 => provider.bash_hash(256, data),
    }
}

/// DER encoding of the hash algorithm identifier, 11 octets for every set.
fn hash_oid_der(params: ParamSet) -> Vec<u8> {
    let enc = der::oid_tlv(&params.hash_oid());
    debug_assert_eq!(enc.len(), 11);
    enc
}

/// Signs `body` under `privkey`, drawing randomness when the source is
/// ready. Returns exactly `params.sig_len()` octets.
pub(crate) fn sign<P: CryptoProvider, E: EntropySource>(
    provider: &P,
    entropy: &E,
    params: ParamSet,
    body: &[u8],
    privkey: &[u8],
) -> Result<Vec<u8>> {
    debug_assert_eq!(privkey.len(), params.privkey_len());
    let digest = hash(provider, params, body);
    let oid = hash_oid_der(params);

    let mut rand = Zeroizing::new(Vec::new());
    if entropy.is_ready() {
        rand.resize(params.privkey_len(), 0);
        entropy.fill(&mut rand);
    }

    let sig = provider.bign_sign(params, &oid, &digest, privkey, &rand)?;
    if sig.len() != params.sig_len() {
        return Err(Error::BadInput);
    }
    Ok(sig)
}

/// Verifies `sig` over `body` under `pubkey`; the parameter set follows from
/// the public key length.
pub(crate) fn verify<P: CryptoProvider>(
    provider: &P,
    body: &[u8],
    sig: &[u8],
    pubkey: &[u8],
) -> Result<()> {
    let params = ParamSet::from_pubkey_len(pubkey.len()).ok_or(Error::BadInput)?;
    let digest = hash(provider, params, body);
    let oid = hash_oid_der(params);
    provider.bign_val_pubkey(params, pubkey)?;
    provider
        .bign_verify(params, &oid, &digest, sig, pubkey)
        .map_err(|_| Error::BadSig)
}

/// Derives the public key of `privkey`. Returns `2 * privkey.len()` octets.
pub(crate) fn calc_pubkey<P: CryptoProvider>(provider: &P, privkey: &[u8]) -> Result<Vec<u8>> {
    let params = ParamSet::from_privkey_len(privkey.len()).ok_or(Error::BadInput)?;
    let pubkey = provider.bign_calc_pubkey(params, privkey)?;
    if pubkey.len() != params.pubkey_len() {
        return Err(Error::BadInput);
    }
    Ok(pubkey)
}

/// Validates group membership of `pubkey`.
pub(crate) fn val_pubkey<P: CryptoProvider>(provider: &P, pubkey: &[u8]) -> Result<()> {
    let params = ParamSet::from_pubkey_len(pubkey.len()).ok_or(Error::BadInput)?;
    provider.bign_val_pubkey(params, pubkey)
}

/// Validates that `privkey` and `pubkey` form a keypair.
pub(crate) fn val_keypair<P: CryptoProvider>(
    provider: &P,
    privkey: &[u8],
    pubkey: &[u8],
) -> Result<()> {
    let params = ParamSet::from_privkey_len(privkey.len()).ok_or(Error::BadInput)?;
    if pubkey.len() != params.pubkey_len() {
        return Err(Error::BadKeypair);
    }
    provider.bign_val_keypair(params, privkey, pubkey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NoEntropy;
    use crate::testutil::{privkey, StubProvider};

    #[test]
    fn test_param_selection_by_length() {
        assert_eq!(ParamSet::from_privkey_len(32), Some(ParamSet::Curve256v1));
        assert_eq!(ParamSet::from_privkey_len(48), Some(ParamSet::Curve384v1));
        assert_eq!(ParamSet::from_privkey_len(64), Some(ParamSet::Curve512v1));
        assert_eq!(ParamSet::from_privkey_len(33), None);
        assert_eq!(ParamSet::from_pubkey_len(64), Some(ParamSet::Curve256v1));
        assert_eq!(ParamSet::from_pubkey_len(96), Some(ParamSet::Curve384v1));
        assert_eq!(ParamSet::from_pubkey_len(128), Some(ParamSet::Curve512v1));
        assert_eq!(ParamSet::from_pubkey_len(0), None);
    }

    #[test]
    fn test_param_lengths() {
        for params in [
            ParamSet::Curve256v1,
            ParamSet::Curve384v1,
            ParamSet::Curve512v1,
        ] {
            assert_eq!(params.pubkey_len(), 2 * params.privkey_len());
            assert_eq!(
                params.sig_len(),
                params.pubkey_len() - params.pubkey_len() / 4
            );
        }
        assert_eq!(ParamSet::Curve256v1.sig_len(), 48);
        assert_eq!(ParamSet::Curve384v1.sig_len(), 72);
        assert_eq!(ParamSet::Curve512v1.sig_len(), 96);
    }

    #[test]
    fn test_param_oids() {
        assert_eq!(
            ParamSet::Curve256v1.oid().to_string(),
            "1.2.112.0.2.0.34.101.45.3.1"
        );
        assert_eq!(
            ParamSet::Curve512v1.hash_oid().to_string(),
            "1.2.112.0.2.0.34.101.77.13"
        );
    }

    /// The DER-encoded hash identifier is 11 octets for every parameter set.
    #[test]
    fn test_hash_oid_der_length() {
        for params in [
            ParamSet::Curve256v1,
            ParamSet::Curve384v1,
            ParamSet::Curve512v1,
        ] {
            assert_eq!(hash_oid_der(params).len(), 11);
        }
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        for len in [32, 48, 64] {
            let params = ParamSet::from_privkey_len(len).unwrap();
            let key = privkey(len, 0xA7);
            let pubkey = calc_pubkey(&StubProvider, &key).unwrap();

            let sig = sign(&StubProvider, &NoEntropy, params, b"certificate body", &key).unwrap();
            assert_eq!(sig.len(), params.sig_len());
            verify(&StubProvider, b"certificate body", &sig, &pubkey).unwrap();
            assert_eq!(
                verify(&StubProvider, b"other body", &sig, &pubkey),
                Err(Error::BadSig)
            );
        }
    }

    #[test]
    fn test_verify_rejects_cross_key() {
        let key_a = privkey(32, 1);
        let key_b = privkey(32, 2);
        let pub_b = calc_pubkey(&StubProvider, &key_b).unwrap();
        let sig = sign(
            &StubProvider,
            &NoEntropy,
            ParamSet::Curve256v1,
            b"body",
            &key_a,
        )
        .unwrap();
        assert_eq!(
            verify(&StubProvider, b"body", &sig, &pub_b),
            Err(Error::BadSig)
        );
    }

    #[test]
    fn test_calc_pubkey_lengths() {
        for len in [32, 48, 64] {
            assert_eq!(
                calc_pubkey(&StubProvider, &privkey(len, 3)).unwrap().len(),
                2 * len
            );
        }
        assert_eq!(
            calc_pubkey(&StubProvider, &privkey(40, 3)),
            Err(Error::BadInput)
        );
    }

    #[test]
    fn test_val_pubkey_rejects_bad_length() {
        assert_eq!(
            val_pubkey(&StubProvider, &[0x11; 65]),
            Err(Error::BadInput)
        );
    }

    #[test]
    fn test_val_keypair() {
        let key = privkey(48, 9);
        let pubkey = calc_pubkey(&StubProvider, &key).unwrap();
        val_keypair(&StubProvider, &key, &pubkey).unwrap();

        assert_eq!(
            val_keypair(&StubProvider, &key, &pubkey[..64]),
            Err(Error::BadKeypair)
        );
        let other = calc_pubkey(&StubProvider, &privkey(48, 10)).unwrap();
        assert_eq!(
            val_keypair(&StubProvider, &key, &other),
            Err(Error::BadKeypair)
        );
    }
}
