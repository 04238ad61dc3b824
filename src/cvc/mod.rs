// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Card-verifiable certificates per STB 34.101.79: encoding, verification,
//! and issuance.

use crate::crypto::{CryptoProvider, EntropySource, OsEntropy};
use crate::error::Result;

mod body;
mod check;
mod issue;
mod types;
mod verify;

pub use check::name_is_valid;
pub use types::{Cvc, Date};

/// Outer certificate tag, `SEQ[APPLICATION 33]`.
pub(crate) const TAG_CERT: u32 = 0x7F21;
/// Signature tag, `OCT[APPLICATION 55]`.
pub(crate) const TAG_SIG: u32 = 0x5F37;

/// Certificate engine over an injected cryptography backend and entropy
/// source.
///
/// The engine holds no state between calls; it only carries the
/// collaborators every operation needs.
pub struct CvcEngine<P, E = OsEntropy> {
    provider: P,
    entropy: E,
}

impl<P: CryptoProvider> CvcEngine<P, OsEntropy> {
    /// Creates an engine drawing signing randomness from the OS.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            entropy: OsEntropy,
        }
    }
}

impl<P: CryptoProvider, E: EntropySource> CvcEngine<P, E> {
    /// Creates an engine with an explicit entropy source.
    pub fn with_entropy(provider: P, entropy: E) -> Self {
        Self { provider, entropy }
    }

    /// Validates the semantic invariants of a record: names, dates, date
    /// ordering, and public-key group membership.
    pub fn check(&self, cvc: &Cvc) -> Result<()> {
        check::check(&self.provider, cvc)
    }

    /// Validates `cvc` as a certificate issued by `issuer`: everything
    /// [`check`](Self::check) does, plus the authority/holder link and the
    /// containment of `cvc.from` in the issuer validity interval.
    pub fn check_with_issuer(&self, cvc: &Cvc, issuer: &Cvc) -> Result<()> {
        check::check_with_issuer(&self.provider, cvc, issuer)
    }
}
