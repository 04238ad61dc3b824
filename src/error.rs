// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use thiserror::Error;

/// Result type used by the certificate APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the certificate engine.
///
/// The first failing check wins; nothing is silently recovered. A non-`Ok`
/// result from a decoding operation means the target record is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A length parameter or collaborator output has an unexpected size.
    #[error("invalid input length or parameter")]
    BadInput,
    /// Authority or holder is not a printable 8..12 character name, or the
    /// child authority does not match the issuer holder.
    #[error("invalid certificate name")]
    BadName,
    /// A date is malformed, the validity interval is inverted, or the child
    /// falls outside the issuer validity.
    #[error("invalid certificate date")]
    BadDate,
    /// A DER tag, length, or structure mismatch while decoding.
    #[error("invalid certificate format")]
    BadFormat,
    /// The public key fails group-membership validation.
    #[error("invalid public key")]
    BadPubkey,
    /// The private and public keys are inconsistent.
    #[error("invalid keypair")]
    BadKeypair,
    /// Signature verification failed.
    #[error("invalid signature")]
    BadSig,
}
