// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use super::Cvc;
use crate::bign;
use crate::crypto::CryptoProvider;
use crate::error::{Error, Result};
use der::asn1::PrintableStringRef;

/// Whether `name` is a valid certificate name: 8..=12 characters from the
/// PrintableString alphabet. Content is taken verbatim; no normalization.
pub fn name_is_valid(name: &str) -> bool {
    (8..=12).contains(&name.len()) && PrintableStringRef::new(name).is_ok()
}

/// Semantic validation of a record: names, dates, ordering, public key.
pub(super) fn check<P: CryptoProvider>(provider: &P, cvc: &Cvc) -> Result<()> {
    if !name_is_valid(&cvc.authority) || !name_is_valid(&cvc.holder) {
        return Err(Error::BadName);
    }
    if !cvc.from.is_valid() || !cvc.until.is_valid() || cvc.from > cvc.until {
        return Err(Error::BadDate);
    }
    bign::val_pubkey(provider, &cvc.pubkey)
}

/// Validation of `cvc` against its issuer: the authority must name the
/// issuer and the first day of validity must fall inside the issuer's
/// validity interval.
pub(super) fn check_with_issuer<P: CryptoProvider>(
    provider: &P,
    cvc: &Cvc,
    issuer: &Cvc,
) -> Result<()> {
    check(provider, cvc)?;
    if cvc.authority != issuer.holder {
        return Err(Error::BadName);
    }
    if !issuer.from.is_valid()
        || !issuer.until.is_valid()
        || issuer.from > cvc.from
        || cvc.from > issuer.until
    {
        return Err(Error::BadDate);
    }
    Ok(())
}
