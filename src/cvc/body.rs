// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Codec for the certificate body:
//!
//! ```text
//! SEQ[APPLICATION 78] CertificateBody
//!   SIZE[APPLICATION 41](0)              -- version
//!   PSTR[APPLICATION 2](SIZE(8..12))     -- authority
//!   SEQ[APPLICATION 73] PubKey
//!     OID(bign-pubkey)
//!     BITS(SIZE(512|768|1024))           -- pubkey
//!   PSTR[APPLICATION 32](SIZE(8..12))    -- holder
//!   SEQ[APPLICATION 76] CertHAT OPTIONAL
//!     OID(id-eIdAccess)
//!     OCT(SIZE(5))                       -- eID HAT
//!   OCT[APPLICATION 37](SIZE(6))         -- from
//!   OCT[APPLICATION 36](SIZE(6))         -- until
//!   SEQ[APPLICATION 5] CVExt OPTIONAL
//!     SEQ[APPLICATION 19] DDT
//!       OID(id-eSignAccess)
//!       OCT(SIZE(2))                     -- e-sign HAT
//! ```

use super::{Cvc, Date};
use crate::bign;
use crate::error::{Error, Result};
use crate::internal::der::{self, Reader, TAG_OCT};
use const_oid::ObjectIdentifier;

/// Body tag, `SEQ[APPLICATION 78]`.
const TAG_BODY: u32 = 0x7F4E;
/// Version tag, `SIZE[APPLICATION 41]`.
const TAG_VERSION: u32 = 0x5F29;
/// Authority tag, `PSTR[APPLICATION 2]`.
const TAG_AUTHORITY: u32 = 0x42;
/// Public key block tag, `SEQ[APPLICATION 73]`.
const TAG_PUBKEY: u32 = 0x7F49;
/// Holder tag, `PSTR[APPLICATION 32]`.
const TAG_HOLDER: u32 = 0x5F20;
/// eID HAT block tag, `SEQ[APPLICATION 76]`.
const TAG_HAT_EID: u32 = 0x7F4C;
/// Validity start tag, `OCT[APPLICATION 37]`.
const TAG_FROM: u32 = 0x5F25;
/// Validity end tag, `OCT[APPLICATION 36]`.
const TAG_UNTIL: u32 = 0x5F24;
/// Extensions block tag, `SEQ[APPLICATION 5]`.
const TAG_CVEXT: u32 = 0x65;
/// Discretionary data template tag, `SEQ[APPLICATION 19]`.
const TAG_DDT: u32 = 0x73;

const EID_ACCESS_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.79.6.1");
const ESIGN_ACCESS_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.112.0.2.0.34.101.79.6.2");

/// Encodes the body of a validated record as canonical DER.
///
/// A HAT that is `None` or all-zero is omitted; "all zeros" is the wire
/// form of absence.
pub(super) fn encode(cvc: &Cvc) -> Vec<u8> {
    let mut content = Vec::with_capacity(128 + cvc.pubkey.len());
    der::push_size(&mut content, TAG_VERSION, 0);
    der::push_tlv(&mut content, TAG_AUTHORITY, cvc.authority.as_bytes());

    let mut pubkey = Vec::with_capacity(cvc.pubkey.len() + 16);
    der::push_oid(&mut pubkey, &bign::PUBKEY_OID);
    der::push_bit_string(&mut pubkey, &cvc.pubkey);
    der::push_tlv(&mut content, TAG_PUBKEY, &pubkey);

    der::push_tlv(&mut content, TAG_HOLDER, cvc.holder.as_bytes());

    if let Some(hat) = cvc.hat_eid.filter(|hat| hat.iter().any(|&b| b != 0)) {
        let mut block = Vec::with_capacity(24);
        der::push_oid(&mut block, &EID_ACCESS_OID);
        der::push_tlv(&mut block, TAG_OCT, &hat);
        der::push_tlv(&mut content, TAG_HAT_EID, &block);
    }

    der::push_tlv(&mut content, TAG_FROM, &cvc.from.digits());
    der::push_tlv(&mut content, TAG_UNTIL, &cvc.until.digits());

    if let Some(hat) = cvc.hat_esign.filter(|hat| hat.iter().any(|&b| b != 0)) {
        let mut ddt = Vec::with_capacity(24);
        der::push_oid(&mut ddt, &ESIGN_ACCESS_OID);
        der::push_tlv(&mut ddt, TAG_OCT, &hat);
        der::push_tlv(&mut content, TAG_CVEXT, &der::tlv(TAG_DDT, &ddt));
    }

    der::tlv(TAG_BODY, &content)
}

/// Reads a name field: 8..=12 octets of PrintableString content.
fn read_name(r: &mut Reader<'_>, tag: u32) -> Result<String> {
    let raw = r.read_value(tag)?;
    if !(8..=12).contains(&raw.len()) {
        return Err(Error::BadFormat);
    }
    let name = std::str::from_utf8(raw).map_err(|_| Error::BadFormat)?;
    if !super::check::name_is_valid(name) {
        return Err(Error::BadFormat);
    }
    Ok(name.to_string())
}

/// Reads a date field: exactly six octets.
fn read_date(r: &mut Reader<'_>, tag: u32) -> Result<Date> {
    let raw = r.read_value_exact(tag, 6)?;
    Ok(Date::from_digits(raw.try_into().unwrap()))
}

/// Decodes one certificate body from the reader, leaving the cursor exactly
/// past it. The signature field of the result is empty; an on-wire all-zero
/// HAT decodes as absent.
pub(super) fn decode(r: &mut Reader<'_>) -> Result<Cvc> {
    let mut b = r.read_nested(TAG_BODY)?;

    b.read_size_eq(TAG_VERSION, 0)?;
    let authority = read_name(&mut b, TAG_AUTHORITY)?;

    let mut pk = b.read_nested(TAG_PUBKEY)?;
    pk.read_oid(&bign::PUBKEY_OID)?;
    let pubkey = pk.read_bit_string()?;
    pk.finish()?;
    if !matches!(pubkey.len(), 64 | 96 | 128) {
        return Err(Error::BadFormat);
    }

    let holder = read_name(&mut b, TAG_HOLDER)?;

    let hat_eid = if b.starts_with(TAG_HAT_EID) {
        let mut block = b.read_nested(TAG_HAT_EID)?;
        block.read_oid(&EID_ACCESS_OID)?;
        let hat: [u8; 5] = block.read_value_exact(TAG_OCT, 5)?.try_into().unwrap();
        block.finish()?;
        Some(hat).filter(|hat| hat.iter().any(|&b| b != 0))
    } else {
        None
    };

    let from = read_date(&mut b, TAG_FROM)?;
    let until = read_date(&mut b, TAG_UNTIL)?;

    let hat_esign = if b.starts_with(TAG_CVEXT) {
        let mut ext = b.read_nested(TAG_CVEXT)?;
        let mut ddt = ext.read_nested(TAG_DDT)?;
        ddt.read_oid(&ESIGN_ACCESS_OID)?;
        let hat: [u8; 2] = ddt.read_value_exact(TAG_OCT, 2)?.try_into().unwrap();
        ddt.finish()?;
        ext.finish()?;
        Some(hat).filter(|hat| hat.iter().any(|&b| b != 0))
    } else {
        None
    };

    b.finish()?;

    Ok(Cvc {
        authority,
        holder,
        pubkey: pubkey.to_vec(),
        hat_eid,
        hat_esign,
        from,
        until,
        sig: Vec::new(),
    })
}
