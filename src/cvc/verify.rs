// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use super::{body, check, Cvc, CvcEngine, TAG_CERT, TAG_SIG};
use crate::bign::{self, ParamSet};
use crate::crypto::{CryptoProvider, EntropySource};
use crate::error::{Error, Result};
use crate::internal::der::Reader;

impl<P: CryptoProvider, E: EntropySource> CvcEngine<P, E> {
    /// Decodes a DER-encoded certificate back into a record.
    ///
    /// With `pubkey` supplied, the signature is verified over the encoded
    /// body and the signature length follows from the key length. Without
    /// it, the length is inferred from the wire (48, 72, or 96 octets) and
    /// the signature is taken on trust.
    ///
    /// The recovered record always passes [`check`](Self::check); on any
    /// error nothing is returned.
    pub fn unwrap(&self, cert: &[u8], pubkey: Option<&[u8]>) -> Result<Cvc> {
        if let Some(pk) = pubkey {
            ParamSet::from_pubkey_len(pk.len()).ok_or(Error::BadInput)?;
        }

        let mut outer = Reader::new(cert);
        let mut content = outer.read_nested(TAG_CERT)?;
        outer.finish()?;

        let body_start = content.pos();
        let mut cvc = body::decode(&mut content)?;
        let signed = content.consumed_since(body_start);

        let sig_len = match pubkey {
            Some(pk) => pk.len() - pk.len() / 4,
            None => content
                .peek_len(TAG_SIG)
                .filter(|&len| matches!(len, 48 | 72 | 96))
                .ok_or(Error::BadFormat)?,
        };
        cvc.sig = content.read_value_exact(TAG_SIG, sig_len)?.to_vec();

        if let Some(pk) = pubkey {
            bign::verify(&self.provider, signed, &cvc.sig, pk)?;
        }
        content.finish()?;

        check::check(&self.provider, &cvc)?;
        Ok(cvc)
    }
}
