// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use super::{body, check, Cvc, CvcEngine, TAG_CERT, TAG_SIG};
use crate::bign::{self, ParamSet};
use crate::crypto::{CryptoProvider, EntropySource};
use crate::error::{Error, Result};
use crate::internal::der;

impl<P: CryptoProvider, E: EntropySource> CvcEngine<P, E> {
    /// Signs `cvc` under `privkey` and returns the DER-encoded certificate.
    ///
    /// An empty `cvc.pubkey` is first materialized from the private key.
    /// On success `cvc.sig` holds the fresh signature:
    ///
    /// ```text
    /// SEQ[APPLICATION 33] CVCertificate
    ///   SEQ[APPLICATION 78] CertificateBody
    ///   OCT[APPLICATION 55](SIZE(48|72|96)) -- sig
    /// ```
    pub fn wrap(&self, cvc: &mut Cvc, privkey: &[u8]) -> Result<Vec<u8>> {
        let params = ParamSet::from_privkey_len(privkey.len()).ok_or(Error::BadInput)?;
        if cvc.pubkey.is_empty() {
            cvc.pubkey = bign::calc_pubkey(&self.provider, privkey)?;
        }
        check::check(&self.provider, cvc)?;

        let mut content = body::encode(cvc);
        cvc.sig = bign::sign(&self.provider, &self.entropy, params, &content, privkey)?;
        der::push_tlv(&mut content, TAG_SIG, &cvc.sig);
        Ok(der::tlv(TAG_CERT, &content))
    }

    /// Exact length of the certificate [`wrap`](Self::wrap) would produce,
    /// without invoking the signer. The record is validated (and an empty
    /// public key derived) the same way; the signature length depends only
    /// on the private key length.
    pub fn wrapped_len(&self, cvc: &Cvc, privkey: &[u8]) -> Result<usize> {
        let params = ParamSet::from_privkey_len(privkey.len()).ok_or(Error::BadInput)?;
        let mut cvc = cvc.clone();
        if cvc.pubkey.is_empty() {
            cvc.pubkey = bign::calc_pubkey(&self.provider, privkey)?;
        }
        check::check(&self.provider, &cvc)?;

        let content_len = body::encode(&cvc).len() + der::tlv_len(TAG_SIG, params.sig_len());
        Ok(der::tlv_len(TAG_CERT, content_len))
    }

    /// Issues `cvc` under the authority of `issuer_cert`: unwraps the issuer
    /// certificate (self-trusted input), validates the issuer keypair and
    /// the issuer/holder + validity linkage, then wraps `cvc` under the
    /// issuer private key.
    pub fn issue(
        &self,
        cvc: &mut Cvc,
        issuer_cert: &[u8],
        issuer_privkey: &[u8],
    ) -> Result<Vec<u8>> {
        let issuer = self.unwrap(issuer_cert, None)?;
        bign::val_keypair(&self.provider, issuer_privkey, &issuer.pubkey)?;
        check::check_with_issuer(&self.provider, cvc, &issuer)?;
        self.wrap(cvc, issuer_privkey)
    }
}
