// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#![no_main]

use btok_cvc::bign::ParamSet;
use btok_cvc::{CryptoProvider, CvcEngine, NoEntropy, Result};
use libfuzzer_sys::fuzz_target;

/// Accept-everything backend: the target exercises the DER decoding and
/// validation paths, not the signature scheme.
struct NullProvider;

impl CryptoProvider for NullProvider {
    fn belt_hash(&self, _data: &[u8]) -> [u8; 32] {
        [0; 32]
    }

    fn bash_hash(&self, level: usize, _data: &[u8]) -> Vec<u8> {
        vec![0; level / 4]
    }

    fn bign_sign(
        &self,
        params: ParamSet,
        _hash_oid_der: &[u8],
        _hash: &[u8],
        _privkey: &[u8],
        _rand: &[u8],
    ) -> Result<Vec<u8>> {
        Ok(vec![0; params.sig_len()])
    }

    fn bign_verify(
        &self,
        _params: ParamSet,
        _hash_oid_der: &[u8],
        _hash: &[u8],
        _sig: &[u8],
        _pubkey: &[u8],
    ) -> Result<()> {
        Ok(())
    }

    fn bign_calc_pubkey(&self, params: ParamSet, _privkey: &[u8]) -> Result<Vec<u8>> {
        Ok(vec![0x01; params.pubkey_len()])
    }

    fn bign_val_pubkey(&self, _params: ParamSet, _pubkey: &[u8]) -> Result<()> {
        Ok(())
    }

    fn bign_val_keypair(&self, _params: ParamSet, _privkey: &[u8], _pubkey: &[u8]) -> Result<()> {
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let engine = CvcEngine::with_entropy(NullProvider, NoEntropy);
    // anything that decodes must survive a re-wrap/re-parse cycle
    if let Ok(mut cvc) = engine.unwrap(data, None) {
        let original = cvc.clone();
        let privkey = vec![0x02; cvc.pubkey.len() / 2];
        if let Ok(cert) = engine.wrap(&mut cvc, &privkey) {
            let back = engine
                .unwrap(&cert, None)
                .expect("re-wrapped certificate must parse");
            assert_eq!(back.authority, original.authority);
            assert_eq!(back.holder, original.holder);
        }
    }
});
