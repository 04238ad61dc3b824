// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

// Pull in the README as the package doc
#![doc = include_str!("../README.md")]

pub mod bign;
pub mod crypto;
pub mod cvc;
pub mod error;

mod internal;

#[cfg(test)]
pub(crate) mod testutil;

pub use crypto::{CryptoProvider, EntropySource, NoEntropy, OsEntropy};
pub use cvc::{Cvc, CvcEngine, Date};
pub use error::{Error, Result};
