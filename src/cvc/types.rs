// btok-cvc: STB 34.101.79 card-verifiable certificates
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

/// Certificate date as six decimal digits `YYMMDD`, year base 2000.
///
/// Ordering is lexicographic over the digits, which coincides with
/// chronological order for the covered range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date([u8; 6]);

impl Date {
    /// Creates a date from six digit values (each `0..=9`).
    pub const fn from_digits(digits: [u8; 6]) -> Self {
        Self(digits)
    }

    /// Creates a date from a two-digit year, month, and day.
    pub const fn from_ymd(year: u8, month: u8, day: u8) -> Self {
        Self([
            year / 10,
            year % 10,
            month / 10,
            month % 10,
            day / 10,
            day % 10,
        ])
    }

    /// The six digit values.
    pub const fn digits(&self) -> [u8; 6] {
        self.0
    }

    /// Two-digit year (2000 base).
    pub const fn year(&self) -> u8 {
        10 * self.0[0] + self.0[1]
    }

    /// Month, nominally `1..=12`.
    pub const fn month(&self) -> u8 {
        10 * self.0[2] + self.0[3]
    }

    /// Day of month, nominally `1..=31`.
    pub const fn day(&self) -> u8 {
        10 * self.0[4] + self.0[5]
    }

    /// Validates the date.
    ///
    /// The standard took effect in 2019, so years below 19 are invalid.
    /// Two-digit years cover 2019..=2099 only; within that range the
    /// `year % 4` leap test is exact and the century rule does not apply.
    pub fn is_valid(&self) -> bool {
        if self.0.iter().any(|&digit| digit > 9) {
            return false;
        }
        let (y, m, d) = (self.year(), self.month(), self.day());
        y >= 19
            && (1..=12).contains(&m)
            && (1..=31).contains(&d)
            && !(d == 31 && matches!(m, 4 | 6 | 9 | 11))
            && !(m == 2 && (d > 29 || (d == 29 && y % 4 != 0)))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// A card-verifiable certificate record.
///
/// Fields are plain data; the engine validates them on wrap and fills
/// `pubkey` (when empty) and `sig`. A record recovered by unwrap always
/// satisfies [`CvcEngine::check`](super::CvcEngine::check).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cvc {
    /// Issuer name, printable, 8..=12 characters.
    pub authority: String,
    /// Subject name, printable, 8..=12 characters.
    pub holder: String,
    /// Subject bign public key, 64/96/128 octets. Empty means "derive from
    /// the private key" during wrap.
    pub pubkey: Vec<u8>,
    /// eID holder authorization template. `None` is omitted on the wire; an
    /// all-zero template is the wire form of absence.
    pub hat_eid: Option<[u8; 5]>,
    /// e-signature holder authorization template, same absence rule.
    pub hat_esign: Option<[u8; 2]>,
    /// First day of validity.
    pub from: Date,
    /// Last day of validity, `from <= until`.
    pub until: Date,
    /// bign signature over the encoded body, 48/72/96 octets. Filled by
    /// wrap and unwrap.
    pub sig: Vec<u8>,
}
