//! Validated identifier wrappers.
//!
//! Thin newtypes over strings that are only constructible from values
//! passing their checksum rules, so a validated identifier can be passed
//! around without re-checking it at every seam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{InvalidNationalId, InvalidOrgNumber};

const ORG_WEIGHTS: [u8; 8] = [3, 2, 7, 6, 5, 4, 3, 2];
const ID_WEIGHTS_FIRST: [u8; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
const ID_WEIGHTS_SECOND: [u8; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Weighted mod-11 check digit. A result of 10 means no valid check digit
/// exists for the input.
fn mod11_check_digit(digits: &[u8], weights: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * u32::from(weight))
        .sum();
    (11 - (sum % 11) as u8) % 11
}

fn digits_of(value: &str) -> Option<Vec<u8>> {
    value
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// A Norwegian organization number: nine digits, the last being a weighted
/// mod-11 checksum of the first eight.
///
/// See <https://www.brreg.no/om-oss/registrene-vare/om-enhetsregisteret/organisasjonsnummeret/>
/// for the rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrgNumber(String);

impl OrgNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidOrgNumber> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidOrgNumber)
        }
    }

    pub fn is_valid(value: &str) -> bool {
        let Some(digits) = digits_of(value) else {
            return false;
        };
        if digits.len() != 9 {
            return false;
        }

        let check = mod11_check_digit(&digits[..8], &ORG_WEIGHTS);
        check != 10 && check == digits[8]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrgNumber {
    type Err = InvalidOrgNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OrgNumber {
    type Error = InvalidOrgNumber;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrgNumber> for String {
    fn from(value: OrgNumber) -> Self {
        value.0
    }
}

/// A Norwegian national identity number (fødselsnummer or D-number):
/// eleven digits, of which the first six are a birth date and the last two
/// are weighted mod-11 check digits over the preceding digits.
///
/// The date portion accepts the registry's offset encodings: +40 on the
/// day marks a D-number, +40 or +80 on the month marks synthetic test
/// persons. See <https://lovdata.no/dokument/SF/forskrift/2017-07-14-1201/KAPITTEL_2#%C2%A72-2-1>
/// for the rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId(String);

impl NationalId {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidNationalId> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidNationalId)
        }
    }

    pub fn is_valid(value: &str) -> bool {
        let Some(digits) = digits_of(value) else {
            return false;
        };
        if digits.len() != 11 {
            return false;
        }
        if !Self::plausible_date(&digits) {
            return false;
        }

        let first = mod11_check_digit(&digits[..9], &ID_WEIGHTS_FIRST);
        let second = mod11_check_digit(&digits[..10], &ID_WEIGHTS_SECOND);
        first != 10 && second != 10 && first == digits[9] && second == digits[10]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Day 01-31 (+40 for D-numbers), month 01-12 (+40 or +80 for
    /// synthetic test persons), checked digit-pair-wise.
    fn plausible_date(digits: &[u8]) -> bool {
        let day_ok = matches!(
            (digits[0], digits[1]),
            (0 | 4, 1..=9) | (1 | 2 | 5 | 6, _) | (3 | 7, 0 | 1)
        );
        let month_ok = matches!(
            (digits[2], digits[3]),
            (0 | 4 | 8, 1..=9) | (1 | 5 | 9, 0..=2)
        );
        day_ok && month_ok
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NationalId {
    type Err = InvalidNationalId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NationalId {
    type Error = InvalidNationalId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NationalId> for String {
    fn from(value: NationalId) -> Self {
        value.0
    }
}
