//! Synthetic 10-digit phone numbers

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Valid area codes (never start with 0 or 1)
pub const AREA_CODES: RangeInclusive<u16> = 200..=999;
/// Valid exchange codes, same rule as area codes
pub const EXCHANGE_CODES: RangeInclusive<u16> = 200..=999;
/// Valid subscriber numbers (always four digits)
pub const SUBSCRIBER_NUMBERS: RangeInclusive<u16> = 1000..=9999;

/// Number of distinct phone numbers that can be generated
pub const PHONE_SPACE: usize = 800 * 800 * 9000;

/// A phone number split into its three groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    pub area: u16,
    pub exchange: u16,
    pub subscriber: u16,
}

impl PhoneNumber {
    /// Build a phone number, checking each group's range
    pub fn new(area: u16, exchange: u16, subscriber: u16) -> Result<Self> {
        if !AREA_CODES.contains(&area)
            || !EXCHANGE_CODES.contains(&exchange)
            || !SUBSCRIBER_NUMBERS.contains(&subscriber)
        {
            return Err(Error::InvalidPhone(format!(
                "{}-{}-{}",
                area, exchange, subscriber
            )));
        }
        Ok(Self {
            area,
            exchange,
            subscriber,
        })
    }

    /// Draw a phone number uniformly from the valid space
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            area: rng.gen_range(AREA_CODES),
            exchange: rng.gen_range(EXCHANGE_CODES),
            subscriber: rng.gen_range(SUBSCRIBER_NUMBERS),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.area, self.exchange, self.subscriber)
    }
}

impl FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 10 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPhone(s.to_string()));
        }

        // All ASCII digits, so slicing and parsing cannot fail
        let group = |range: std::ops::Range<usize>| s[range].parse::<u16>().unwrap_or_default();
        Self::new(group(0..3), group(3..6), group(6..10))
            .map_err(|_| Error::InvalidPhone(s.to_string()))
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.to_string()
    }
}
