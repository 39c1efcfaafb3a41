use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::ranges::digits::digit_count;
use crate::ranges::errors::RangeError;

/// An inclusive range of product IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl IdRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// A range whose start lies past its end holds no IDs.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of IDs covered by the range.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Split into consecutive sub-ranges whose IDs all share one digit count.
    ///
    /// `95-115` becomes `[95-99, 100-115]`. An empty range yields nothing.
    pub fn split_by_digit_count(&self) -> Vec<(u32, IdRange)> {
        let mut segments = Vec::new();
        if self.is_empty() {
            return segments;
        }

        let mut lower = self.start;
        loop {
            let digits = digit_count(lower);
            // Largest ID with `digits` digits, or u64::MAX for the 20-digit band.
            let band_end = 10_u64
                .checked_pow(digits)
                .map_or(u64::MAX, |next_power| next_power - 1);
            let upper = band_end.min(self.end);
            segments.push((digits, IdRange::new(lower, upper)));

            if upper == self.end {
                break;
            }
            lower = upper + 1;
        }

        debug!("Split {} into {} segment(s)", self, segments.len());
        segments
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for IdRange {
    type Err = RangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut parts = token.split('-');

        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RangeError::InvalidFormat(token.to_string()));
        };
        if from.is_empty() || to.is_empty() {
            return Err(RangeError::InvalidFormat(token.to_string()));
        }

        let parse_bound = |value: &str| {
            value.parse::<u64>().map_err(|_| RangeError::InvalidNumber {
                token: token.to_string(),
                value: value.to_string(),
            })
        };

        Ok(IdRange::new(parse_bound(from)?, parse_bound(to)?))
    }
}
