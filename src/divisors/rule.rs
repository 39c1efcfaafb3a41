use std::fmt;
use std::ops::RangeInclusive;

/// Which group counts make a product ID invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleVariant {
    /// Exactly two identical groups
    PartOne,
    /// Two or more identical groups
    PartTwo,
}

impl RuleVariant {
    pub const ALL: [RuleVariant; 2] = [RuleVariant::PartOne, RuleVariant::PartTwo];

    /// Part number as printed in reports.
    pub fn number(&self) -> u8 {
        match self {
            RuleVariant::PartOne => 1,
            RuleVariant::PartTwo => 2,
        }
    }

    /// Group counts worth testing for an ID of `digit_count` digits.
    pub fn group_counts(&self, digit_count: u32) -> RangeInclusive<u32> {
        match self {
            RuleVariant::PartOne => 2..=2,
            RuleVariant::PartTwo => 2..=digit_count,
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}", self.number())
    }
}
