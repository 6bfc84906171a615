use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// The fixed rule set, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    RetailerName,
    RoundDollar,
    QuarterMultiple,
    ItemPairs,
    DescriptionLength,
    OddDay,
    Afternoon,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundDollar,
        Rule::QuarterMultiple,
        Rule::ItemPairs,
        Rule::DescriptionLength,
        Rule::OddDay,
        Rule::Afternoon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Rule::RetailerName => "Retailer name",
            Rule::RoundDollar => "Round dollar",
            Rule::QuarterMultiple => "Quarter multiple",
            Rule::ItemPairs => "Item pairs",
            Rule::DescriptionLength => "Description length",
            Rule::OddDay => "Odd day",
            Rule::Afternoon => "Afternoon",
        }
    }
}

pub const ROUND_DOLLAR_POINTS: u32 = 50;
pub const QUARTER_MULTIPLE_POINTS: u32 = 25;
pub const POINTS_PER_ITEM_PAIR: u32 = 5;
pub const ODD_DAY_POINTS: u32 = 6;
pub const AFTERNOON_POINTS: u32 = 10;

/// Afternoon window, `[start, end)` in 24h hours.
pub const AFTERNOON_HOURS: std::ops::Range<i64> = 14..16;

/// Multiplier applied to an item price by the description-length rule (0.2).
pub fn price_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

/// Parse a currency amount such as "35.35".
pub fn parse_amount(s: &str) -> Result<Decimal> {
    Decimal::from_str(s).with_context(|| format!("Invalid amount: '{}'", s))
}

/// Day of month from a "YYYY-MM-DD" date: the last `-` separated component.
pub fn parse_day_of_month(date: &str) -> Result<i64> {
    match date.rsplit_once('-') {
        Some((_, day)) => day
            .parse()
            .with_context(|| format!("Invalid day in date: '{}'", date)),
        None => bail!("Date has no '-' separator: '{}'", date),
    }
}

/// Hour from an "HH:MM" time: the first `:` separated component.
pub fn parse_hour(time: &str) -> Result<i64> {
    match time.split_once(':') {
        Some((hour, _)) => hour
            .parse()
            .with_context(|| format!("Invalid hour in time: '{}'", time)),
        None => bail!("Time has no ':' separator: '{}'", time),
    }
}

/// Number of ASCII letters and digits in `s`.
pub fn alphanumeric_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).count()
}

/// Byte length of `s` with surrounding whitespace removed.
pub fn trimmed_len(s: &str) -> usize {
    s.trim().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        assert_eq!(Rule::ALL[0], Rule::RetailerName);
        assert_eq!(Rule::ALL[6], Rule::Afternoon);
        assert_eq!(Rule::OddDay.label(), "Odd day");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("35.35").unwrap(), Decimal::new(3535, 2));
        assert_eq!(parse_amount("9").unwrap(), Decimal::from(9));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("$1.00").is_err());
    }

    #[test]
    fn test_parse_day_of_month() {
        assert_eq!(parse_day_of_month("2022-01-01").unwrap(), 1);
        assert_eq!(parse_day_of_month("2022-03-20").unwrap(), 20);
        assert!(parse_day_of_month("20220320").is_err());
        assert!(parse_day_of_month("2022-03-xx").is_err());
        assert!(parse_day_of_month("2022-03-").is_err());
    }

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("14:33").unwrap(), 14);
        assert_eq!(parse_hour("08:00").unwrap(), 8);
        assert!(parse_hour("1433").is_err());
        assert!(parse_hour("two:30").is_err());
    }

    #[test]
    fn test_alphanumeric_count_strips_symbols() {
        assert_eq!(alphanumeric_count("Target"), 6);
        assert_eq!(alphanumeric_count("M&M Corner Market"), 14);
        assert_eq!(alphanumeric_count("  --  "), 0);
        // Non-ASCII letters don't count
        assert_eq!(alphanumeric_count("Café"), 3);
    }

    #[test]
    fn test_trimmed_len() {
        assert_eq!(trimmed_len("   Klarbrunn 12-PK 12 FL OZ  "), 24);
        assert_eq!(trimmed_len(""), 0);
        assert_eq!(trimmed_len("\t abc \n"), 3);
    }

    #[test]
    fn test_trimmed_len_counts_utf8_bytes() {
        assert_eq!(trimmed_len("Crème"), 6);
        assert_eq!(trimmed_len(" Ñam "), 4);
    }
}
