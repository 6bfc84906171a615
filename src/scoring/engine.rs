use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::rules::{self, Rule};
use crate::receipt::Receipt;

#[derive(Debug, Clone, PartialEq)]
pub struct RuleContribution {
    pub rule: Rule,
    pub description: String, // e.g. "6 alphanumeric characters", "day 1 is odd"
    pub points: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsBreakdown {
    pub contributions: Vec<RuleContribution>,
}

impl PointsBreakdown {
    /// Exact sum of all contributions, before flooring and truncation.
    pub fn raw_total(&self) -> Decimal {
        self.contributions
            .iter()
            .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.points))
    }
}

impl PointsBreakdown {
    /// One aligned line per contributing rule: label, points, description.
    pub fn format_lines(&self) -> Vec<String> {
        self.contributions
            .iter()
            .map(|c| {
                format!(
                    "  {:<20} {:>6}  {}",
                    c.rule.label(),
                    c.points.to_string(),
                    c.description
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointsResult {
    pub points: u64,
    pub breakdown: PointsBreakdown,
}

/// Score a receipt.
///
/// Rules are evaluated in `Rule::ALL` order and summed as exact decimals.
/// A sub-field that fails to parse makes its rule award nothing. The sum is
/// floored at zero and truncated to an integer at the end.
pub fn calculate_points(receipt: &Receipt) -> PointsResult {
    let mut breakdown = PointsBreakdown::default();

    for rule in Rule::ALL {
        if let Some((points, description)) = apply_rule(rule, receipt) {
            breakdown.contributions.push(RuleContribution {
                rule,
                description,
                points,
            });
        }
    }

    let total = breakdown.raw_total().max(Decimal::ZERO).trunc();
    // Decimal can exceed u64; saturate rather than wrap
    let points = total.to_u64().unwrap_or(u64::MAX);

    PointsResult { points, breakdown }
}

/// Returns the rule's points and a human-readable description, or None when
/// the rule does not apply.
fn apply_rule(rule: Rule, receipt: &Receipt) -> Option<(Decimal, String)> {
    match rule {
        Rule::RetailerName => {
            let count = rules::alphanumeric_count(&receipt.retailer);
            (count > 0).then(|| {
                (
                    Decimal::from(count),
                    format!("{} alphanumeric characters", count),
                )
            })
        }
        Rule::RoundDollar => {
            let total = parsed_total(receipt)?;
            total.fract().is_zero().then(|| {
                (
                    Decimal::from(rules::ROUND_DOLLAR_POINTS),
                    format!("total {} has no cents", total),
                )
            })
        }
        Rule::QuarterMultiple => {
            let total = parsed_total(receipt)?;
            let quarters = total.checked_mul(Decimal::from(4))?;
            quarters.fract().is_zero().then(|| {
                (
                    Decimal::from(rules::QUARTER_MULTIPLE_POINTS),
                    format!("total {} is a multiple of 0.25", total),
                )
            })
        }
        Rule::ItemPairs => {
            let pairs = receipt.items.len() / 2;
            (pairs > 0).then(|| {
                (
                    Decimal::from(pairs as u64 * rules::POINTS_PER_ITEM_PAIR as u64),
                    format!("{} items, {} pairs", receipt.items.len(), pairs),
                )
            })
        }
        Rule::DescriptionLength => {
            let mut sum = Decimal::ZERO;
            let mut matched = 0usize;
            for item in &receipt.items {
                if rules::trimmed_len(&item.short_description) % 3 != 0 {
                    continue;
                }
                matched += 1;
                sum = sum.saturating_add(item_price_bonus(&item.price));
            }
            (matched > 0).then(|| {
                (
                    sum,
                    format!(
                        "{} of {} descriptions have length divisible by 3",
                        matched,
                        receipt.items.len()
                    ),
                )
            })
        }
        Rule::OddDay => match rules::parse_day_of_month(&receipt.purchase_date) {
            Ok(day) if day % 2 == 1 => Some((
                Decimal::from(rules::ODD_DAY_POINTS),
                format!("day {} is odd", day),
            )),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Odd day rule skipped: {:#}", e);
                None
            }
        },
        Rule::Afternoon => match rules::parse_hour(&receipt.purchase_time) {
            Ok(hour) if rules::AFTERNOON_HOURS.contains(&hour) => Some((
                Decimal::from(rules::AFTERNOON_POINTS),
                format!("purchased at hour {}", hour),
            )),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Afternoon rule skipped: {:#}", e);
                None
            }
        },
    }
}

fn parsed_total(receipt: &Receipt) -> Option<Decimal> {
    match rules::parse_amount(&receipt.total) {
        Ok(total) => Some(total),
        Err(e) => {
            tracing::debug!("Total rules skipped: {:#}", e);
            None
        }
    }
}

/// `ceil(price * 0.2)`, or zero when the price does not parse.
fn item_price_bonus(price: &str) -> Decimal {
    match rules::parse_amount(price) {
        Ok(price) => price
            .checked_mul(rules::price_multiplier())
            .map(|p| p.ceil())
            .unwrap_or(Decimal::ZERO),
        Err(e) => {
            tracing::debug!("Item price bonus skipped: {:#}", e);
            Decimal::ZERO
        }
    }
}
