//! Summing raw statistic rows into household totals.

use crate::response::RawRow;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Fields summed for the charts, as named by the API.
pub const HOUSEHOLD_FIELDS: [&str; 6] = [
    "household_ordinary_total",
    "household_single_total",
    "household_single_m",
    "household_single_f",
    "household_ordinary_m",
    "household_ordinary_f",
];

/// `household_single_m` -> `householdSingleM`.
///
/// An underscore followed by an ASCII word character is replaced by that
/// character in upper case; other underscores are kept.
pub fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Numeric value of a field, following loose JSON-to-number rules.
///
/// Numeric strings are parsed after trimming and the empty string counts as
/// zero. `null` is zero, booleans are 0/1. A missing field or any other value
/// is `NaN`, which then poisons the total instead of being hidden.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Array(_)) | Some(Value::Object(_)) | None => f64::NAN,
    }
}

/// Sum each field across `rows`, keyed by the camel-cased field name.
///
/// With no rows every total is zero.
pub fn sum_fields(rows: &[RawRow], fields: &[&str]) -> BTreeMap<String, f64> {
    fields
        .iter()
        .map(|field| {
            let total = rows
                .iter()
                .map(|row| coerce_number(row.get(*field)))
                .fold(0.0, |acc, v| acc + v);
            (snake_to_camel(field), total)
        })
        .collect()
}

/// `part / whole` as a percentage with two decimals; `NaN` when `whole` is zero.
///
/// Halves round up, matching how the figures are presented elsewhere.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return f64::NAN;
    }
    ((part / whole) * 10000.0 + 0.5).floor() / 100.0
}

/// The six household totals used by the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdAggregate {
    pub household_ordinary_total: f64,
    pub household_single_total: f64,
    pub household_single_m: f64,
    pub household_single_f: f64,
    pub household_ordinary_m: f64,
    pub household_ordinary_f: f64,
}

/// Share of ordinary (shared living) vs single (independent living) households.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdShare {
    pub ordinary_pct: f64,
    pub single_pct: f64,
}

impl HouseholdAggregate {
    pub fn from_rows(rows: &[RawRow]) -> Self {
        Self::from_totals(&sum_fields(rows, &HOUSEHOLD_FIELDS))
    }

    /// Pick the household fields out of a `sum_fields` result; absent keys are `NaN`.
    pub fn from_totals(totals: &BTreeMap<String, f64>) -> Self {
        let get = |key: &str| totals.get(key).copied().unwrap_or(f64::NAN);
        Self {
            household_ordinary_total: get("householdOrdinaryTotal"),
            household_single_total: get("householdSingleTotal"),
            household_single_m: get("householdSingleM"),
            household_single_f: get("householdSingleF"),
            household_ordinary_m: get("householdOrdinaryM"),
            household_ordinary_f: get("householdOrdinaryF"),
        }
    }

    pub fn household_total(&self) -> f64 {
        self.household_ordinary_total + self.household_single_total
    }

    pub fn share(&self) -> HouseholdShare {
        let whole = self.household_total();
        HouseholdShare {
            ordinary_pct: percent_of(self.household_ordinary_total, whole),
            single_pct: percent_of(self.household_single_total, whole),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> RawRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("row must be an object"),
        }
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("household_ordinary_total"), "householdOrdinaryTotal");
        assert_eq!(snake_to_camel("household_single_m"), "householdSingleM");
        assert_eq!(snake_to_camel("a"), "a");
        assert_eq!(snake_to_camel("trailing_"), "trailing_");
        assert_eq!(snake_to_camel("a__b"), "a_b");
        assert_eq!(snake_to_camel("v_2"), "v2");
    }

    #[test]
    fn test_sum_empty_rows_is_zero() {
        let totals = sum_fields(&[], &HOUSEHOLD_FIELDS);
        assert_eq!(totals.len(), 6);
        assert!(totals.values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_sum_simple() {
        let rows = vec![row(json!({"a": 1})), row(json!({"a": 2}))];
        let totals = sum_fields(&rows, &["a"]);
        assert_eq!(totals.get("a"), Some(&3.0));
    }

    #[test]
    fn test_sum_numeric_strings() {
        let rows = vec![
            row(json!({"household_single_m": "20"})),
            row(json!({"household_single_m": " 5 "})),
            row(json!({"household_single_m": ""})),
        ];
        let totals = sum_fields(&rows, &["household_single_m"]);
        assert_eq!(totals.get("householdSingleM"), Some(&25.0));
    }

    #[test]
    fn test_missing_field_propagates_nan() {
        let rows = vec![row(json!({"a": 1})), row(json!({"b": 2}))];
        let totals = sum_fields(&rows, &["a"]);
        assert!(totals["a"].is_nan());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(Some(&json!(null))), 0.0);
        assert_eq!(coerce_number(Some(&json!(true))), 1.0);
        assert_eq!(coerce_number(Some(&json!("1.5"))), 1.5);
        assert!(coerce_number(Some(&json!("12a"))).is_nan());
        assert!(coerce_number(Some(&json!([1]))).is_nan());
        assert!(coerce_number(None).is_nan());
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(50.0, 150.0), 33.33);
        assert_eq!(percent_of(100.0, 150.0), 66.67);
        assert_eq!(percent_of(1.0, 8.0), 12.5);
        assert!(percent_of(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_aggregate_share() {
        let rows = vec![row(json!({
            "household_ordinary_total": "100",
            "household_single_total": "50",
            "household_single_m": "20",
            "household_single_f": "30",
            "household_ordinary_m": "45",
            "household_ordinary_f": "55",
        }))];
        let aggregate = HouseholdAggregate::from_rows(&rows);
        assert_eq!(aggregate.household_ordinary_total, 100.0);
        assert_eq!(aggregate.household_single_total, 50.0);
        assert_eq!(aggregate.household_single_f, 30.0);
        let share = aggregate.share();
        assert_eq!(share.single_pct, 33.33);
        assert_eq!(share.ordinary_pct, 66.67);
    }

    #[test]
    fn test_empty_aggregate_share_is_nan() {
        let share = HouseholdAggregate::from_rows(&[]).share();
        assert!(share.single_pct.is_nan());
        assert!(share.ordinary_pct.is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn percentages_are_complementary(whole in 1u32..10_000_000, frac in 0.0f64..=1.0) {
            let whole = f64::from(whole);
            let part = (whole * frac).floor();
            let sum = percent_of(part, whole) + percent_of(whole - part, whole);
            prop_assert!((sum - 100.0).abs() <= 0.011, "sum was {}", sum);
        }
    }
}
