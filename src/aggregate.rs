// src/aggregate.rs
//
// Team totals over skater rows. Every column is summed the same way,
// TOI and +/- included: a "12:34" time adds 0.

use crate::core::coerce::numeric;
use crate::player::PlayerRecord;

/// Skater columns that get a team total, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKey {
    Goals,
    Assists,
    Sog,
    Passes,
    Exits,
    Entries,
    Turnovers,
    Takeaways,
    PuckTouches,
    TimeOnIce,
    PlusMinus,
}

impl StatKey {
    pub const ALL: [StatKey; 11] = [
        StatKey::Goals,
        StatKey::Assists,
        StatKey::Sog,
        StatKey::Passes,
        StatKey::Exits,
        StatKey::Entries,
        StatKey::Turnovers,
        StatKey::Takeaways,
        StatKey::PuckTouches,
        StatKey::TimeOnIce,
        StatKey::PlusMinus,
    ];

    /// JSON key in the game file.
    pub fn key(&self) -> &'static str {
        match self {
            StatKey::Goals => "goals",
            StatKey::Assists => "assists",
            StatKey::Sog => "sog",
            StatKey::Passes => "passes",
            StatKey::Exits => "exits",
            StatKey::Entries => "entries",
            StatKey::Turnovers => "turnovers",
            StatKey::Takeaways => "takeaways",
            StatKey::PuckTouches => "puckTouches",
            StatKey::TimeOnIce => "timeOnIce",
            StatKey::PlusMinus => "plusMinus",
        }
    }

    /// Shown verbatim rather than coerced in player rows.
    pub fn is_free_form(&self) -> bool {
        matches!(self, StatKey::TimeOnIce | StatKey::PlusMinus)
    }

    pub fn from_key(key: &str) -> Option<StatKey> {
        StatKey::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// Sum one column; absent or non-numeric values add 0.
pub fn sum<'a, I>(rows: I, key: StatKey) -> f64
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    rows.into_iter()
        .fold(0.0, |total, p| total + numeric(p.field(key.key())).as_f64())
}

/// Sum by JSON key name. Unknown names total 0.
pub fn sum_field<'a, I>(rows: I, field: &str) -> f64
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    match StatKey::from_key(field) {
        Some(key) => sum(rows, key),
        None => 0.0,
    }
}

/// All 11 team totals for one skater group.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateRow {
    totals: [f64; 11],
}

impl AggregateRow {
    pub fn compute(skaters: &[&PlayerRecord]) -> Self {
        let mut totals = [0.0; 11];
        for (slot, key) in totals.iter_mut().zip(StatKey::ALL) {
            *slot = sum(skaters.iter().copied(), key);
        }
        Self { totals }
    }

    pub fn get(&self, key: StatKey) -> f64 {
        // Discriminants follow `StatKey::ALL`.
        self.totals[key as usize]
    }

    /// Totals in column order.
    pub fn values(&self) -> &[f64; 11] {
        &self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skater(goals: serde_json::Value, toi: serde_json::Value) -> PlayerRecord {
        PlayerRecord { goals: Some(goals), time_on_ice: Some(toi), ..Default::default() }
    }

    #[test]
    fn empty_sum_is_zero() {
        let none: Vec<PlayerRecord> = Vec::new();
        for key in StatKey::ALL {
            assert_eq!(sum(&none, key), 0.0);
        }
    }

    #[test]
    fn coerces_and_skips_junk() {
        let rows = vec![skater(json!(2), json!("12:34")), skater(json!("3"), json!(61)), skater(json!("x"), json!(null))];
        assert_eq!(sum(&rows, StatKey::Goals), 5.0);
        // "12:34" is not a number; only the 61 counts.
        assert_eq!(sum(&rows, StatKey::TimeOnIce), 61.0);
        assert_eq!(sum_field(&rows, "goals"), 5.0);
        assert_eq!(sum_field(&rows, "penalties"), 0.0);
    }

    #[test]
    fn plus_minus_keeps_sign() {
        let rows = vec![
            PlayerRecord { plus_minus: Some(json!(-2)), ..Default::default() },
            PlayerRecord { plus_minus: Some(json!("1")), ..Default::default() },
        ];
        assert_eq!(sum(&rows, StatKey::PlusMinus), -1.0);
    }

    #[test]
    fn aggregate_row_matches_sums() {
        let rows = vec![skater(json!(1), json!(10)), skater(json!(4), json!(5))];
        let refs: Vec<&PlayerRecord> = rows.iter().collect();
        let agg = AggregateRow::compute(&refs);
        assert_eq!(agg.get(StatKey::Goals), 5.0);
        assert_eq!(agg.get(StatKey::TimeOnIce), 15.0);
        assert_eq!(agg.get(StatKey::Assists), 0.0);
        assert_eq!(agg.values().len(), 11);
    }

    #[test]
    fn keys_round_trip() {
        for key in StatKey::ALL {
            assert_eq!(StatKey::from_key(key.key()), Some(key));
        }
    }
}
