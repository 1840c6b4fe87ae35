// src/normalize.rs
//
// Raw row -> canonical shape. Pure and total: every malformed value
// degrades to a default, nothing here returns an error.

use crate::columns::{ColumnRole, ColumnRoles};
use crate::core::sanitize::digits_only;
use crate::data::RawRow;

/// Single-letter availability code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    /// `I` (igen)
    Available,
    /// `N` (nem)
    Unavailable,
    /// First character of anything else.
    Other(char),
}

impl Availability {
    pub fn code(self) -> char {
        match self {
            Availability::Available => 'I',
            Availability::Unavailable => 'N',
            Availability::Other(c) => c,
        }
    }

    /// CSS-style state class for the row, if the code is I or N.
    pub fn state_class(self) -> Option<&'static str> {
        match self {
            Availability::Available => Some("available"),
            Availability::Unavailable => Some("unavailable"),
            Availability::Other(_) => None,
        }
    }
}

const YES: &[&str] = &["IGEN", "I", "TRUE"];
const NO: &[&str] = &["NEM", "N", "FALSE"];

/// Every digit in the value, read as one integer; 0 when there are none.
pub fn parse_floor(raw: &str) -> i64 {
    digits_only(raw).parse::<i64>().unwrap_or(0)
}

/// None for an empty value.
pub fn parse_availability(raw: &str) -> Option<Availability> {
    let v = raw.trim().to_uppercase();
    if YES.contains(&v.as_str()) {
        Some(Availability::Available)
    } else if NO.contains(&v.as_str()) {
        Some(Availability::Unavailable)
    } else {
        v.chars().next().map(|c| match c {
            'I' => Availability::Available,
            'N' => Availability::Unavailable,
            other => Availability::Other(other),
        })
    }
}

/// Canonical view of one raw row.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRow {
    pub floor: i64,
    pub availability: Option<Availability>,
}

impl NormalizedRow {
    pub fn state_class(&self) -> Option<&'static str> {
        self.availability.and_then(Availability::state_class)
    }
}

pub fn normalize(row: &RawRow, roles: &ColumnRoles) -> NormalizedRow {
    let floor = roles
        .last_with(ColumnRole::Floor)
        .map(|ix| parse_floor(row.at(ix)))
        .unwrap_or(0);

    let availability = roles
        .last_with(ColumnRole::Availability)
        .and_then(|ix| parse_availability(row.at(ix)));

    NormalizedRow { floor, availability }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> ColumnRoles {
        let hs: Vec<String> = names.iter().map(|n| s!(*n)).collect();
        ColumnRoles::resolve(&hs, &[])
    }

    fn row(vals: &[&str]) -> RawRow {
        RawRow::new(vals.iter().map(|v| s!(*v)).collect())
    }

    #[test]
    fn floor_digits() {
        assert_eq!(parse_floor("3. emelet"), 3);
        assert_eq!(parse_floor("Földszint"), 0);
        assert_eq!(parse_floor(""), 0);
        assert_eq!(parse_floor("99999999999999999999999"), 0);
    }

    #[test]
    fn availability_codes() {
        assert_eq!(parse_availability("igen"), Some(Availability::Available));
        assert_eq!(parse_availability(" IGEN "), Some(Availability::Available));
        assert_eq!(parse_availability("true"), Some(Availability::Available));
        assert_eq!(parse_availability("nem"), Some(Availability::Unavailable));
        assert_eq!(parse_availability("False"), Some(Availability::Unavailable));
        assert_eq!(parse_availability("foglalt"), Some(Availability::Other('F')));
        assert_eq!(parse_availability("n/a"), Some(Availability::Unavailable));
        assert_eq!(parse_availability("  "), None);
    }

    #[test]
    fn only_hungarian_and_boolean_words_are_mapped() {
        // first letter only: neither I nor N
        assert_eq!(parse_availability("yes"), Some(Availability::Other('Y')));
        assert_eq!(parse_availability("1"), Some(Availability::Other('1')));
        assert_eq!(parse_availability("0"), Some(Availability::Other('0')));
        assert_eq!(parse_availability("1").and_then(Availability::state_class), None);
    }

    #[test]
    fn state_class_only_for_i_and_n() {
        assert_eq!(Availability::Available.state_class(), Some("available"));
        assert_eq!(Availability::Unavailable.state_class(), Some("unavailable"));
        assert_eq!(Availability::Other('F').state_class(), None);
    }

    #[test]
    fn normalizes_whole_row() {
        let r = roles(&["Lakás", "Emelet", "m2", "Elérhető", "Ár"]);
        let n = normalize(&row(&["A3", "3. emelet", "65,4", "Igen", "45 000 000"]), &r);
        assert_eq!(n.floor, 3);
        assert_eq!(n.availability.map(Availability::code), Some('I'));
        assert_eq!(n.state_class(), Some("available"));
    }

    #[test]
    fn missing_floor_column_defaults_to_zero() {
        let r = roles(&["Lakás", "Szobák"]);
        let n = normalize(&row(&["A1", "2"]), &r);
        assert_eq!(n.floor, 0);
        assert_eq!(n.availability, None);
    }

    #[test]
    fn bad_values_degrade() {
        let r = roles(&["Emelet", "Elér."]);
        let n = normalize(&row(&["?", ""]), &r);
        assert_eq!(n.floor, 0);
        assert_eq!(n.availability, None);
    }
}
