// src/columns.rs
//
// Column roles, resolved once per load from the header names.
//
// Classification is a case-insensitive substring match, checked in order:
// floor, availability, area, price. Anything else is generic, except the
// first displayed column, which is the row identifier (the sort tie-break).

use crate::config::consts::{AREA_KEYS, AVAILABILITY_KEYS, FLOOR_KEYS, PRICE_KEYS};
use crate::core::sanitize::fold_case;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Identifier,
    Floor,
    Availability,
    Area,
    Price,
    Generic,
}

impl ColumnRole {
    /// Role implied by a header name alone.
    pub fn classify(header: &str) -> Self {
        let name = fold_case(header);
        let hit = |keys: &[&str]| keys.iter().any(|k| name.contains(k));

        if hit(FLOOR_KEYS) { ColumnRole::Floor }
        else if hit(AVAILABILITY_KEYS) { ColumnRole::Availability }
        else if hit(AREA_KEYS) { ColumnRole::Area }
        else if hit(PRICE_KEYS) { ColumnRole::Price }
        else { ColumnRole::Generic }
    }

    pub fn is_visible(self) -> bool {
        self != ColumnRole::Availability
    }
}

/// How a displayed cell is turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRule {
    /// FSZ / I. / II. / number
    FloorLabel,
    /// Two decimals, dash when empty
    Decimal2,
    /// Value / 1 000 000, two decimals, dash when empty
    Millions,
    /// Raw text, dash when empty
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    pub header: String,
    pub role: ColumnRole,
    pub rule: CellRule,
}

/// Typed role table for one header list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnRoles {
    columns: Vec<Column>,
}

impl ColumnRoles {
    /// Resolve roles and cell rules. `million_columns` are zero-based
    /// positions in the original header order that display in millions
    /// unless a floor or area rule already claims them.
    pub fn resolve(headers: &[String], million_columns: &[usize]) -> Self {
        let mut columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(index, h)| {
                let role = ColumnRole::classify(h);
                let rule = match role {
                    ColumnRole::Floor => CellRule::FloorLabel,
                    ColumnRole::Area => CellRule::Decimal2,
                    _ if million_columns.contains(&index) => CellRule::Millions,
                    _ => CellRule::Text,
                };
                Column { index, header: h.clone(), role, rule }
            })
            .collect();

        // First displayed column identifies the row, unless it already
        // carries a numeric role.
        if let Some(first) = columns.iter_mut().find(|c| c.role.is_visible()) {
            if matches!(first.role, ColumnRole::Generic | ColumnRole::Price) {
                first.role = ColumnRole::Identifier;
            }
        }

        Self { columns }
    }

    pub fn all(&self) -> &[Column] { &self.columns }

    /// Displayed columns in original order.
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.role.is_visible())
    }

    pub fn visible_count(&self) -> usize { self.visible().count() }

    /// Column whose raw value breaks floor ties.
    pub fn sort_key(&self) -> Option<&Column> {
        self.visible().next()
    }

    /// Rightmost column with the given role.
    pub fn last_with(&self, role: ColumnRole) -> Option<usize> {
        self.columns.iter().rev().find(|c| c.role == role).map(|c| c.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColumnRole::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| s!(*n)).collect()
    }

    #[test]
    fn classify_by_substring() {
        assert_eq!(ColumnRole::classify("Emelet"), Floor);
        assert_eq!(ColumnRole::classify("ELÉRHETŐ"), Availability);
        assert_eq!(ColumnRole::classify("Erkély m2"), Area);
        assert_eq!(ColumnRole::classify("Bruttó ár"), Price);
        assert_eq!(ColumnRole::classify("Szobák"), Generic);
    }

    #[test]
    fn area_and_availability_prefixes() {
        assert_eq!(ColumnRole::classify("Négyzetméter"), Area);
        assert_eq!(ColumnRole::classify("NÉGYZETMÉTER"), Area);
        assert_eq!(ColumnRole::classify("Elér."), Availability);
        assert_eq!(ColumnRole::classify("Eleres"), Availability);
        // unit sign is not the ascii "m2"
        assert_eq!(ColumnRole::classify("Alapterület (m²)"), Generic);
    }

    #[test]
    fn precedence_floor_before_area() {
        assert_eq!(ColumnRole::classify("Emelet m2"), Floor);
        assert_eq!(ColumnRole::classify("Elérhető m2"), Availability);
        // area beats price
        assert_eq!(ColumnRole::classify("Terasz m2 ár"), Area);
    }

    #[test]
    fn availability_is_hidden() {
        let roles = ColumnRoles::resolve(&headers(&["Lakás", "Emelet", "Elérhető", "Szobák"]), &[]);
        let vis: Vec<&str> = roles.visible().map(|c| c.header.as_str()).collect();
        assert_eq!(vis, vec!["Lakás", "Emelet", "Szobák"]);
        assert_eq!(roles.last_with(Availability), Some(2));
    }

    #[test]
    fn first_visible_column_is_identifier() {
        let roles = ColumnRoles::resolve(&headers(&["Elérhető", "Lakás", "Emelet"]), &[]);
        assert_eq!(roles.all()[1].role, Identifier);
        assert_eq!(roles.sort_key().map(|c| c.index), Some(1));

        let roles = ColumnRoles::resolve(&headers(&["Emelet", "Lakás"]), &[]);
        assert_eq!(roles.all()[0].role, Floor);
        assert_eq!(roles.sort_key().map(|c| c.index), Some(0));
    }

    #[test]
    fn million_positions_ignore_names() {
        let hs = headers(&["Lakás", "Emelet", "Szobák", "m2", "Foo", "Bar", "Baz"]);
        let roles = ColumnRoles::resolve(&hs, &[4, 5]);
        let rules: Vec<CellRule> = roles.all().iter().map(|c| c.rule).collect();
        assert_eq!(
            rules,
            vec![CellRule::Text, CellRule::FloorLabel, CellRule::Text, CellRule::Decimal2,
                 CellRule::Millions, CellRule::Millions, CellRule::Text]
        );
    }

    #[test]
    fn fallback_headers_resolve() {
        let hs: Vec<String> = crate::config::consts::FALLBACK_HEADERS.iter().map(|h| s!(*h)).collect();
        let roles = ColumnRoles::resolve(&hs, &[4, 5]);
        let rules: Vec<CellRule> = roles.visible().map(|c| c.rule).collect();
        assert_eq!(
            rules,
            vec![CellRule::Text, CellRule::Decimal2, CellRule::Decimal2, CellRule::Decimal2,
                 CellRule::Millions, CellRule::Millions, CellRule::FloorLabel]
        );
        assert_eq!(roles.last_with(Availability), Some(7));
    }

    #[test]
    fn area_rule_wins_over_million_position() {
        let hs = headers(&["A", "B", "C", "D", "Erkély m2", "F"]);
        let roles = ColumnRoles::resolve(&hs, &[4, 5]);
        assert_eq!(roles.all()[4].rule, CellRule::Decimal2);
        assert_eq!(roles.all()[5].rule, CellRule::Millions);
    }
}
