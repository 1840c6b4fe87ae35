// src/data.rs
//
// Canonical table data as parsed from the sheet.
//
// - Sheet: header list + raw rows, exactly as the source delivered them
//          (trimmed). Created fresh on every load, never mutated after.
// - RawRow: one data line, positional. Values past the header count are kept
//           but have no name.

/// One data line of the sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    values: Vec<String>,
}

impl RawRow {
    pub fn new(values: Vec<String>) -> Self { Self { values } }

    /// Value at a header position; missing trailing fields read as "".
    pub fn at(&self, ix: usize) -> &str {
        self.values.get(ix).map(String::as_str).unwrap_or("")
    }

    /// Every parsed field, including extras past the header count.
    pub fn values(&self) -> &[String] { &self.values }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Header list + rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// Header list with no rows.
    pub fn empty_with(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize { self.headers.len() }

    /// Position of a header. A repeated name resolves to its last column,
    /// the same way a name -> value map built left to right would.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().rposition(|h| h == name)
    }

    /// Value of `row` under header `name`, or None for unknown names.
    pub fn get<'a>(&self, row: &'a RawRow, name: &str) -> Option<&'a str> {
        self.column(name).map(|ix| row.at(ix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(vals: &[&str]) -> RawRow {
        RawRow::new(vals.iter().map(|v| s!(*v)).collect())
    }

    #[test]
    fn missing_trailing_fields_read_empty() {
        let sheet = Sheet::new(vec![s!("A"), s!("B"), s!("C")], vec![row(&["1"])]);
        let r = &sheet.rows[0];
        assert_eq!(sheet.get(r, "A"), Some("1"));
        assert_eq!(sheet.get(r, "C"), Some(""));
        assert_eq!(sheet.get(r, "Z"), None);
    }

    #[test]
    fn extras_are_kept_but_unnamed() {
        let sheet = Sheet::new(vec![s!("A")], vec![row(&["1", "2", "3"])]);
        let r = &sheet.rows[0];
        assert_eq!(r.values().len(), 3);
        assert_eq!(sheet.get(r, "A"), Some("1"));
        assert_eq!(sheet.column("A"), Some(0));
    }

    #[test]
    fn repeated_header_resolves_to_last() {
        let sheet = Sheet::new(vec![s!("X"), s!("X")], vec![row(&["first", "second"])]);
        assert_eq!(sheet.get(&sheet.rows[0], "X"), Some("second"));
    }
}
