// src/csv.rs
use std::fmt;
use std::io::{self, Write};
use std::mem::take;

use crate::data::{RawRow, Sheet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No non-blank line to take the header from.
    MissingHeader,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "no header line in sheet"),
        }
    }
}

impl std::error::Error for ParseError {}

/* ---------------- Parsing ---------------- */

/// Split one line into trimmed fields.
///
/// Quotes toggle "inside field" state; `""` inside a quoted field is a
/// literal quote. An unmatched quote keeps the rest of the line in one field.
pub fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => {
                fields.push(take(&mut field).trim().to_string());
            }
            _ => field.push(ch),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Non-blank lines of `text`. Accepts `\n`, `\r\n` and lone `\r`.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|l| !l.trim().is_empty())
}

/// Parse a sheet export: first non-blank line is the header, every further
/// non-blank line is a row. Quoted fields cannot span lines.
pub fn parse_sheet(text: &str, delim: Delim) -> Result<Sheet, ParseError> {
    let sep = delim.sep();
    let mut lines = content_lines(text);

    let header_line = lines.next().ok_or(ParseError::MissingHeader)?;
    let headers = split_line(header_line, sep);
    let rows = lines.map(|l| RawRow::new(split_line(l, sep))).collect();

    Ok(Sheet::new(headers, rows))
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line + rows as one string.
pub fn rows_to_string<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, headers, delim);
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_is_one_field() {
        assert_eq!(split_line(r#"A1,"Budapest, XIII.",3"#, ','), vec!["A1", "Budapest, XIII.", "3"]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(split_line(r#""a ""b"" c",d"#, ','), vec![r#"a "b" c"#, "d"]);
    }

    #[test]
    fn unmatched_quote_swallows_rest_of_line() {
        assert_eq!(split_line(r#"x,"y,z"#, ','), vec!["x", "y,z"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line("  a , b ,c  ", ','), vec!["a", "b", "c"]);
        assert_eq!(split_line("a,,", ','), vec!["a", "", ""]);
    }

    #[test]
    fn blank_lines_are_skipped_and_crlf_accepted() {
        let text = "\r\n  \nLakás,Emelet\r\nA1,2\r\n\r\nA2,0\n";
        let sheet = parse_sheet(text, Delim::Csv).unwrap();
        assert_eq!(sheet.headers, vec!["Lakás", "Emelet"]);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.rows[1].at(0), "A2");
    }

    #[test]
    fn empty_text_has_no_header() {
        assert_eq!(parse_sheet("", Delim::Csv), Err(ParseError::MissingHeader));
        assert_eq!(parse_sheet(" \n\r\n", Delim::Csv), Err(ParseError::MissingHeader));
    }

    #[test]
    fn header_only_gives_zero_rows() {
        let sheet = parse_sheet("A,B,C\n", Delim::Csv).unwrap();
        assert_eq!(sheet.header_count(), 3);
        assert_eq!(sheet.row_count(), 0);
    }

    #[test]
    fn tsv_separator() {
        let sheet = parse_sheet("A\tB\n1,5\t2\n", Delim::Tsv).unwrap();
        assert_eq!(sheet.rows[0].values(), &[s!("1,5"), s!("2")]);
    }

    #[test]
    fn writer_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\""], Delim::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn rows_to_string_includes_header() {
        let out = rows_to_string(&["A", "B"], &[vec!["1", "2"]], Delim::Tsv);
        assert_eq!(out, "A\tB\n1\t2\n");
    }
}
