// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop every whitespace character, including NBSP used as a group separator.
pub fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keep only ASCII digits: "3. emelet" -> "3", "12/B" -> "12".
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Lowercase for name matching. Unicode-aware so "ELÉRHETŐ" matches "elérhető".
pub fn fold_case(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_helpers() {
        assert_eq!(normalize_ws("  a \t b\n"), "a b");
        assert_eq!(strip_ws("1\u{a0}234 ,5"), "1234,5");
    }

    #[test]
    fn digits_only_discards_everything_else() {
        assert_eq!(digits_only("3. emelet"), "3");
        assert_eq!(digits_only("1/2"), "12");
        assert_eq!(digits_only("földszint"), "");
    }

    #[test]
    fn fold_case_handles_accents() {
        assert_eq!(fold_case(" ELÉRHETŐ "), "elérhető");
    }
}
