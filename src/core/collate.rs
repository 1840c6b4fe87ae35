// src/core/collate.rs
//
// Hungarian-flavoured string ordering for the table tie-break.
//
// Three levels, compared in turn over the whole string:
// - primary: base letter. Acute accents fold onto their vowel (a = á),
//   but ö/ő sort after o and ü/ű after u as separate letters.
//   Whitespace and punctuation < digits < letters < everything else.
//   The digraphs cs, dz, dzs, gy, ly, ny, sz, ty, zs are single letters
//   that sort after their first letter (c < cs < d). A doubled digraph
//   (ssz, ccs, ddzs, ...) counts as the digraph twice.
// - secondary: accent (plain before accented).
// - tertiary: case (lower before upper), taken from the first character.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Weight {
    primary: u32,
    secondary: u8,
    tertiary: u8,
}

const PUNCT_BASE: u32 = 0x100;
const DIGIT_BASE: u32 = 0x1000;
const LETTER_BASE: u32 = 0x2000;
const OTHER_BASE: u32 = 0x10_0000;

fn letter(base: char, step: u32) -> u32 {
    LETTER_BASE + (base as u32 - 'a' as u32) * 4 + step
}

fn weight(ch: char) -> Weight {
    let tertiary = if ch.is_uppercase() { 1 } else { 0 };
    let lower = ch.to_lowercase().next().unwrap_or(ch);

    let (primary, secondary) = match lower {
        'a'..='z' => (letter(lower, 0), 0),
        'á' => (letter('a', 0), 1),
        'é' => (letter('e', 0), 1),
        'í' => (letter('i', 0), 1),
        'ó' => (letter('o', 0), 1),
        'ö' => (letter('o', 2), 0),
        'ő' => (letter('o', 2), 1),
        'ú' => (letter('u', 0), 1),
        'ü' => (letter('u', 2), 0),
        'ű' => (letter('u', 2), 1),
        '0'..='9' => (DIGIT_BASE + (lower as u32 - '0' as u32), 0),
        c if c.is_whitespace() => (PUNCT_BASE, 0),
        c if c.is_ascii_punctuation() => (PUNCT_BASE + 1 + c as u32, 0),
        c => (OTHER_BASE + c as u32, 0),
    };
    Weight { primary, secondary, tertiary }
}

/// Longest first, so dzs wins over dz.
const DIGRAPHS: &[(&str, char, u32)] = &[
    ("dzs", 'd', 2),
    ("cs", 'c', 1),
    ("dz", 'd', 1),
    ("gy", 'g', 1),
    ("ly", 'l', 1),
    ("ny", 'n', 1),
    ("sz", 's', 1),
    ("ty", 't', 1),
    ("zs", 'z', 1),
];

/// Primary weight, chars consumed and whether the digraph is doubled.
fn contraction(rest: &[char]) -> Option<(u32, usize, bool)> {
    for &(graph, base, step) in DIGRAPHS {
        let g: Vec<char> = graph.chars().collect();
        if rest.len() > g.len() && rest[0] == g[0] && rest[1..].starts_with(&g) {
            return Some((letter(base, step), g.len() + 1, true));
        }
        if rest.starts_with(&g) {
            return Some((letter(base, step), g.len(), false));
        }
    }
    None
}

fn weights(s: &str) -> Vec<Weight> {
    let chars: Vec<char> = s.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match contraction(&lower[i..]) {
            Some((primary, used, doubled)) => {
                let w = Weight {
                    primary,
                    secondary: 0,
                    tertiary: u8::from(chars[i].is_uppercase()),
                };
                if doubled {
                    out.push(w);
                }
                out.push(w);
                i += used;
            }
            None => {
                out.push(weight(chars[i]));
                i += 1;
            }
        }
    }
    out
}

fn level_cmp<F, K>(a: &[Weight], b: &[Weight], key: F) -> Ordering
where
    F: Fn(&Weight) -> K,
    K: Ord,
{
    a.iter().map(&key).cmp(b.iter().map(&key))
}

/// Locale-aware comparison, total and deterministic.
pub fn compare(a: &str, b: &str) -> Ordering {
    let wa = weights(a);
    let wb = weights(b);

    level_cmp(&wa, &wb, |w| w.primary)
        .then_with(|| level_cmp(&wa, &wb, |w| w.secondary))
        .then_with(|| level_cmp(&wa, &wb, |w| w.tertiary))
        // Identical weights from different code points (e.g. two unknown
        // symbols): fall back to code point order so sorting stays total.
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering::*;

    #[test]
    fn accents_are_secondary() {
        assert_eq!(compare("ál", "ak"), Greater);
        assert_eq!(compare("ár", "arany"), Less);
        assert_eq!(compare("a", "á"), Less);
        assert_eq!(compare("ágy", "agy"), Greater);
    }

    #[test]
    fn digraphs_follow_their_first_letter() {
        assert_eq!(compare("csa", "cz"), Greater);
        assert_eq!(compare("cz", "d"), Less);
        assert_eq!(compare("cs", "d"), Less);
        assert_eq!(compare("sz", "sa"), Greater);
        assert_eq!(compare("zs", "zz"), Greater);
        assert_eq!(compare("dzsa", "dzu"), Greater);
        assert_eq!(compare("ágy", "agz"), Greater);
        assert_eq!(compare("Csaba", "Cukor"), Greater);
    }

    #[test]
    fn digraph_case_comes_from_first_char() {
        assert_eq!(compare("csak", "Csak"), Less);
        assert_eq!(compare("Csak", "csal"), Less);
    }

    #[test]
    fn doubled_digraph_counts_twice() {
        // ssz = sz + sz, so the third position compares sz with b
        assert_eq!(compare("hosszú", "hoszb"), Greater);
        assert_eq!(compare("annyi", "anyb"), Greater);
    }

    #[test]
    fn umlauts_are_separate_letters() {
        assert_eq!(compare("ö", "p"), Less);
        assert_eq!(compare("ö", "oz"), Greater);
        assert_eq!(compare("ü", "uz"), Greater);
        assert_eq!(compare("ű", "v"), Less);
    }

    #[test]
    fn case_is_tertiary() {
        assert_eq!(compare("a1", "A1"), Less);
        assert_eq!(compare("A1", "a2"), Less);
    }

    #[test]
    fn digits_before_letters() {
        assert_eq!(compare("A12", "A2"), Less);
        assert_eq!(compare("9", "a"), Less);
        assert_eq!(compare("A 1", "A1"), Less);
    }

    #[test]
    fn equal_strings() {
        assert_eq!(compare("B/3", "B/3"), Equal);
        assert_eq!(compare("", ""), Equal);
        assert_eq!(compare("", "a"), Less);
    }
}
