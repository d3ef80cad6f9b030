//! Number harvesting from free-form text.
//!
//! Input text is arbitrary: punctuation, separators, prose. Everything that
//! cannot be part of a number is turned into a delimiter, and the surviving
//! tokens are filtered through a strict numeric grammar. Tokens stay strings
//! so callers that need the original formatting (sequence prefix lookup)
//! keep it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of characters that can never be part of a number. The forward slash
/// is kept so fractional notation like `1/2` survives as a single token and
/// gets rejected by the grammar instead of leaking its halves.
static DELIMIT: Lazy<Regex> = Lazy::new(|| {
    #[expect(clippy::unwrap_used, reason = "literal pattern")]
    Regex::new(r"[^0-9./-]+").unwrap()
});

/// Accepted numeric grammar: optional sign, digits, at most one decimal
/// point, at least one digit after the point when present.
static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[expect(clippy::unwrap_used, reason = "literal pattern")]
    Regex::new(r"^[+-]?[0-9]*\.?[0-9]+$").unwrap()
});

/// Whether a string parses as a number under the accepted grammar.
///
/// Pure and locale-independent. Accepts `1`, `-4`, `3.5`, `.5`, `+7`;
/// rejects the empty string, bare signs, `5.`, `1.2.3` and anything
/// containing other characters.
#[must_use]
pub fn is_numeric_token(token: &str) -> bool {
    NUMERIC_TOKEN.is_match(token)
}

/// Extract every numeric token from arbitrary text, in input order.
///
/// Malformed input never errors; it just yields fewer tokens. A minus sign
/// in the middle of a chunk starts a new token, so `3.5-4` yields `3.5`
/// and `-4`.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<String> {
    let delimited = DELIMIT.replace_all(text, ";");

    delimited
        .split(';')
        .flat_map(split_at_inner_signs)
        .filter(|token| is_numeric_token(token))
        .map(str::to_owned)
        .collect()
}

/// Parse multi-line text into one row of floats per line.
///
/// Blank lines are preserved as empty rows; the row count always equals the
/// line count.
#[must_use]
pub fn parse_grid(text: &str) -> Vec<Vec<f64>> {
    normalize_lines(text)
        .split('\n')
        .map(|line| {
            extract_numbers(line)
                .iter()
                // cannot fail: every token passed the numeric grammar
                .filter_map(|token| token.parse::<f64>().ok())
                .collect()
        })
        .collect()
}

/// Canonicalize line endings to `\n`, strip a leading BOM and trailing
/// whitespace per line.
fn normalize_lines(text: &str) -> String {
    text.trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a delimiter-free chunk before every minus sign that is not in the
/// leading position. Chunks contain only `[0-9./-]`, so byte indexing is
/// safe.
fn split_at_inner_signs(chunk: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (idx, byte) in chunk.bytes().enumerate() {
        if byte == b'-' && idx > start {
            parts.push(&chunk[start..idx]);
            start = idx;
        }
    }
    if start < chunk.len() {
        parts.push(&chunk[start..]);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg(seed: &mut u64) -> u64 {
        *seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        *seed
    }

    #[test]
    fn collapses_delimiters_and_filters() {
        assert_eq!(extract_numbers("1,2;;3.5--4"), ["1", "2", "3.5", "-4"]);
    }

    #[test]
    fn keeps_input_order() {
        assert_eq!(
            extract_numbers("first 10, then -2.5 and 7"),
            ["10", "-2.5", "7"]
        );
    }

    #[test]
    fn lone_fraction_is_rejected_whole() {
        assert!(extract_numbers("1/2").is_empty());
        assert!(extract_numbers("only / here").is_empty());
    }

    #[test]
    fn grammar_accepts_and_rejects() {
        for ok in ["1", "-4", "3.5", ".5", "-.5", "+7", "007"] {
            assert!(is_numeric_token(ok), "{ok} should be numeric");
        }
        for bad in ["", "-", "+", "5.", "1.2.3", "1/2", "1e3", "--4"] {
            assert!(!is_numeric_token(bad), "{bad} should not be numeric");
        }
    }

    #[test]
    fn trailing_point_token_is_dropped() {
        assert_eq!(extract_numbers("0.5 .5 5."), ["0.5", ".5"]);
    }

    #[test]
    fn no_invalid_token_ever_leaks() {
        let pool: Vec<char> = "0123456789-./;, ab\n\t%".chars().collect();
        let mut seed = 0x5ea_c0de_u64;

        for _ in 0..200 {
            let len = (lcg(&mut seed) % 40) as usize;
            let text: String = (0..len)
                .map(|_| pool[(lcg(&mut seed) as usize) % pool.len()])
                .collect();

            for token in extract_numbers(&text) {
                assert!(
                    is_numeric_token(&token),
                    "invalid token {token:?} leaked from {text:?}"
                );
            }
        }
    }

    #[test]
    fn grid_preserves_blank_lines() {
        assert_eq!(
            parse_grid("1 2\n\n3"),
            vec![vec![1.0, 2.0], vec![], vec![3.0]]
        );
    }

    #[test]
    fn grid_normalizes_line_endings() {
        assert_eq!(
            parse_grid("1 2\r\n3\r4  "),
            vec![vec![1.0, 2.0], vec![3.0], vec![4.0]]
        );
    }

    #[test]
    fn grid_of_garbage_is_empty_rows() {
        assert_eq!(parse_grid("abc\nxyz"), vec![Vec::<f64>::new(), vec![]]);
    }
}
