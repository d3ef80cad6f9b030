//! Parsing of the `stripped` sequence exchange format.
//!
//! One sequence per line: the external id, whitespace, then the terms with
//! leading and trailing delimiters (`A000045 ,0,1,1,2,3,5,...`). Lines
//! starting with `#` are comments.

use std::io::{self, BufRead};

/// One parsed line of a stripped-format file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedEntry {
    pub a_id: String,
    pub terms: Vec<String>,
}

/// Parse a single stripped-format line.
///
/// Comment lines, blank lines and lines without a well-formed id or at
/// least one term yield `None`.
#[must_use]
pub fn parse_stripped_line(line: &str) -> Option<StrippedEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (a_id, rest) = line.split_once(char::is_whitespace)?;
    if !is_a_id(a_id) {
        return None;
    }

    let terms: Vec<String> = rest
        .trim()
        .trim_matches(',')
        .split(',')
        .filter(|term| !term.is_empty())
        .map(str::to_owned)
        .collect();
    if terms.is_empty() {
        return None;
    }

    Some(StrippedEntry {
        a_id: a_id.to_owned(),
        terms,
    })
}

/// Read every well-formed entry from a stripped-format stream, skipping the
/// rest.
pub fn read_stripped<R: BufRead>(reader: R) -> io::Result<Vec<StrippedEntry>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        if let Some(entry) = parse_stripped_line(&line?) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// `A` followed by digits only.
fn is_a_id(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next() == Some('A') && candidate.len() > 1 && chars.all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_a_sequence_line() {
        let entry = parse_stripped_line("A000045 ,0,1,1,2,3,5,8,13,");
        assert_eq!(
            entry,
            Some(StrippedEntry {
                a_id: "A000045".to_string(),
                terms: ["0", "1", "1", "2", "3", "5", "8", "13"]
                    .iter()
                    .map(|t| (*t).to_owned())
                    .collect(),
            })
        );
    }

    #[test]
    fn skips_comments_and_blanks() {
        assert_eq!(parse_stripped_line("# OEIS stripped file"), None);
        assert_eq!(parse_stripped_line(""), None);
        assert_eq!(parse_stripped_line("   "), None);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_stripped_line("B000045 ,1,2,3,"), None);
        assert_eq!(parse_stripped_line("A ,1,2,3,"), None);
        assert_eq!(parse_stripped_line("A0000x5 ,1,2,3,"), None);
    }

    #[test]
    fn rejects_lines_without_terms() {
        assert_eq!(parse_stripped_line("A000045"), None);
        assert_eq!(parse_stripped_line("A000045 ,,,"), None);
    }

    #[test]
    fn tolerates_tab_separators() {
        let entry = parse_stripped_line("A000290\t,0,1,4,9,16,");
        assert_eq!(entry.map(|e| e.terms.len()), Some(5));
    }

    #[test]
    fn reads_a_whole_stream() {
        let file = "# header\nA000045 ,0,1,1,2,3,5,\ngarbage line\nA000290 ,0,1,4,9,\n";
        let entries = read_stripped(Cursor::new(file)).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].a_id, "A000045");
        assert_eq!(entries[1].a_id, "A000290");
    }
}
