//! Default derived-data strategy.

use seqstat_core::{DerivedData, Materializer, canonical_join, term_fingerprint};
use seqstat_stats::{average, is_numeric_token, median};

/// Summary statistics over the numeric terms of a sequence, plus a
/// fingerprint of the canonical term string.
///
/// Non-numeric terms count toward `term_count` but are excluded from the
/// statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermStatsMaterializer;

impl Materializer for TermStatsMaterializer {
    fn materialize(&self, terms: &[String]) -> DerivedData {
        let numeric: Vec<f64> = terms
            .iter()
            .filter(|term| is_numeric_token(term))
            .filter_map(|term| term.parse::<f64>().ok())
            .collect();

        DerivedData {
            term_count: terms.len(),
            minimum: numeric.iter().copied().min_by(f64::total_cmp),
            maximum: numeric.iter().copied().max_by(f64::total_cmp),
            median: median(&numeric),
            average: average(&numeric),
            fingerprint: term_fingerprint(&canonical_join(terms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn summarizes_numeric_terms() {
        let data = TermStatsMaterializer.materialize(&terms(&["0", "1", "1", "2", "3", "5"]));

        assert_eq!(data.term_count, 6);
        assert_eq!(data.minimum, Some(0.0));
        assert_eq!(data.maximum, Some(5.0));
        assert!((data.median - 1.5).abs() < f64::EPSILON);
        assert!((data.average - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_terms_are_counted_but_excluded() {
        let data = TermStatsMaterializer.materialize(&terms(&["n/a", "4"]));

        assert_eq!(data.term_count, 2);
        assert_eq!(data.minimum, Some(4.0));
        assert_eq!(data.maximum, Some(4.0));
    }

    #[test]
    fn empty_sequence_degrades_to_zeroes() {
        let data = TermStatsMaterializer.materialize(&[]);

        assert_eq!(data.term_count, 0);
        assert_eq!(data.minimum, None);
        assert_eq!(data.maximum, None);
        assert!(data.median.abs() < f64::EPSILON);
        assert!(data.average.abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_materialization_is_identical() {
        let input = terms(&["1", "2", "-3.5"]);
        assert_eq!(
            TermStatsMaterializer.materialize(&input),
            TermStatsMaterializer.materialize(&input)
        );
    }
}
