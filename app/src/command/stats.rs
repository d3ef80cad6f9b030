//! Descriptive statistics over numbers harvested from text.

use std::io::Read;

use seqstat_stats::{average, extract_numbers, median, parse_grid};

/// Input parameters for the Stats command strategy.
#[derive(Debug, Clone)]
pub struct StatsInput {
    /// Text to analyze; stdin is read when absent
    pub text: Option<String>,
    /// Analyze line by line instead of as one flat collection
    pub grid: bool,
}

/// Strategy for computing descriptive statistics.
///
/// Extracts every numeric token from the input and prints count, median and
/// average; in grid mode each input line becomes its own row of statistics.
///
/// # Design
/// - Zero-allocation: No heap allocation beyond what business logic requires
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state, all input via `StatsInput`
#[derive(Debug, Clone, Copy)]
pub struct StatsStrategy;

impl super::CommandStrategy for StatsStrategy {
    type Input = StatsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = match input.text {
            Some(text) => text,
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        if input.grid {
            for (idx, row) in parse_grid(&text).iter().enumerate() {
                println!(
                    "row {:>3}: count={} median={} average={}",
                    idx + 1,
                    row.len(),
                    median(row),
                    average(row)
                );
            }
            return Ok(());
        }

        let tokens = extract_numbers(&text);
        let values: Vec<f64> = tokens
            .iter()
            .filter_map(|token| token.parse().ok())
            .collect();

        println!("numbers: {}", tokens.join(", "));
        println!("count:   {}", values.len());
        println!("median:  {}", median(&values));
        println!("average: {}", average(&values));
        Ok(())
    }
}
