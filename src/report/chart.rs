use std::fmt;

use tracing::debug;

use crate::{config::ReportSettings, errors::LedgerError, ledger::LedgerView};

pub const CHART_TITLE: &str = "Percentage spent by category";
const CELL_WIDTH: usize = 3;
const LEFT_MARGIN: &str = "    ";

/// One bar of the spend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartColumn {
    pub name: String,
    /// Sum of the category's withdrawals. Never positive.
    pub withdrawn: f64,
    /// Share of total withdrawals, rounded down to a multiple of ten.
    pub bucket: u32,
}

/// Relative spending across an ordered set of categories.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendChart {
    columns: Vec<ChartColumn>,
}

impl SpendChart {
    /// Fails with [`LedgerError::NoSpending`] when the categories hold no
    /// withdrawals at all, since every share would be a division by zero.
    pub fn from_categories<C: LedgerView>(categories: &[C]) -> Result<Self, LedgerError> {
        let withdrawn: Vec<f64> = categories.iter().map(|c| c.total_withdrawals()).collect();
        let total: f64 = withdrawn.iter().sum();
        if total == 0.0 {
            return Err(LedgerError::NoSpending);
        }

        let columns = categories
            .iter()
            .zip(withdrawn)
            .map(|(category, withdrawn)| {
                let bucket = ((withdrawn / total) * 10.0).trunc() as u32 * 10;
                debug!(category = %category.name(), withdrawn, bucket, "spend bucket");
                ChartColumn {
                    name: category.name().to_string(),
                    withdrawn,
                    bucket,
                }
            })
            .collect();
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ChartColumn] {
        &self.columns
    }

    pub fn render(&self, settings: &ReportSettings) -> String {
        let bar = format!(" {} ", settings.bar_glyph);
        let blank = " ".repeat(CELL_WIDTH);

        let mut out = String::from(CHART_TITLE);
        out.push('\n');

        for level in (0..=100u32).rev().step_by(10) {
            out.push_str(&format!("{:>3}|", level));
            for column in &self.columns {
                out.push_str(if column.bucket >= level { &bar } else { &blank });
            }
            out.push_str(" \n");
        }

        out.push_str(LEFT_MARGIN);
        out.push_str(&"-".repeat(CELL_WIDTH * self.columns.len()));
        out.push_str("-\n");

        let names: Vec<Vec<char>> = self
            .columns
            .iter()
            .map(|column| column.name.chars().collect())
            .collect();
        let depth = names.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..depth {
            out.push_str(LEFT_MARGIN);
            for name in &names {
                match name.get(row) {
                    Some(ch) => {
                        out.push(' ');
                        out.push(*ch);
                        out.push(' ');
                    }
                    None => out.push_str(&blank),
                }
            }
            out.push_str(" \n");
        }

        // No line break after the last row.
        out.pop();
        out
    }
}

impl fmt::Display for SpendChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportSettings::default()))
    }
}

/// Renders the spend chart for `categories` with default settings.
pub fn create_spend_chart<C: LedgerView>(categories: &[C]) -> Result<String, LedgerError> {
    Ok(SpendChart::from_categories(categories)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;

    fn spent(name: &str, amounts: &[f64]) -> Category {
        let mut category = Category::new(name);
        category.deposit(1000.0, "deposit");
        for amount in amounts {
            assert!(category.withdraw(*amount, ""));
        }
        category
    }

    #[test]
    fn buckets_round_down_to_tens() {
        let food = spent("Food", &[100.0, 5.55]);
        let auto = spent("Auto", &[32.0]);
        let chart = SpendChart::from_categories(&[food, auto]).expect("chart");

        let buckets: Vec<u32> = chart.columns().iter().map(|c| c.bucket).collect();
        assert_eq!(buckets, vec![70, 20]);
        assert_eq!(chart.columns()[1].withdrawn, -32.0);
    }

    #[test]
    fn sole_spender_reaches_one_hundred() {
        let food = spent("Food", &[12.0]);
        let idle = Category::new("Idle");
        let chart = SpendChart::from_categories(&[&food, &idle]).expect("chart");
        assert_eq!(chart.columns()[0].bucket, 100);
        assert_eq!(chart.columns()[1].bucket, 0);
    }

    #[test]
    fn zero_spending_is_an_error() {
        let mut idle = Category::new("Idle");
        idle.deposit(50.0, "deposit");
        assert!(matches!(
            SpendChart::from_categories(&[idle]),
            Err(LedgerError::NoSpending)
        ));
        assert!(matches!(
            create_spend_chart::<Category>(&[]),
            Err(LedgerError::NoSpending)
        ));
    }

    #[test]
    fn rows_levels_and_separator_line_up() {
        let chart = create_spend_chart(&[spent("Food", &[10.0]), spent("Auto", &[10.0])])
            .expect("chart");
        let lines: Vec<&str> = chart.split('\n').collect();

        assert_eq!(lines[0], CHART_TITLE);
        assert_eq!(lines[1], "100|       ");
        assert_eq!(lines[6], " 50| o  o  ");
        assert_eq!(lines[11], "  0| o  o  ");
        assert_eq!(lines[12], "    -------");
        assert_eq!(lines[13], "     F  A  ");
        assert_eq!(lines.len(), 13 + 4);
        assert!(!chart.ends_with('\n'));
    }

    #[test]
    fn custom_glyph_is_used_for_bars() {
        let settings = ReportSettings {
            bar_glyph: '#',
            ..ReportSettings::default()
        };
        let chart = SpendChart::from_categories(&[spent("X", &[1.0])])
            .expect("chart")
            .render(&settings);
        assert!(chart.contains("100| #  \n"));
        assert!(chart.ends_with("     X  "));
    }
}
