use super::layout::{center, format_plain_decimal, truncate_chars};
use crate::{
    config::{AmountStyle, ReportSettings},
    ledger::{Category, Transaction},
};

pub const TITLE_WIDTH: usize = 30;
pub const DESCRIPTION_WIDTH: usize = 23;
pub const AMOUNT_COLUMN: usize = 24;
pub const AMOUNT_WIDTH: usize = 7;

/// Renders the title line, one line per ledger entry, and the running
/// balance as the total.
pub fn render_summary(category: &Category, settings: &ReportSettings) -> String {
    let mut out = center(category.name(), TITLE_WIDTH, settings.title_fill);
    out.push('\n');
    for entry in category.ledger() {
        out.push_str(&entry_line(entry, settings.amount_style));
        out.push('\n');
    }
    out.push_str("Total: ");
    out.push_str(&format_plain_decimal(category.balance()));
    out
}

fn entry_line(entry: &Transaction, style: AmountStyle) -> String {
    let description = truncate_chars(&entry.description, DESCRIPTION_WIDTH);
    let amount = format!("{:.2}", entry.amount);
    match style {
        AmountStyle::Unclamped => {
            let pad = AMOUNT_COLUMN - description.chars().count();
            format!("{}{}{}", description, " ".repeat(pad), amount)
        }
        AmountStyle::Capped => {
            let amount = truncate_chars(&amount, AMOUNT_WIDTH);
            format!(
                "{:<desc$}{:>amt$}",
                description,
                amount,
                desc = DESCRIPTION_WIDTH,
                amt = AMOUNT_WIDTH
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclamped_pads_description_to_column_24() {
        let line = entry_line(&Transaction::deposit(900.0, "deposit"), AmountStyle::Unclamped);
        assert_eq!(line, "deposit                 900.00");
        assert_eq!(line.find("900.00"), Some(AMOUNT_COLUMN));
    }

    #[test]
    fn unclamped_keeps_one_space_after_full_description() {
        let line = entry_line(
            &Transaction::withdrawal(45.67, "milk, cheese, eggs, bread"),
            AmountStyle::Unclamped,
        );
        assert_eq!(line, "milk, cheese, eggs, bre -45.67");
    }

    #[test]
    fn unclamped_does_not_cap_wide_amounts() {
        let line = entry_line(
            &Transaction::deposit(1234567.891, "bonus"),
            AmountStyle::Unclamped,
        );
        assert_eq!(line, "bonus                   1234567.89");
    }

    #[test]
    fn capped_right_aligns_and_cuts_to_seven() {
        let narrow = entry_line(&Transaction::withdrawal(5.0, "gum"), AmountStyle::Capped);
        assert_eq!(narrow, "gum                      -5.00");
        assert_eq!(narrow.chars().count(), 30);

        let wide = entry_line(
            &Transaction::deposit(1234567.891, "bonus"),
            AmountStyle::Capped,
        );
        assert_eq!(wide, "bonus                  1234567");
    }

    #[test]
    fn total_line_prints_running_balance() {
        let mut category = Category::new("Misc");
        for _ in 0..3 {
            category.deposit(0.1, "dime");
        }
        let summary = render_summary(&category, &ReportSettings::default());
        assert!(summary.ends_with("\nTotal: 0.30000000000000004"));
        assert_eq!(summary.lines().count(), 1 + 3 + 1);
    }

    #[test]
    fn empty_description_still_reaches_amount_column() {
        let line = entry_line(&Transaction::deposit(1.5, ""), AmountStyle::Unclamped);
        assert_eq!(line, format!("{}1.50", " ".repeat(24)));
    }
}
