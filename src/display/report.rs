//! Report formatting for terminal output
//!
//! Renders the dashboard: labeled metrics, the category breakdown as
//! proportional bars, and the monthly income/expense comparison as grouped
//! bars.

use crate::config::Settings;
use crate::models::Money;
use crate::reports::{CategoryBreakdown, DashboardReport, MonthlyComparison, Totals};

use super::transaction::format_transaction_table;

/// Width of the bar portion of a chart row
pub const BAR_WIDTH: usize = 30;

/// Format a labeled currency metric
pub fn format_metric(label: &str, amount: Money, symbol: &str) -> String {
    format!("{:<10} {:>16}", format!("{}:", label), amount.format_with_symbol(symbol))
}

/// Format the three headline metrics
pub fn format_totals(totals: &Totals, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_metric("Balance", totals.balance, symbol));
    output.push('\n');
    output.push_str(&format_metric("Income", totals.income, symbol));
    output.push('\n');
    output.push_str(&format_metric("Expenses", totals.expense, symbol));
    output.push('\n');
    output
}

/// Format the expense breakdown, one proportional bar per category
pub fn format_category_breakdown(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No expenses in this period.\n".to_string();
    }

    let mut output = String::new();
    for (category, amount) in breakdown.sorted_by_amount() {
        let share = breakdown.share(category);
        output.push_str(&format!(
            "{:<10} {} {:>6} {:>14}\n",
            category.name(),
            format_bar(share, 100.0, BAR_WIDTH),
            format_percentage(share),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format income vs. expense per month as grouped bars
pub fn format_monthly_comparison(monthly: &MonthlyComparison, symbol: &str) -> String {
    if monthly.is_empty() {
        return "No dated transactions in this period.\n".to_string();
    }

    let max = monthly.max_amount().as_f64();
    let mut output = String::new();
    for row in monthly.rows() {
        let month = row.month.format("%Y-%m").to_string();
        output.push_str(&format!(
            "{:<8} {:<8} {} {:>14}\n",
            month,
            "Income",
            format_bar(row.income.as_f64(), max, BAR_WIDTH),
            row.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<8} {:<8} {} {:>14}\n",
            "",
            "Expense",
            format_bar(row.expense.as_f64(), max, BAR_WIDTH),
            row.expense.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format the full dashboard for a report
pub fn format_dashboard(report: &DashboardReport<'_>, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let width = 64;
    let mut output = String::new();

    output.push_str(&format_header("Financial Summary", width));
    output.push('\n');
    output.push_str(&format!(
        "Period: {} to {}\n",
        report.range.start.format(&settings.date_format),
        report.range.end.format(&settings.date_format)
    ));
    output.push_str(&double_separator(width));
    output.push('\n');
    output.push_str(&format_totals(&report.totals, symbol));

    output.push('\n');
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format_category_breakdown(&report.by_category, symbol));

    output.push('\n');
    output.push_str("Income vs. Expenses by Month\n");
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format_monthly_comparison(&report.by_month, symbol));

    output.push('\n');
    output.push_str("Transactions\n");
    output.push_str(&format_transaction_table(report.view.iter().copied(), settings));

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
