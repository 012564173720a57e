//! Plain-text views over ledger records and aggregates.

pub mod table;

use colored::Colorize;

use crate::config::Config;
use crate::core::services::{BudgetComparison, RiskMetric};
use crate::currency::{
    format_currency_value, format_date, format_number, CurrencyCode, FormatOptions, LocaleConfig,
};
use crate::ledger::{BudgetRecord, InvestmentRecord};

pub use table::{Alignment, Table, TableColumn};

pub const NO_INVESTMENTS: &str = "No investments added yet.";
pub const NO_BUDGETS: &str = "No budgets added yet.";
pub const NO_RISK_DATA: &str = "No investments with an expected return yet.";

const NAME_WIDTH: usize = 24;
const EMPTY_CELL: &str = "-";

/// Formatting preferences shared by every view.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub locale: LocaleConfig,
    pub format: FormatOptions,
    pub display_currency: CurrencyCode,
    pub color: bool,
    pub plain: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReportStyle {
    fn from(config: &Config) -> Self {
        Self {
            locale: config.locale.clone(),
            format: config.format.clone(),
            display_currency: config.display_currency,
            color: config.color,
            plain: false,
        }
    }
}

impl ReportStyle {
    fn table(&self, columns: Vec<TableColumn>) -> Table {
        let mut table = Table::new(columns);
        table.plain = self.plain;
        table
    }

    fn amount(&self, value: f64, currency: CurrencyCode) -> String {
        format_number(&self.locale, value, currency.minor_units())
    }
}

pub fn investments_table(records: &[InvestmentRecord], style: &ReportStyle) -> String {
    if records.is_empty() {
        return NO_INVESTMENTS.to_string();
    }
    let mut table = style.table(vec![
        TableColumn::new("Name", Alignment::Left).max_width(NAME_WIDTH),
        TableColumn::new("Type", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Currency", Alignment::Left),
        TableColumn::new("Stock", Alignment::Left),
    ]);
    for record in records {
        table.push_row(vec![
            record.name.clone(),
            record.kind.label().to_string(),
            style.amount(record.amount_invested, record.currency),
            format_date(&style.locale, record.date),
            record.currency.to_string(),
            record
                .stock_name
                .clone()
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        ]);
    }
    table.render()
}

/// Budgets with their spending; over-budget remainders are shown in red when colour is on.
pub fn budgets_table(records: &[BudgetRecord], style: &ReportStyle) -> String {
    if records.is_empty() {
        return NO_BUDGETS.to_string();
    }
    let mut table = style.table(vec![
        TableColumn::new("Category", Alignment::Left).max_width(NAME_WIDTH),
        TableColumn::new("Budget", Alignment::Right),
        TableColumn::new("Spent", Alignment::Right),
        TableColumn::new("Remaining", Alignment::Right),
        TableColumn::new("Currency", Alignment::Left),
        TableColumn::new("Date", Alignment::Left),
    ]);
    for record in records {
        let remaining = style.amount(record.remaining(), record.currency);
        table.push_row(vec![
            record.category.clone(),
            style.amount(record.budget_amount, record.currency),
            style.amount(record.spent(), record.currency),
            highlight_overrun(remaining, record.is_over_budget(), style),
            record.currency.to_string(),
            format_date(&style.locale, record.date),
        ]);
    }
    table.render()
}

pub fn budget_comparison_table(groups: &[BudgetComparison], style: &ReportStyle) -> String {
    if groups.is_empty() {
        return NO_BUDGETS.to_string();
    }
    let mut table = style.table(vec![
        TableColumn::new("Category", Alignment::Left).max_width(NAME_WIDTH),
        TableColumn::new("Budget", Alignment::Right),
        TableColumn::new("Spent", Alignment::Right),
        TableColumn::new("Remaining", Alignment::Right),
        TableColumn::new("Currencies", Alignment::Left),
    ]);
    for group in groups {
        let currencies: Vec<&str> = group.currencies.iter().map(|c| c.as_str()).collect();
        let remaining = format_number(&style.locale, group.remaining(), 2);
        table.push_row(vec![
            group.category.clone(),
            format_number(&style.locale, group.budget_amount, 2),
            format_number(&style.locale, group.spent, 2),
            highlight_overrun(remaining, group.is_over_budget(), style),
            currencies.join(", "),
        ]);
    }
    table.render()
}

pub fn risk_table(metrics: &[RiskMetric], style: &ReportStyle) -> String {
    if metrics.is_empty() {
        return NO_RISK_DATA.to_string();
    }
    let mut table = style.table(vec![
        TableColumn::new("Name", Alignment::Left).max_width(NAME_WIDTH),
        TableColumn::new("Expected Return %", Alignment::Right),
        TableColumn::new("Volatility", Alignment::Right),
        TableColumn::new("Sharpe", Alignment::Right),
    ]);
    for metric in metrics {
        table.push_row(vec![
            metric.name.clone(),
            format_number(&style.locale, metric.expected_return_percent, 2),
            format_number(&style.locale, metric.volatility, 2),
            metric
                .sharpe_ratio
                .map(|ratio| format_number(&style.locale, ratio, 2))
                .unwrap_or_else(|| "n/a".to_string()),
        ]);
    }
    table.render()
}

pub fn total_invested_line(total: f64, style: &ReportStyle) -> String {
    format!(
        "Total Amount Invested: {}",
        format_currency_value(total, style.display_currency, &style.locale, &style.format)
    )
}

fn highlight_overrun(cell: String, over_budget: bool, style: &ReportStyle) -> String {
    if over_budget && style.color {
        cell.as_str().red().to_string()
    } else {
        cell
    }
}
