use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// ISO 4217 codes accepted for investments and budgets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Inr,
    Jpy,
    Gbp,
    Aud,
    Cad,
    Chf,
    Cny,
    Sek,
    Nzd,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 11] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Inr,
        CurrencyCode::Jpy,
        CurrencyCode::Gbp,
        CurrencyCode::Aud,
        CurrencyCode::Cad,
        CurrencyCode::Chf,
        CurrencyCode::Cny,
        CurrencyCode::Sek,
        CurrencyCode::Nzd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Nzd => "NZD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Inr => "₹",
            CurrencyCode::Jpy => "¥",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Aud => "A$",
            CurrencyCode::Cad => "CA$",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Cny => "CN¥",
            CurrencyCode::Sek => "kr",
            CurrencyCode::Nzd => "NZ$",
        }
    }

    pub fn minor_units(&self) -> u8 {
        match self {
            CurrencyCode::Jpy => 0,
            _ => 2,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode::Usd
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim();
        CurrencyCode::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| LedgerError::Validation(format!("unsupported currency `{raw}`")))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::Short,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
    Long,
}

/// Formats `value` with `precision` decimals and locale separators.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = format!("{sign}{}", group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders an amount in `code` using the symbol/code and negative style options.
pub fn format_currency_value(
    amount: f64,
    code: CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let mut body = format_number(locale, amount.abs(), code.minor_units());
    if amount < 0.0 {
        body = match options.negative_style {
            NegativeStyle::Sign => format!("-{body}"),
            NegativeStyle::Parentheses => format!("({body})"),
        };
    }
    match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", code.symbol(), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
        CurrencyDisplay::SymbolAndCode => {
            format!("{}{} ({})", code.symbol(), body, code.as_str())
        }
    }
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(date.month()),
            date.year()
        ),
        DateFormatStyle::Long => format!(
            "{} {} {}, {}",
            date.weekday(),
            month_label(date.month()),
            date.day(),
            date.year()
        ),
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
