//! Amount formatting and balance masking for display.

use serde::{Deserialize, Serialize};

/// Placeholder shown instead of any amount while balances are hidden.
pub const MASK: &str = "••••";

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Separator preferences for rendered numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }
}

/// Everything needed to render an amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountFormat {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub negative_style: NegativeStyle,
    pub visibility: Visibility,
}

impl AmountFormat {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        Self {
            code,
            locale,
            ..Self::default()
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn display(&self, amount: f64) -> String {
        display_amount(amount, self.visibility, &self.code, &self.locale, self.negative_style)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        other => format!("{} ", other),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        _ => 2,
    }
}

/// Fixed-point rendering of `value` with the locale's separators.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let fixed = format!("{:.*}", usize::from(precision), value);
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", whole),
    };

    let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
    out.push_str(sign);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(locale.grouping_separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    negative_style: NegativeStyle,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        match negative_style {
            NegativeStyle::Sign => format!("-{}{}", symbol, body),
            NegativeStyle::Parentheses => format!("({}{})", symbol, body),
        }
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Renders `amount`, or [`MASK`] when balances are hidden.
///
/// Only the rendered text changes; stored figures are never altered.
pub fn display_amount(
    amount: f64,
    visibility: Visibility,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    negative_style: NegativeStyle,
) -> String {
    match visibility {
        Visibility::Shown => format_currency_value(amount, code, locale, negative_style),
        Visibility::Hidden => MASK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, -2850.0, 0), "-2,850");
        assert_eq!(format_number(&locale, 999.0, 0), "999");
        assert_eq!(format_number(&locale, 100000.0, 0), "100,000");
        assert_eq!(format_number(&locale, 0.5, 2), "0.50");
    }

    #[test]
    fn honours_custom_separators() {
        let locale = LocaleConfig {
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(format_number(&locale, 2145.67, 2), "2.145,67");
    }

    #[test]
    fn formats_negative_amounts() {
        let code = CurrencyCode::new("usd");
        let locale = LocaleConfig::default();
        assert_eq!(
            format_currency_value(-150.0, &code, &locale, NegativeStyle::Sign),
            "-$150.00"
        );
        assert_eq!(
            format_currency_value(-150.0, &code, &locale, NegativeStyle::Parentheses),
            "($150.00)"
        );
    }

    #[test]
    fn hidden_balances_are_masked() {
        let format = AmountFormat::default().with_visibility(Visibility::Hidden);
        assert_eq!(format.display(2850.0), MASK);
        assert_eq!(format.display(-1.0), MASK);

        let shown = AmountFormat::default();
        assert_eq!(shown.display(2850.0), "€2,850.00");
    }

    #[test]
    fn visibility_follows_hidden_flag() {
        assert_eq!(Visibility::from_hidden(true), Visibility::Hidden);
        assert_eq!(Visibility::from_hidden(false), Visibility::Shown);
    }
}
