//! Text formatting helpers shared by the HTML views.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::WORK_DATE_FORMAT;

/// Formats an amount as dollars with two decimals and `,` thousands
/// separators. The sign follows the `$`.
///
/// # Example
///
/// ```
/// use earnings_analyzer::render::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123450, 2)), "$1,234.50");
/// assert_eq!(format_currency(Decimal::new(-5, 0)), "$-5.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let text = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("${sign}{}.{fraction}", group_thousands(whole))
}

/// Formats a date the same way `workDate` is written, e.g. `"Dec 07, 2024"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(WORK_DATE_FORMAT).to_string()
}

/// Escapes text for safe inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
