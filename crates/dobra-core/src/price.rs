//! Brazilian-locale number formatting for advisory prices.

use rust_decimal::{Decimal, RoundingStrategy};

/// Most fraction digits shown, matching the `pt-BR` default number format.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an amount the way `pt-BR` renders plain numbers: `.` between
/// thousands, `,` before the fraction, at most three fraction digits and no
/// trailing zeros.
///
/// `1234.5` becomes `"1.234,5"`, `120` stays `"120"`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Shopper-facing price line, e.g. `"A partir de R$ 1.200"`.
#[must_use]
pub fn price_label(amount: Decimal) -> String {
    format!("A partir de R$ {}", format_brl(amount))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
