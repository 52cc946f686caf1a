//! Order summaries and the messaging hand-off link.
//!
//! The dispatcher only constructs the deep link; following it is the
//! messaging endpoint's business and no feedback is captured.

use std::fmt::Write as _;

use crate::cart::Cart;
use crate::catalog::StaticWork;

const SHARE_URL: &str = "https://t.me/share/url?url=&text=";

/// Line-item summary for the whole cart, or `None` when it is empty.
pub fn cart_summary(cart: &Cart) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let details = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} ({}) x{} = {} ₽",
                line.work.title,
                line.work.category,
                line.quantity,
                format_amount(line.subtotal())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "Здравствуйте! Хочу заказать:\n\n{}\n\nОбщая сумма: {} ₽",
        details,
        format_amount(cart.total())
    ))
}

/// Order message for a single work from the detail view.
pub fn work_summary(work: &StaticWork) -> String {
    format!(
        "Здравствуйте! Хочу заказать проект \"{}\" из категории {}. Подробности: {}",
        work.title, work.category, work.description
    )
}

/// Deep link handing the URL-encoded message to the messaging endpoint.
pub fn share_link(message: &str) -> String {
    format!("{}{}", SHARE_URL, encode_component(message))
}

/// Thousands grouped with a space, the display-locale convention
/// (`85000` renders as `85 000`).
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

// Percent-encoding with the unreserved set of `encodeURIComponent`,
// which is what the share endpoint expects.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
