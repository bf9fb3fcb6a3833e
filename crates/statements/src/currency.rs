//! US-dollar formatting of cent amounts.

pub const CENTS_PER_DOLLAR: u64 = 100;

/// Format an amount in cents as US currency, e.g. `173000` -> `$1,730.00`.
///
/// Cents are truncated to whole dollars before formatting, so the fraction is
/// always `.00`: `65099` renders as `$650.00`.
pub fn usd(amount_in_cents: u64) -> String {
    let dollars = (amount_in_cents / CENTS_PER_DOLLAR).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.00")
}
