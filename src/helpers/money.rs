//! Money formatting

/// Format an amount of cents as a US-dollar display string
///
/// The sign goes before the currency symbol and the integer part is
/// grouped by thousands. Zero is always `$0.00`.
///
/// # Examples
/// ```
/// use evolve_ui::helpers::format_money;
///
/// assert_eq!(format_money(1234), "$12.34");
/// assert_eq!(format_money(-500), "-$5.00");
/// assert_eq!(format_money(123456789), "$1,234,567.89");
/// ```
pub fn format_money(amount: i64) -> String {
    // unsigned_abs keeps i64::MIN in range
    let magnitude = amount.unsigned_abs();
    let sign = if amount < 0 { "-" } else { "" };

    format!(
        "{}${}.{:02}",
        sign,
        format_number(magnitude / 100),
        magnitude % 100
    )
}

/// Group the digits of a count by thousands, e.g. `15234` -> `15,234`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
