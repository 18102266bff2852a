use chrono::DateTime;

/// Render a price for display.
///
/// Rupees use the Indian digit grouping with no fraction (`₹1,23,457`).
/// Dollars, euros and pounds get their symbol with 0-2 fraction digits.
/// Any other code is printed in front of the amount.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let amount = amount.abs();

    match currency {
        "INR" | "₹" => format!("{}₹{}", sign, group_indian(amount.round() as u64)),
        "USD" => format!("{}${}", sign, western_amount(amount)),
        "EUR" => format!("{}€{}", sign, western_amount(amount)),
        "GBP" => format!("{}£{}", sign, western_amount(amount)),
        code => format!("{}{} {}", sign, code, western_amount(amount)),
    }
}

/// Render a departure time as `h:MM AM`.
///
/// Accepts either an RFC 3339 timestamp or a bare `HH:MM`. Input that is
/// neither comes back unchanged.
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    if time.contains('T') {
        return match DateTime::parse_from_rfc3339(time) {
            Ok(dt) => dt.format("%I:%M %p").to_string(),
            Err(_) => time.to_string(),
        };
    }

    let mut parts = time.splitn(2, ':');
    let hours = match parts.next().and_then(|h| h.trim().parse::<u32>().ok()) {
        Some(h) => h,
        None => return time.to_string(),
    };
    let minutes = parts.next().filter(|m| !m.is_empty()).unwrap_or("00");

    let meridiem = if hours % 24 >= 12 { "PM" } else { "AM" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{} {}", hour, minutes, meridiem)
}

fn western_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = group_western(cents / 100);

    match cents % 100 {
        0 => whole,
        frac if frac % 10 == 0 => format!("{}.{}", whole, frac / 10),
        frac => format!("{}.{:02}", whole, frac),
    }
}

fn group_western(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Last three digits together, then pairs: 12,34,567.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
