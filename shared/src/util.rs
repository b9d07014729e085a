use rust_decimal::Decimal;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a menu price the way the site prints it: `₦2,500` / `₦1,250.50`.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac {
        Some(f) => format!("{}₦{}.{:0<2}", sign, grouped, f),
        None => format!("{}₦{}", sign, grouped),
    }
}
