use chrono::NaiveDate;

/// `1250.5` -> `"$1,250.50"`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn format_optional_money(amount: Option<f64>) -> String {
    amount.map(format_money).unwrap_or_else(|| "-".to_string())
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_capacity(capacity: Option<u32>) -> String {
    match capacity {
        Some(1) => "1 huésped".to_string(),
        Some(n) => format!("{} huéspedes", n),
        None => "-".to_string(),
    }
}
