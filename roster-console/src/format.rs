//! Display helpers

/// Salary cell text: `$90,000`, `$0`, or `N/A` when no salary is recorded
pub fn format_salary(salary: Option<i64>) -> String {
    match salary {
        Some(amount) => format!("${}", group_thousands(amount)),
        None => "N/A".to_string(),
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
