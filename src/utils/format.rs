//! Console number formatting.

/// Formats a count with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use leak_audit_tools::utils::format::format_number;
///
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(2_400_000), "2,400,000");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(54_321), "54,321");
        assert_eq!(format_number(6_543_210), "6,543,210");
    }
}
