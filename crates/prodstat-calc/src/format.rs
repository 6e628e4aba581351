//! 報表數值格式化

use rust_decimal::{Decimal, RoundingStrategy};

/// 格式化數量：千分位以空格分隔，整數不帶小數，其餘保留兩位小數
///
/// ```
/// use prodstat_calc::format_quantity;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_quantity(Decimal::from(1_234_567)), "1 234 567");
/// assert_eq!(format_quantity(Decimal::new(1_234_567, 3)), "1 234.57");
/// ```
pub fn format_quantity(value: Decimal) -> String {
    let decimals = if value.fract().is_zero() { 0 } else { 2 };
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);

    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(ch);
    }
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::ZERO, "0")]
    #[case(Decimal::from(999), "999")]
    #[case(Decimal::from(1000), "1 000")]
    #[case(Decimal::from(1_234_567), "1 234 567")]
    #[case(Decimal::new(10000, 2), "100")]
    #[case(Decimal::new(1_234_567, 3), "1 234.57")]
    #[case(Decimal::new(5, 3), "0.01")]
    #[case(Decimal::new(-9_876_543, 2), "-98 765.43")]
    #[case(Decimal::new(-4, 3), "0.00")]
    fn test_format_quantity(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_quantity(value), expected);
    }
}
