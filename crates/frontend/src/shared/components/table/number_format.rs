//! Форматирование цен для таблиц

/// Вставляет пробел каждые 3 цифры с конца целой части
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

/// Число с разделителем тысяч и не более чем 2 знаками после запятой,
/// незначащие нули в дробной части отбрасываются
///
/// # Примеры
///
/// ```
/// use catalog_frontend::shared::components::table::format_number;
///
/// assert_eq!(format_number(1234.5), "1 234.5");
/// assert_eq!(format_number(1234.0), "1 234");
/// ```
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let decimal_part = decimal_part.trim_end_matches('0');

    let grouped = group_thousands(integer_part);
    if decimal_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, decimal_part)
    }
}

/// Цена со знаком валюты: `$1 234.5`
pub fn format_price(value: f64) -> String {
    format!("${}", format_number(value))
}
