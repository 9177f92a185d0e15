/// 支持取负的 CSS 数学函数
const NUMERIC_FUNCTIONS: &[&str] = &["var", "calc", "min", "max", "clamp"];

/// 对值取负，无法取负时返回 None
///
/// - `0` → `0`
/// - `1rem` → `-1rem`，`-4px` → `4px`
/// - 含 `var(` / `calc(` 等函数的值 → `calc(<value> * -1)`
///
/// ```
/// use longhand_host::value::negate_value;
///
/// assert_eq!(negate_value("0.25rem").as_deref(), Some("-0.25rem"));
/// assert_eq!(negate_value("auto"), None);
/// ```
pub fn negate_value(value: &str) -> Option<String> {
    let value = value.trim();

    if value == "0" {
        return Some("0".to_string());
    }

    if is_signed_dimension(value) {
        return Some(match value.as_bytes()[0] {
            b'-' => value[1..].to_string(),
            b'+' => format!("-{}", &value[1..]),
            _ => format!("-{}", value),
        });
    }

    if NUMERIC_FUNCTIONS
        .iter()
        .any(|func| value.contains(&format!("{}(", func)))
    {
        return Some(format!("calc({} * -1)", value));
    }

    None
}

/// `[+-]?(\d+|\d*\.\d+)(e[+-]?\d+)?(%|\w+)?`
fn is_signed_dimension(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let Some((number_len, _)) = leading_number(unsigned) else {
        return false;
    };

    let unit = &unsigned[number_len..];
    unit.is_empty() || unit == "%" || unit.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 解析开头的无符号数字（含可选小数与指数），返回 (字节长度, 是否含小数点)
pub(crate) fn leading_number(value: &str) -> Option<(usize, bool)> {
    let bytes = value.as_bytes();
    let mut i = 0;
    let mut digits = 0;
    let mut has_dot = false;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        let mut fraction = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            fraction += 1;
        }
        if fraction > 0 {
            i = j;
            digits += fraction;
            has_dot = true;
        }
    }
    if digits == 0 {
        return None;
    }

    // 指数部分
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > start {
            i = j;
        }
    }

    Some((i, has_dot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_numbers() {
        assert_eq!(negate_value("0").as_deref(), Some("0"));
        assert_eq!(negate_value("1rem").as_deref(), Some("-1rem"));
        assert_eq!(negate_value("-4px").as_deref(), Some("4px"));
        assert_eq!(negate_value("+2").as_deref(), Some("-2"));
        assert_eq!(negate_value(".5").as_deref(), Some("-.5"));
        assert_eq!(negate_value("50%").as_deref(), Some("-50%"));
        assert_eq!(negate_value("0px").as_deref(), Some("-0px"));
    }

    #[test]
    fn test_negate_functions() {
        assert_eq!(
            negate_value("var(--gap)").as_deref(),
            Some("calc(var(--gap) * -1)")
        );
        assert_eq!(
            negate_value("calc(1rem + 2px)").as_deref(),
            Some("calc(calc(1rem + 2px) * -1)")
        );
    }

    #[test]
    fn test_not_negatable() {
        assert_eq!(negate_value("auto"), None);
        assert_eq!(negate_value("span 2 / span 2"), None);
        assert_eq!(negate_value("1px solid"), None);
    }
}
