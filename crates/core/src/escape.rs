/// 转义类名 / 标识符，使其可以直接用于 CSS 选择器或 `@keyframes` 名称
///
/// 规则与 cssesc 的 identifier 模式一致：
/// - 控制字符与非 ASCII 字符 → `\HEX `
/// - ASCII 标点（`/`、`.`、`:`、`[` 等）→ `\` + 字符
/// - 首字符为数字 → `\3X `；以 `-` 加数字或 `--` 开头 → `\-`
/// - 逗号统一写成 `\2c `
pub fn escape_class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for ch in name.chars() {
        let code = ch as u32;
        if code < 0x20 || code > 0x7e {
            out.push_str(&format!("\\{:X} ", code));
        } else if ch == ',' {
            out.push_str("\\2c ");
        } else if ch == '\\' || needs_single_escape(ch) {
            out.push('\\');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }

    let mut chars = out.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), Some(second)) if second == '-' || second.is_ascii_digit() => {
            format!("\\-{}", &out[1..])
        }
        (Some(first), _) if first.is_ascii_digit() => {
            format!("\\3{} {}", first, &out[1..])
        }
        _ => out,
    }
}

fn needs_single_escape(ch: char) -> bool {
    matches!(ch,
        ' '..='+' | '.' | '/' | ':'..='@' | '[' | ']' | '^' | '`' | '{'..='~'
    )
}
