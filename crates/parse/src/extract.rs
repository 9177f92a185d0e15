use std::collections::BTreeSet;

/// 不会出现在类名中的分隔字符（任意值内除外）
fn is_separator(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '"' | '\'' | '`' | '<' | '>' | '=' | '{' | '}' | ';' | ',' | '(' | ')' | '[' | ']'
        )
}

/// `[` 只有紧跟在 `-`、`:` 或 `/` 之后才开始一个任意值
fn opens_arbitrary(current: &str) -> bool {
    current.ends_with(['-', ':', '/'])
}

/// 从任意文本中提取候选类名
///
/// 功能：
/// 1. 按空白、引号、括号等分隔符拆分
/// 2. 任意值（`margin-[1px]`、`font-size-[14px]/[20px]`）内的内容不拆，遇到空白时结束
/// 3. 去除空字符串
/// 4. 去重
/// 5. 排序（字典序，保证确定性）
pub fn extract_candidates(content: &str) -> Vec<String> {
    let mut unique = BTreeSet::new();
    let mut current = String::new();
    let mut depth = 0usize;

    let mut flush = |current: &mut String| {
        if !current.is_empty() {
            unique.insert(std::mem::take(current));
        }
    };

    for ch in content.chars() {
        if depth > 0 {
            // 任意值中不会出现空白，未闭合的方括号在这里截断
            if ch.is_whitespace() {
                depth = 0;
                flush(&mut current);
                continue;
            }
            match ch {
                '[' => depth += 1,
                ']' => depth -= 1,
                _ => {}
            }
            current.push(ch);
        } else if ch == '[' && opens_arbitrary(&current) {
            depth = 1;
            current.push(ch);
        } else if is_separator(ch) {
            flush(&mut current);
        } else {
            current.push(ch);
        }
    }
    flush(&mut current);

    unique.into_iter().collect()
}

/// 规范化类名列表：按空白拆分、去重、排序
pub fn normalize_classes(classes: &[String]) -> Vec<String> {
    let mut unique_classes = BTreeSet::new();

    for class_str in classes {
        for token in class_str.split_whitespace() {
            unique_classes.insert(token.to_string());
        }
    }

    unique_classes.into_iter().collect()
}
