use crate::types::{convert_underscores, ArbitraryValue, Candidate, ParsedModifier, ParsedValue, UtilitySplit};

/// 解析工具类候选
///
/// 支持的格式：
/// - 简单类：`display-flex`、`margin-4`
/// - 负值：`-margin-4`（有前缀时写作 `-tw-margin-4`）
/// - 任意值：`width-[13px]`、`background-color-[#ff0000]`
/// - 类型提示：`font-size-[length:var(--size)]`
/// - 修饰符：`font-size-lg/6`、`font-size-[14px]/[20px]`
/// - 重要性：`!display-flex` 或 `display-flex!`
///
/// # 示例
///
/// ```
/// use longhand_parse::parse_candidate;
///
/// let candidate = parse_candidate("!-tw-margin-4", "tw-").unwrap();
/// assert!(candidate.important);
/// assert!(candidate.negative);
/// assert_eq!(candidate.body, "margin-4");
/// ```
pub fn parse_candidate(input: &str, prefix: &str) -> Result<Candidate, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse(prefix)
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    InvalidFormat(String),
    UnmatchedBracket,
    MissingPrefix(String),
    MissingRoot,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ParseError::UnmatchedBracket => write!(f, "Unmatched bracket in arbitrary value"),
            ParseError::MissingPrefix(prefix) => write!(f, "Missing prefix '{}'", prefix),
            ParseError::MissingRoot => write!(f, "Missing utility name"),
        }
    }
}

impl std::error::Error for ParseError {}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            end: input.len(),
        }
    }

    fn parse(&mut self, prefix: &str) -> Result<Candidate, ParseError> {
        // 1. 解析重要性（前缀 `!` 或后缀 `!`）
        let important = self.consume_if('!') || self.consume_suffix('!');

        // 2. 解析负值标记
        let negative = self.consume_if('-');

        // 3. 解析配置前缀
        if !prefix.is_empty() {
            if !self.rest().starts_with(prefix) {
                return Err(ParseError::MissingPrefix(prefix.to_string()));
            }
            self.pos += prefix.len();
        }

        let body = self.rest();

        if body.is_empty() {
            return Err(ParseError::MissingRoot);
        }

        if body.starts_with('-') || body.contains('!') {
            return Err(ParseError::InvalidFormat(format!(
                "Unexpected characters at position {}: '{}'",
                self.pos, body
            )));
        }

        if body.chars().any(char::is_whitespace) {
            return Err(ParseError::InvalidFormat(
                "Whitespace is not allowed in class names".to_string(),
            ));
        }

        check_brackets(body)?;

        Ok(Candidate {
            raw: self.input.to_string(),
            important,
            negative,
            body: body.to_string(),
        })
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..self.end]
    }

    /// 消费指定字符（如果存在）
    fn consume_if(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// 从末尾消费指定字符（如果存在）
    fn consume_suffix(&mut self, expected: char) -> bool {
        if self.rest().ends_with(expected) {
            self.end -= expected.len_utf8();
            true
        } else {
            false
        }
    }
}

/// 检查方括号是否配对
fn check_brackets(s: &str) -> Result<(), ParseError> {
    let mut depth: i32 = 0;
    for ch in s.chars() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnmatchedBracket);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnmatchedBracket);
    }
    Ok(())
}

/// 找到从 `start`（指向 `[`）开始的匹配 `]` 的位置
fn matching_bracket(s: &str, start: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, ch) in s[start..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// 解析 `/` 之后的修饰符
fn parse_modifier(raw: &str) -> Option<ParsedModifier> {
    if raw.is_empty() {
        return None;
    }
    match raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) if !inner.is_empty() => Some(ParsedModifier::Arbitrary(convert_underscores(inner))),
        Some(_) => None,
        None => Some(ParsedModifier::Standard(raw.to_string())),
    }
}

/// 在最后一个不在方括号内的 `/` 处拆出修饰符
///
/// ```
/// use longhand_parse::{split_modifier, ParsedModifier};
///
/// assert_eq!(split_modifier("lg/6"), ("lg", Some(ParsedModifier::Standard("6".into()))));
/// assert_eq!(split_modifier("lg"), ("lg", None));
/// ```
pub fn split_modifier(value: &str) -> (&str, Option<ParsedModifier>) {
    let mut depth = 0;
    let mut slash = None;
    for (i, ch) in value.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            '/' if depth == 0 => slash = Some(i),
            _ => {}
        }
    }

    match slash {
        Some(i) if i > 0 => match parse_modifier(&value[i + 1..]) {
            Some(modifier) => (&value[..i], Some(modifier)),
            None => (value, None),
        },
        _ => (value, None),
    }
}

impl Candidate {
    /// 枚举所有可能的 根 / 值 切分，根从长到短
    ///
    /// - 含 `-[` 时只有一种切分：`-[` 之前为根，之后为任意值
    /// - 否则先尝试整个主体作为裸根，再从右往左依次在 `-` 处切分
    pub fn splits(&self) -> Vec<UtilitySplit> {
        let body = self.body.as_str();

        if let Some(dash) = body.find("-[") {
            let open = dash + 1;
            let Some(close) = matching_bracket(body, open) else {
                return Vec::new();
            };
            let raw = &body[open..=close];
            let after = &body[close + 1..];
            let modifier = match after.strip_prefix('/') {
                Some(m) => match parse_modifier(m) {
                    Some(modifier) => Some(modifier),
                    None => return Vec::new(),
                },
                None if after.is_empty() => None,
                None => return Vec::new(),
            };

            let value = ArbitraryValue::new(raw.to_string());
            if value.content.is_empty() || dash == 0 {
                return Vec::new();
            }

            return vec![UtilitySplit {
                root: body[..dash].to_string(),
                value: Some(ParsedValue::Arbitrary { value, modifier }),
            }];
        }

        let mut splits = vec![UtilitySplit {
            root: body.to_string(),
            value: None,
        }];

        for (i, _) in body.match_indices('-').collect::<Vec<_>>().into_iter().rev() {
            if i == 0 || i + 1 >= body.len() {
                continue;
            }
            splits.push(UtilitySplit {
                root: body[..i].to_string(),
                value: Some(ParsedValue::Standard(body[i + 1..].to_string())),
            });
        }

        splits
    }
}
