use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// 主题值
///
/// 配置中的主题值有四种形态：
/// - `"1rem"` / `10` → `Literal`
/// - `["Inter", "sans-serif"]` → `List`
/// - `["1rem", { "lineHeight": "1.5rem" }]` → `WithOptions`
/// - `{ "50": "#f9fafb", ... }` → `Nested`（调色板、keyframes）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum ThemeValue {
    Literal(String),
    List(Vec<String>),
    WithOptions(Box<ThemeValue>, IndexMap<String, String>),
    Nested(IndexMap<String, ThemeValue>),
}

impl ThemeValue {
    pub fn literal(value: impl Into<String>) -> Self {
        ThemeValue::Literal(value.into())
    }

    pub fn list<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        ThemeValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn with_options<K, V>(primary: ThemeValue, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ThemeValue::WithOptions(
            Box::new(primary),
            options
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            ThemeValue::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&IndexMap<String, ThemeValue>> {
        match self {
            ThemeValue::Nested(map) => Some(map),
            _ => None,
        }
    }

    /// 深度合并：两侧都是 `Nested` 时递归合并，否则后者覆盖前者
    pub fn merge(&mut self, other: ThemeValue) {
        match (self, other) {
            (ThemeValue::Nested(base), ThemeValue::Nested(extra)) => {
                for (key, value) in extra {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (slot, other) => *slot = other,
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Literal(value.to_string())
    }
}

/// 标量（字符串 / 数字）转为 CSS 字符串
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl TryFrom<Value> for ThemeValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(ThemeValue::Literal(s)),
            Value::Number(n) => Ok(ThemeValue::Literal(n.to_string())),
            Value::Array(items) => {
                // [value, { options }]
                if let [first, Value::Object(options)] = items.as_slice() {
                    let primary = ThemeValue::try_from(first.clone())?;
                    if matches!(primary, ThemeValue::Nested(_) | ThemeValue::WithOptions(..)) {
                        return Err("tuple value must be a string or a list".to_string());
                    }

                    let mut parsed = IndexMap::new();
                    for (key, option) in options {
                        let option = scalar_to_string(option).ok_or_else(|| {
                            format!("option `{}` must be a string or a number", key)
                        })?;
                        parsed.insert(key.clone(), option);
                    }
                    return Ok(ThemeValue::WithOptions(Box::new(primary), parsed));
                }

                items
                    .iter()
                    .map(|item| {
                        scalar_to_string(item)
                            .ok_or_else(|| "list items must be strings or numbers".to_string())
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(ThemeValue::List)
            }
            Value::Object(map) => {
                let mut nested = IndexMap::new();
                for (key, value) in map {
                    nested.insert(key, ThemeValue::try_from(value)?);
                }
                Ok(ThemeValue::Nested(nested))
            }
            Value::Bool(_) | Value::Null => {
                Err("expected a string, number, array or object".to_string())
            }
        }
    }
}
