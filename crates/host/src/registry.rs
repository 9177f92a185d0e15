use crate::api::{MatchOptions, PluginApi, UtilityFn};
use crate::config::Config;
use crate::theme::{Theme, ThemeValue, ValueTransform};
use crate::value::{negate_value, ValueType};
use indexmap::IndexMap;
use longhand_core::{escape_class_name, Declaration, Diagnostic, Style};
use longhand_parse::{parse_candidate, split_modifier, Candidate, ParsedModifier, ParsedValue};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// 已匹配的工具类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched {
    /// 原始类名（含 `!`、负号、前缀）
    pub class: String,
    /// 转义后的类名，用作选择器（不含 `.`）
    pub selector: String,
    pub style: Style,
    /// (注册序号, 值序号)，决定输出顺序
    pub order: (usize, usize),
}

struct StaticUtility {
    order: (usize, usize),
    style: Style,
}

struct Utility {
    order: usize,
    transform: UtilityFn,
    options: Arc<MatchOptions>,
}

/// 匹配候选的优先级：明确类型 > `any`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Specific,
    Fallback,
}

struct Hit {
    index: usize,
    rank: Rank,
    arbitrary: bool,
    style: Style,
    value_index: usize,
}

/// 工具类注册表
///
/// 实现 [`PluginApi`]，保存插件注册的静态类、参数化工具类与共享默认块，
/// 并负责把类名解析为样式。
pub struct Registry {
    config: Config,
    theme: Theme,
    statics: HashMap<String, StaticUtility>,
    utilities: Vec<Utility>,
    roots: HashMap<String, Vec<usize>>,
    defaults: IndexMap<String, Vec<Declaration>>,
    next_order: usize,
}

impl Registry {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            config,
            theme,
            statics: HashMap::new(),
            utilities: Vec::new(),
            roots: HashMap::new(),
            defaults: IndexMap::new(),
            next_order: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 默认块的声明
    pub fn defaults(&self, group: &str) -> Option<&[Declaration]> {
        self.defaults.get(group).map(Vec::as_slice)
    }

    /// 已注册的默认块（按注册顺序）
    pub fn default_groups(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    /// 是否注册了某个静态类（不含前缀）
    pub fn has_static(&self, class: &str) -> bool {
        self.statics.contains_key(class)
    }

    /// 是否注册了某个参数化工具类（不含前缀）
    pub fn has_utility(&self, root: &str) -> bool {
        self.roots.contains_key(root)
    }

    fn take_order(&mut self) -> usize {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// 解析一个类名
    ///
    /// 不匹配时返回一条 warning 诊断。
    pub fn resolve(&self, class: &str) -> Result<Matched, Diagnostic> {
        let candidate = parse_candidate(class, &self.config.prefix)
            .map_err(|e| Diagnostic::warning(format!("`{}`: {}", class, e)))?;

        if !candidate.negative {
            if let Some(utility) = self.statics.get(&candidate.body) {
                trace!(class = %class, "matched static utility");
                return Ok(self.finish(&candidate, utility.style.clone(), utility.order));
            }
        }

        for split in candidate.splits() {
            let Some(indices) = self.roots.get(&split.root) else {
                continue;
            };

            let mut found: Vec<Hit> = indices
                .iter()
                .filter_map(|&index| self.try_utility(index, &candidate, split.value.as_ref()))
                .collect();

            if found.is_empty() {
                continue;
            }

            found.sort_by_key(|c| (c.rank, self.utilities[c.index].order));

            // 任意值同时满足多个工具类的明确类型时无法判断意图
            let specific = found
                .iter()
                .filter(|c| c.arbitrary && c.rank == Rank::Specific)
                .count();
            if specific > 1 {
                return Err(Diagnostic::warning(format!(
                    "`{}` is ambiguous, add a type hint such as `[length:...]`",
                    class
                )));
            }

            let best = found.swap_remove(0);
            let order = (self.utilities[best.index].order, best.value_index);
            debug!(class = %class, root = %split.root, "matched utility");
            return Ok(self.finish(&candidate, best.style, order));
        }

        Err(Diagnostic::warning(format!("no utility matches `{}`", class)))
    }

    fn finish(&self, candidate: &Candidate, mut style: Style, order: (usize, usize)) -> Matched {
        if candidate.important {
            for decl in &mut style.declarations {
                decl.value.push_str(" !important");
            }
        }

        Matched {
            class: candidate.raw.clone(),
            selector: escape_class_name(&candidate.raw),
            style,
            order,
        }
    }

    fn try_utility(
        &self,
        index: usize,
        candidate: &Candidate,
        value: Option<&ParsedValue>,
    ) -> Option<Hit> {
        let utility = &self.utilities[index];
        let options = &utility.options;

        if candidate.negative && !options.supports_negative_values {
            return None;
        }

        let (resolved, modifier, value_index, rank, arbitrary) = match value {
            None => {
                let (i, _, v) = options.values.get_full("DEFAULT")?;
                (v.clone(), None, i, Rank::Specific, false)
            }
            Some(ParsedValue::Standard(raw)) => {
                let (v, m, i) = lookup_standard(options, raw)?;
                (v, m, i, Rank::Specific, false)
            }
            Some(ParsedValue::Arbitrary { value, modifier }) => {
                let modifier = match (modifier, &options.modifiers) {
                    (None, _) => None,
                    (Some(m), Some(domain)) => Some(resolve_modifier(domain, m)?),
                    (Some(_), None) => return None,
                };
                let rank = arbitrary_rank(&options.types, &value.content, value.type_hint.as_deref())?;
                (
                    ThemeValue::literal(value.content.as_str()),
                    modifier,
                    options.values.len(),
                    rank,
                    true,
                )
            }
        };

        let resolved = if candidate.negative {
            ThemeValue::Literal(negate_value(resolved.as_literal()?)?)
        } else {
            resolved
        };

        let style = (utility.transform)(&resolved, modifier.as_deref())?;
        if style.is_empty() {
            return None;
        }

        Some(Hit {
            index,
            rank,
            arbitrary,
            style,
            value_index,
        })
    }
}

/// 标准值查找：完整键优先（`1/2`），再尝试拆出修饰符（`lg/6`）
fn lookup_standard(options: &MatchOptions, raw: &str) -> Option<(ThemeValue, Option<String>, usize)> {
    if let Some((i, _, v)) = options.values.get_full(raw) {
        return Some((v.clone(), None, i));
    }

    let domain = options.modifiers.as_ref()?;
    let (base, modifier) = split_modifier(raw);
    let modifier = resolve_modifier(domain, &modifier?)?;
    let (i, _, v) = options.values.get_full(base)?;
    Some((v.clone(), Some(modifier), i))
}

fn resolve_modifier(domain: &IndexMap<String, ThemeValue>, modifier: &ParsedModifier) -> Option<String> {
    match modifier {
        ParsedModifier::Standard(key) => ValueTransform::Identity.apply(domain.get(key)?),
        ParsedModifier::Arbitrary(value) => Some(value.clone()),
    }
}

/// 任意值的类型检查
fn arbitrary_rank(types: &[ValueType], content: &str, hint: Option<&str>) -> Option<Rank> {
    if let Some(hint) = hint {
        let hinted = ValueType::from_hint(hint)?;
        return if hinted != ValueType::Any && types.contains(&hinted) {
            Some(Rank::Specific)
        } else if types.contains(&ValueType::Any) {
            Some(Rank::Fallback)
        } else {
            None
        };
    }

    if types
        .iter()
        .any(|t| !matches!(t, ValueType::Any | ValueType::Lookup) && t.matches(content))
    {
        Some(Rank::Specific)
    } else if types.contains(&ValueType::Any) {
        Some(Rank::Fallback)
    } else {
        None
    }
}

impl PluginApi for Registry {
    fn add_utilities(&mut self, utilities: Vec<(String, Style)>) {
        let order = self.take_order();
        for (position, (class, style)) in utilities.into_iter().enumerate() {
            trace!(class = %class, "register static utility");
            self.statics.insert(
                class,
                StaticUtility {
                    order: (order, position),
                    style,
                },
            );
        }
    }

    fn match_utilities(&mut self, utilities: Vec<(&str, UtilityFn)>, options: MatchOptions) {
        let order = self.take_order();
        let options = Arc::new(options);
        for (root, transform) in utilities {
            trace!(root = %root, "register utility");
            let index = self.utilities.len();
            self.utilities.push(Utility {
                order,
                transform,
                options: Arc::clone(&options),
            });
            self.roots.entry(root.to_string()).or_default().push(index);
        }
    }

    fn add_defaults(&mut self, group: &str, declarations: Vec<Declaration>) {
        self.defaults.insert(group.to_string(), declarations);
    }

    fn theme(&self, key: &str) -> IndexMap<String, ThemeValue> {
        self.theme.get(key)
    }

    fn core_plugins(&self, name: &str) -> bool {
        self.config.is_enabled(name)
    }

    fn prefix(&self) -> &str {
        &self.config.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> IndexMap<String, ThemeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), ThemeValue::literal(*v)))
            .collect()
    }

    fn property(name: &'static str) -> UtilityFn {
        Arc::new(move |value: &ThemeValue, _: Option<&str>| {
            value.as_literal().map(|v| Style::new().with(name, v))
        })
    }

    fn registry(prefix: &str) -> Registry {
        let mut registry = Registry::new(Config::default().with_prefix(prefix), Theme::default());
        registry.add_utilities(vec![(
            "display-flex".to_string(),
            Style::from_pairs([("display", "flex")]),
        )]);
        registry.match_utilities(
            vec![("margin", property("margin")), ("margin-x", property("margin-inline"))],
            MatchOptions::new(values(&[("4", "1rem"), ("auto", "auto"), ("1/2", "50%")])).negative(true),
        );
        registry.match_utilities(
            vec![("flex-grow", property("flex-grow"))],
            MatchOptions::new(values(&[("DEFAULT", "1"), ("0", "0")])),
        );
        registry
    }

    #[test]
    fn test_static_and_standard() {
        let registry = registry("");
        let m = registry.resolve("display-flex").unwrap();
        assert_eq!(m.style.get("display"), Some("flex"));
        assert_eq!(m.selector, "display-flex");

        let m = registry.resolve("margin-x-4").unwrap();
        assert_eq!(m.style.get("margin-inline"), Some("1rem"));

        let m = registry.resolve("margin-1/2").unwrap();
        assert_eq!(m.style.get("margin"), Some("50%"));
        assert_eq!(m.selector, "margin-1\\/2");
    }

    #[test]
    fn test_default_key() {
        let registry = registry("");
        let m = registry.resolve("flex-grow").unwrap();
        assert_eq!(m.style.get("flex-grow"), Some("1"));
    }

    #[test]
    fn test_negative() {
        let registry = registry("");
        assert_eq!(registry.resolve("-margin-4").unwrap().style.get("margin"), Some("-1rem"));
        assert!(registry.resolve("-margin-auto").is_err());
        assert!(registry.resolve("-flex-grow-0").is_err());
        assert!(registry.resolve("-display-flex").is_err());
    }

    #[test]
    fn test_important_and_prefix() {
        let registry = registry("tw-");
        let m = registry.resolve("!tw-display-flex").unwrap();
        assert_eq!(m.style.get("display"), Some("flex !important"));
        assert_eq!(m.selector, "\\!tw-display-flex");
        assert!(registry.resolve("display-flex").is_err());
    }

    #[test]
    fn test_arbitrary_types() {
        let mut registry = registry("");
        registry.match_utilities(
            vec![("outline-width", property("outline-width"))],
            MatchOptions::default().with_types(&[ValueType::Length]),
        );

        assert!(registry.resolve("outline-width-[3px]").is_ok());
        assert!(registry.resolve("outline-width-[red]").is_err());
        assert!(registry.resolve("outline-width-[length:var(--w)]").is_ok());
        assert!(registry.resolve("outline-width-[color:red]").is_err());
        // 默认类型为 any
        assert!(registry.resolve("margin-[7px]").is_ok());
    }

    #[test]
    fn test_specific_type_wins_over_any() {
        let mut registry = Registry::new(Config::default(), Theme::default());
        registry.match_utilities(
            vec![("box-shadow", property("--shadow"))],
            MatchOptions::default().with_types(&[ValueType::Shadow]),
        );
        registry.match_utilities(
            vec![("box-shadow", property("--shadow-color"))],
            MatchOptions::default().with_types(&[ValueType::Color, ValueType::Any]),
        );

        let m = registry.resolve("box-shadow-[0_0_2px_red]").unwrap();
        assert_eq!(m.style.get("--shadow"), Some("0 0 2px red"));

        let m = registry.resolve("box-shadow-[red]").unwrap();
        assert_eq!(m.style.get("--shadow-color"), Some("red"));

        // var() 同时满足两种明确类型
        assert!(registry.resolve("box-shadow-[var(--x)]").is_err());
        assert!(registry.resolve("box-shadow-[color:var(--x)]").is_ok());
    }

    #[test]
    fn test_modifiers() {
        let mut registry = Registry::new(Config::default(), Theme::default());
        let size: UtilityFn = Arc::new(|value: &ThemeValue, modifier: Option<&str>| {
            let mut style = Style::new().with("font-size", value.as_literal()?);
            if let Some(m) = modifier {
                style.push("line-height", m);
            }
            Some(style)
        });
        registry.match_utilities(
            vec![("font-size", size)],
            MatchOptions::new(values(&[("lg", "1.125rem")])).with_modifiers(values(&[("6", "1.5rem")])),
        );

        let m = registry.resolve("font-size-lg/6").unwrap();
        assert_eq!(m.style.get("line-height"), Some("1.5rem"));
        let m = registry.resolve("font-size-[14px]/[20px]").unwrap();
        assert_eq!(m.style.get("line-height"), Some("20px"));
        assert!(registry.resolve("font-size-lg/9").is_err());

        // 没有修饰符范围的工具类不接受修饰符
        let registry = self::registry("");
        assert!(registry.resolve("margin-4/2").is_err());
    }

    #[test]
    fn test_unknown_and_invalid() {
        let registry = registry("");
        let err = registry.resolve("nope-4").unwrap_err();
        assert!(err.message.contains("nope-4"));
        assert!(registry.resolve("margin-[1px").is_err());
        assert!(registry.resolve("margin-5").is_err());
    }

    #[test]
    fn test_order() {
        let registry = registry("");
        let flex = registry.resolve("display-flex").unwrap();
        let margin = registry.resolve("margin-auto").unwrap();
        let grow = registry.resolve("flex-grow-0").unwrap();
        assert!(flex.order < margin.order);
        assert!(margin.order < grow.order);
        assert_eq!(margin.order.1, 1);
    }
}
