use crate::api::Plugin;
use crate::companion::register_opacity_utilities;
use crate::config::Config;
use crate::css::{emit_css, DefaultBlock, Rule, Stylesheet};
use crate::error::Result;
use crate::registry::{Matched, Registry};
use crate::theme::Theme;
use longhand_core::Diagnostic;
use longhand_parse::{extract_candidates, normalize_classes};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// 一次生成的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    #[serde(flatten)]
    pub stylesheet: Stylesheet,
    /// 无法匹配的类名（按输入的规范化顺序）
    pub unknown: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateResult {
    pub fn rules(&self) -> &[Rule] {
        &self.stylesheet.rules
    }

    /// 查找某个类的规则
    pub fn rule(&self, class: &str) -> Option<&Rule> {
        self.stylesheet.rules.iter().find(|r| r.class == class)
    }

    pub fn to_css(&self) -> Result<String> {
        Ok(emit_css(&self.stylesheet)?)
    }
}

/// CSS 生成器
///
/// 持有注册完成的 [`Registry`]，可重复调用 [`Generator::generate`]。
pub struct Generator {
    registry: Registry,
}

impl Generator {
    /// 只带内置透明度工具类的生成器
    pub fn new(config: Config) -> Result<Self> {
        Self::with_plugins(config, &[])
    }

    /// 合并插件配置补丁、解析主题并依次注册插件
    pub fn with_plugins(mut config: Config, plugins: &[&dyn Plugin]) -> Result<Self> {
        for plugin in plugins {
            if let Some(patch) = plugin.config() {
                debug!(plugin = plugin.name(), entries = patch.core_plugins.len(), "apply plugin config");
                config.apply_plugin_config(&patch);
            }
        }

        let theme = Theme::resolve(&config.theme)?;
        let mut registry = Registry::new(config, theme);

        for plugin in plugins {
            debug!(plugin = plugin.name(), "register plugin");
            plugin.register(&mut registry);
        }
        // 透明度类排在颜色类之后
        register_opacity_utilities(&mut registry);

        Ok(Self { registry })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// 从任意文本（HTML、JSX 等）中提取候选类名
    pub fn scan(content: &str) -> Vec<String> {
        extract_candidates(content)
    }

    /// 为一组类名生成样式
    ///
    /// 每个元素可以包含多个空白分隔的类名。输出按（注册序号, 值序号）排序、按类名去重。
    pub fn generate<S: AsRef<str>>(&self, classes: &[S]) -> GenerateResult {
        let classes: Vec<String> = classes.iter().map(|c| c.as_ref().to_string()).collect();

        let mut matched: Vec<Matched> = Vec::new();
        let mut result = GenerateResult::default();

        for class in normalize_classes(&classes) {
            match self.registry.resolve(&class) {
                Ok(m) => matched.push(m),
                Err(diagnostic) => {
                    debug!(class = %class, "unknown class");
                    result.unknown.push(class);
                    result.diagnostics.push(diagnostic);
                }
            }
        }

        matched.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.class.cmp(&b.class)));

        let mut groups: HashSet<&str> = HashSet::new();
        let mut keyframe_names: HashSet<&str> = HashSet::new();

        for m in &matched {
            for group in &m.style.defaults {
                if groups.insert(group.as_str()) && self.registry.defaults(group).is_none() {
                    warn!(group = %group, "default block referenced but never registered");
                    result
                        .diagnostics
                        .push(Diagnostic::error(format!("missing default block `{}`", group)));
                }
            }
            for keyframes in &m.style.keyframes {
                if keyframe_names.insert(keyframes.name.as_str()) {
                    result.stylesheet.keyframes.push(keyframes.clone());
                }
            }
        }

        result.stylesheet.defaults = self
            .registry
            .default_groups()
            .filter(|group| groups.contains(group))
            .filter_map(|group| {
                self.registry.defaults(group).map(|declarations| DefaultBlock {
                    group: group.to_string(),
                    declarations: declarations.to_vec(),
                })
            })
            .collect();

        result.stylesheet.rules = matched
            .into_iter()
            .map(|m| Rule {
                class: m.class,
                selector: m.selector,
                declarations: m.style.declarations,
            })
            .collect();

        result
    }

    /// 直接生成 CSS 字符串
    pub fn generate_css<S: AsRef<str>>(&self, classes: &[S]) -> Result<String> {
        self.generate(classes).to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PluginApi;
    use longhand_core::{Declaration, Style};
    use pretty_assertions::assert_eq;

    struct SnapPlugin;

    impl Plugin for SnapPlugin {
        fn name(&self) -> &str {
            "snap"
        }

        fn register(&self, api: &mut dyn PluginApi) {
            api.add_defaults(
                "scroll-snap-type",
                vec![Declaration::new("--tw-scroll-snap-strictness", "proximity")],
            );
            api.add_utilities(vec![
                (
                    "scroll-snap-type-x".to_string(),
                    Style::new()
                        .with_defaults("scroll-snap-type")
                        .with("scroll-snap-type", "x var(--tw-scroll-snap-strictness)"),
                ),
                (
                    "scroll-snap-type-y".to_string(),
                    Style::new()
                        .with_defaults("scroll-snap-type")
                        .with("scroll-snap-type", "y var(--tw-scroll-snap-strictness)"),
                ),
                (
                    "scroll-snap-type-none".to_string(),
                    Style::from_pairs([("scroll-snap-type", "none")]),
                ),
            ]);
        }
    }

    #[test]
    fn test_defaults_emitted_once() {
        let generator = Generator::with_plugins(Config::default(), &[&SnapPlugin]).unwrap();
        let result = generator.generate(&["scroll-snap-type-x scroll-snap-type-y"]);

        assert_eq!(result.stylesheet.defaults.len(), 1);
        assert_eq!(result.rules().len(), 2);
        assert_eq!(result.rules()[0].class, "scroll-snap-type-x");
    }

    #[test]
    fn test_defaults_only_when_referenced() {
        let generator = Generator::with_plugins(Config::default(), &[&SnapPlugin]).unwrap();
        let result = generator.generate(&["scroll-snap-type-none"]);
        assert!(result.stylesheet.defaults.is_empty());
    }

    #[test]
    fn test_unknown_classes() {
        let generator = Generator::with_plugins(Config::default(), &[&SnapPlugin]).unwrap();
        let result = generator.generate(&["nope", "scroll-snap-type-x", "nope"]);
        assert_eq!(result.unknown, vec!["nope".to_string()]);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = Generator::with_plugins(Config::default(), &[&SnapPlugin]).unwrap();
        let a = generator.generate_css(&["scroll-snap-type-y", "scroll-snap-type-x"]).unwrap();
        let b = generator.generate_css(&["scroll-snap-type-x", "scroll-snap-type-y"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_opacity_utilities_follow_plugins() {
        let generator = Generator::with_plugins(Config::default(), &[&SnapPlugin]).unwrap();
        let result = generator.generate(&["background-opacity-50", "scroll-snap-type-x"]);
        let classes: Vec<&str> = result.rules().iter().map(|r| r.class.as_str()).collect();
        assert_eq!(classes, vec!["scroll-snap-type-x", "background-opacity-50"]);
    }

    #[test]
    fn test_scan() {
        let classes = Generator::scan(r#"<div class="scroll-snap-type-x">"#);
        assert!(classes.contains(&"scroll-snap-type-x".to_string()));
    }
}
