use crate::error::Result;
use crate::theme::ThemeValue;
use indexmap::IndexMap;
use serde::Deserialize;

/// 生成器配置
///
/// ```json
/// {
///   "prefix": "tw-",
///   "theme": { "spacing": { ... }, "extend": { "colors": { ... } } },
///   "corePlugins": { "backgroundOpacity": false }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 所有类名的前缀（如 "tw-"）
    pub prefix: String,
    pub theme: ThemeConfig,
    pub core_plugins: CorePlugins,
}

/// `theme` 配置：除 `extend` 外的键整段替换对应分区
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub extend: IndexMap<String, ThemeValue>,
    #[serde(flatten)]
    pub overrides: IndexMap<String, ThemeValue>,
}

/// `corePlugins`：开关表，或只启用列出项的白名单
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CorePlugins {
    Toggles(IndexMap<String, bool>),
    Allowlist(Vec<String>),
}

impl Default for CorePlugins {
    fn default() -> Self {
        CorePlugins::Toggles(IndexMap::new())
    }
}

impl CorePlugins {
    /// 未列出的插件在开关表模式下默认启用
    pub fn is_enabled(&self, name: &str) -> bool {
        match self {
            CorePlugins::Toggles(toggles) => toggles.get(name).copied().unwrap_or(true),
            CorePlugins::Allowlist(names) => names.iter().any(|n| n == name),
        }
    }
}

/// 插件提供的配置补丁
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub core_plugins: IndexMap<String, bool>,
}

impl Config {
    /// 从 JSON 字符串加载
    pub fn load_from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从已解析的 JSON 值加载
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 合并插件的配置补丁，用户显式设置的值优先
    ///
    /// 白名单模式下用户已经完整指定了启用集合，补丁不生效。
    pub fn apply_plugin_config(&mut self, patch: &ConfigPatch) {
        if let CorePlugins::Toggles(toggles) = &mut self.core_plugins {
            for (name, enabled) in &patch.core_plugins {
                toggles.entry(name.clone()).or_insert(*enabled);
            }
        }
    }

    pub fn is_enabled(&self, core_plugin: &str) -> bool {
        self.core_plugins.is_enabled(core_plugin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_full_config() {
        let config = Config::load_from_json(
            r##"{
                "prefix": "tw-",
                "theme": {
                    "spacing": { "1": "4px" },
                    "extend": { "colors": { "brand": "#123456" } }
                },
                "corePlugins": { "textOpacity": false }
            }"##,
        )
        .unwrap();

        assert_eq!(config.prefix, "tw-");
        assert!(config.theme.overrides.contains_key("spacing"));
        assert!(!config.theme.overrides.contains_key("extend"));
        assert!(config.theme.extend.contains_key("colors"));
        assert_eq!(
            config.theme.extend["colors"].as_nested().and_then(|colors| colors.get("brand")),
            Some(&ThemeValue::literal("#123456"))
        );
        assert!(!config.is_enabled("textOpacity"));
        assert!(config.is_enabled("backgroundOpacity"));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_allowlist() {
        let config = Config::load_from_json(r#"{ "corePlugins": ["backgroundOpacity"] }"#).unwrap();
        assert!(config.is_enabled("backgroundOpacity"));
        assert!(!config.is_enabled("textOpacity"));
    }

    #[test]
    fn test_plugin_patch_user_wins() {
        let mut config =
            Config::load_from_json(r#"{ "corePlugins": { "display": true } }"#).unwrap();

        let mut patch = ConfigPatch::default();
        patch.core_plugins.insert("display".to_string(), false);
        patch.core_plugins.insert("position".to_string(), false);
        config.apply_plugin_config(&patch);

        assert!(config.is_enabled("display"));
        assert!(!config.is_enabled("position"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(Config::load_from_json("{ nope").is_err());
        assert!(Config::load_from_json(r#"{ "theme": { "spacing": true } }"#).is_err());
    }
}
