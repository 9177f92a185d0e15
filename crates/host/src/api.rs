use crate::config::ConfigPatch;
use crate::theme::ThemeValue;
use crate::value::ValueType;
use indexmap::IndexMap;
use longhand_core::{Declaration, Style};
use std::sync::Arc;

/// 参数化工具类的值转换函数：`(值, 修饰符) → 样式`
///
/// 返回 None 或空样式表示不匹配。
pub type UtilityFn = Arc<dyn Fn(&ThemeValue, Option<&str>) -> Option<Style> + Send + Sync>;

/// `match_utilities` 的选项
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// 可用的主题值
    pub values: IndexMap<String, ThemeValue>,
    /// 修饰符取值范围（如 font-size 的 `theme.lineHeight`），None 表示不接受修饰符
    pub modifiers: Option<IndexMap<String, ThemeValue>>,
    /// 任意值可接受的数据类型
    pub types: Vec<ValueType>,
    pub supports_negative_values: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
            modifiers: None,
            types: vec![ValueType::Any],
            supports_negative_values: false,
        }
    }
}

impl MatchOptions {
    pub fn new(values: IndexMap<String, ThemeValue>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn with_types(mut self, types: &[ValueType]) -> Self {
        self.types = types.to_vec();
        self
    }

    pub fn with_modifiers(mut self, modifiers: IndexMap<String, ThemeValue>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn negative(mut self, supports: bool) -> Self {
        self.supports_negative_values = supports;
        self
    }
}

/// 插件注册接口
///
/// 插件通过它注册静态工具类、参数化工具类与共享默认块，并读取主题与配置。
pub trait PluginApi {
    /// 注册静态工具类，类名不含 `.` 与前缀
    fn add_utilities(&mut self, utilities: Vec<(String, Style)>);

    /// 注册一组共享同一选项的参数化工具类
    fn match_utilities(&mut self, utilities: Vec<(&str, UtilityFn)>, options: MatchOptions);

    /// 注册共享默认块（只在被引用时输出一次）
    fn add_defaults(&mut self, group: &str, declarations: Vec<Declaration>);

    /// 读取主题分区
    fn theme(&self, key: &str) -> IndexMap<String, ThemeValue>;

    /// 核心插件是否启用
    fn core_plugins(&self, name: &str) -> bool;

    /// 配置的类名前缀
    fn prefix(&self) -> &str;
}

/// 可注册到生成器的插件
pub trait Plugin {
    /// 插件名，用于日志
    fn name(&self) -> &str;

    /// 插件对配置的补丁（在主题解析之前合并）
    fn config(&self) -> Option<ConfigPatch> {
        None
    }

    fn register(&self, api: &mut dyn PluginApi);
}
