use longhand_core::Diagnostic;
use longhand_host::{Config, Generator, LonghandError};
use longhand_plugin::{LonghandOptions, LonghandPlugin};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

/// 类名输入：单个字符串（空白分隔）或字符串数组
#[derive(Deserialize)]
#[serde(untagged)]
enum JsClasses {
    One(String),
    Many(Vec<String>),
}

impl From<JsClasses> for Vec<String> {
    fn from(classes: JsClasses) -> Self {
        match classes {
            JsClasses::One(class) => vec![class],
            JsClasses::Many(classes) => classes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGenerateResult {
    css: String,
    unknown: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

/// 拆出 `longhand` 键作为插件选项，其余部分是生成器配置
fn split_config(mut config: serde_json::Value) -> Result<(Config, LonghandOptions), LonghandError> {
    let options = match config.as_object_mut().and_then(|object| object.remove("longhand")) {
        Some(options) => serde_json::from_value(options)?,
        None => LonghandOptions::default(),
    };

    let config = if config.is_null() {
        Config::default()
    } else {
        Config::from_value(config)?
    };

    Ok((config, options))
}

fn generate_inner(classes: &[String], config: serde_json::Value) -> Result<JsGenerateResult, LonghandError> {
    let (config, options) = split_config(config)?;
    let plugin = LonghandPlugin::with_options(options);
    let generator = Generator::with_plugins(config, &[&plugin])?;

    let result = generator.generate(classes);
    Ok(JsGenerateResult {
        css: result.to_css()?,
        unknown: result.unknown,
        diagnostics: result.diagnostics,
    })
}

fn parse_config(config: JsValue) -> Result<serde_json::Value, JsError> {
    if config.is_undefined() || config.is_null() {
        Ok(serde_json::Value::Null)
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
    }
}

fn serialize_result<T: Serialize>(result: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    result
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 为一组类名生成 CSS
///
/// @param classes - 类名字符串（空白分隔）或字符串数组
/// @param config  - 配置对象，可选；`longhand` 键为插件选项（如 `{ disableCorePlugins: false }`）
/// @returns `{ css, unknown, diagnostics }`
#[wasm_bindgen]
pub fn generate(classes: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let classes: Vec<String> = serde_wasm_bindgen::from_value::<JsClasses>(classes)
        .map_err(|e| JsError::new(&format!("Invalid classes: {}", e)))?
        .into();
    let config = parse_config(config)?;

    let result = generate_inner(&classes, config).map_err(|e| JsError::new(&e.to_string()))?;
    serialize_result(&result)
}

/// 从源码文本中提取候选类名
///
/// @param source - HTML / JSX 等任意文本
/// @returns 去重后的候选类名数组
#[wasm_bindgen(js_name = "scanCandidates")]
pub fn scan_candidates(source: &str) -> Result<JsValue, JsError> {
    serialize_result(&Generator::scan(source))
}
