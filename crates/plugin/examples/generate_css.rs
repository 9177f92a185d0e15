/// 从 HTML 片段生成 longhand 工具类的 CSS
///
/// 运行示例：
/// ```bash
/// RUST_LOG=longhand_host=debug cargo run --example generate_css -p longhand-plugin
/// ```
use longhand_host::{Config, Generator};
use longhand_plugin::LonghandPlugin;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Longhand 示例 ===\n");

    let config = Config::load_from_json(
        r##"{
            "prefix": "tw-",
            "theme": {
                "extend": {
                    "colors": { "brand": { "DEFAULT": "#0ea5e9", "dark": "#0369a1" } }
                }
            }
        }"##,
    )
    .expect("Failed to load config");

    let plugin = LonghandPlugin::new();
    let generator = Generator::with_plugins(config, &[&plugin]).expect("Failed to build generator");

    let html = r#"
        <div class="tw-display-flex tw-align-items-center tw-gap-4 tw-padding-x-6">
          <span class="tw-color-brand tw-text-opacity-75 tw-font-size-lg/7">Hello</span>
          <button class="tw-box-shadow-md tw-box-shadow-brand-dark tw-animation-spin">Go</button>
          <i class="tw-touch-action-pan-x tw-unknown-class"></i>
        </div>
    "#;

    let candidates = Generator::scan(html);
    println!("✓ 提取候选类名：{} 个", candidates.len());

    let result = generator.generate(&candidates);
    println!("✓ 生成规则：{} 条", result.rules().len());
    println!("✓ 默认块：{} 个，keyframes：{} 个", result.stylesheet.defaults.len(), result.stylesheet.keyframes.len());

    let css = result.to_css().expect("Failed to emit CSS");
    println!("\n--- CSS ---\n{}", css);

    // HTML 中的属性名、标签等同样会被提取为候选，这里只展示带前缀的未知类
    let unknown: Vec<&String> = result.unknown.iter().filter(|c| c.starts_with("tw-")).collect();
    println!("--- 未识别的类名 ---\n{:?}", unknown);
}
