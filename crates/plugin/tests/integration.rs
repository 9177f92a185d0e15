use longhand_core::{Declaration, DiagnosticLevel};
use longhand_host::{Config, Generator};
use longhand_plugin::static_utilities::{self, StaticFamily};
use longhand_plugin::{LonghandOptions, LonghandPlugin, PluginKind, PLUGINS};
use pretty_assertions::assert_eq;
use serde_json::json;

fn generator(config: Config) -> Generator {
    let plugin = LonghandPlugin::new();
    Generator::with_plugins(config, &[&plugin]).expect("Failed to build generator")
}

fn config(value: serde_json::Value) -> Config {
    Config::from_value(value).expect("Failed to load config")
}

#[test]
fn test_every_static_class_resolves_to_its_declarations() {
    let generator = generator(Config::default());

    let families: Vec<&StaticFamily> = PLUGINS
        .iter()
        .filter_map(|plugin| match plugin.kind {
            PluginKind::Static(family) => Some(family),
            _ => None,
        })
        .chain([&static_utilities::VERTICAL_ALIGN])
        .collect();

    for family in families {
        for (class, declarations) in family.classes.entries() {
            let result = generator.generate(&[*class]);
            assert!(result.unknown.is_empty(), "{} did not resolve", class);

            let expected: Vec<Declaration> = declarations
                .iter()
                .map(|(property, value)| Declaration::new(*property, *value))
                .collect();
            assert_eq!(result.rules()[0].declarations, expected, "{}", class);
        }
    }
}

#[test]
fn test_display_and_position() {
    let css = generator(Config::default())
        .generate_css(&["display-flex position-absolute"])
        .unwrap();
    assert_eq!(
        css,
        ".position-absolute {\n  position: absolute;\n}\n\n.display-flex {\n  display: flex;\n}\n"
    );
}

#[test]
fn test_defaults_emitted_once_and_only_when_referenced() {
    let generator = generator(Config::default());

    let result = generator.generate(&["touch-action-pan-x", "touch-action-pinch-zoom"]);
    assert_eq!(result.stylesheet.defaults.len(), 1);
    assert_eq!(result.stylesheet.defaults[0].group, "touch-action");

    let result = generator.generate(&["touch-action-auto", "display-flex"]);
    assert!(result.stylesheet.defaults.is_empty());

    let css = generator
        .generate_css(&["box-shadow-md", "box-shadow-lg", "border-width-2"])
        .unwrap();
    assert_eq!(css.matches("*, ::before, ::after, ::backdrop").count(), 2);
    assert!(css.starts_with("*, ::before, ::after, ::backdrop {\n  border-width: 0;"));
}

#[test]
fn test_font_size_tuple_and_modifier() {
    let generator = generator(config(json!({
        "theme": {
            "extend": {
                "fontSize": {
                    "hero": ["3rem", { "lineHeight": "1", "letterSpacing": "-0.02em", "fontWeight": "800" }],
                    "tiny": "0.625rem"
                }
            }
        }
    })));

    let result = generator.generate(&["font-size-hero", "font-size-tiny", "font-size-hero/8"]);
    assert_eq!(result.rule("font-size-hero").unwrap().declarations.len(), 4);
    assert_eq!(result.rule("font-size-tiny").unwrap().declarations.len(), 1);
    assert_eq!(
        result.rule("font-size-hero/8").unwrap().declarations,
        vec![
            Declaration::new("font-size", "3rem"),
            Declaration::new("line-height", "2rem"),
        ]
    );
}

#[test]
fn test_color_with_and_without_opacity_companion() {
    let disabled = generator(config(json!({ "corePlugins": { "backgroundOpacity": false } })));
    let rule = disabled.generate(&["background-color-[#112233]"]).rules()[0].clone();
    assert_eq!(rule.declarations, vec![Declaration::new("background-color", "#112233")]);

    let enabled = generator(Config::default());
    let result = enabled.generate(&["background-color-[#112233]", "background-opacity-50"]);
    let rule = result.rule("background-color-[#112233]").unwrap();
    assert_eq!(rule.declarations[0], Declaration::new("--tw-bg-color", "#112233"));
    assert!(rule.declarations[1].value.contains("var(--tw-bg-opacity, 1)"));
    assert!(!rule.declarations[1].value.contains("#112233"));

    let opacity = result.rule("background-opacity-50").unwrap();
    assert_eq!(opacity.declarations, vec![Declaration::new("--tw-bg-opacity", "0.5")]);
}

#[test]
fn test_box_shadow() {
    let generator = generator(config(json!({
        "theme": { "extend": { "boxShadow": { "empty": "0 0 #0000" } } }
    })));

    let result = generator.generate(&["box-shadow-empty", "box-shadow-none"]);
    let empty = result.rule("box-shadow-empty").unwrap();
    assert_eq!(empty.declarations[0], Declaration::new("--tw-shadow", "0 0 #0000"));

    let none = result.rule("box-shadow-none").unwrap();
    assert_eq!(none.declarations[0], Declaration::new("--tw-shadow", "0 0 #0000"));
    assert_eq!(none.declarations[1], Declaration::new("--tw-shadow-colored", "0 0 #0000"));
}

#[test]
fn test_animation_keyframes_are_scoped() {
    let generator = generator(Config::default().with_prefix("tw-"));
    let css = generator
        .generate_css(&["tw-animation-spin", "tw-animation-[wiggle_1s_infinite]"])
        .unwrap();

    assert!(css.contains("@keyframes tw-spin {\n  to {\n    transform: rotate(360deg);\n  }\n}"));
    assert!(css.contains("animation: tw-spin 1s linear infinite;"));
    assert!(css.contains("animation: wiggle 1s infinite;"));
    assert_eq!(css.matches("@keyframes").count(), 1);
}

#[test]
fn test_keyframes_from_config() {
    let generator = generator(config(json!({
        "theme": {
            "extend": {
                "keyframes": { "wiggle": { "0%, 100%": { "transform": "rotate(-3deg)" }, "50%": { "transform": "rotate(3deg)" } } },
                "animation": { "wiggle": "wiggle 1s ease-in-out infinite" }
            }
        }
    })));

    let result = generator.generate(&["animation-wiggle"]);
    assert_eq!(result.stylesheet.keyframes.len(), 1);
    assert_eq!(result.stylesheet.keyframes[0].steps.len(), 2);
}

#[test]
fn test_building_twice_is_byte_identical() {
    let classes = [
        "margin-4 -margin-top-2 display-grid color-red-500",
        "box-shadow-md animation-pulse font-variant-numeric-ordinal",
        "width-1/2 border-x-color-blue-500 touch-action-pan-y",
    ];

    let first = generator(Config::default()).generate_css(&classes).unwrap();
    let second = generator(Config::default()).generate_css(&classes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_negative_values() {
    let generator = generator(Config::default());
    let result = generator.generate(&["-margin-4", "-letter-spacing-wide", "-padding-4", "-display-flex"]);

    assert_eq!(result.rule("-margin-4").unwrap().declarations[0].value, "-1rem");
    assert_eq!(
        result.rule("-letter-spacing-wide").unwrap().declarations[0].value,
        "-0.025em"
    );
    assert_eq!(result.unknown, vec!["-display-flex".to_string(), "-padding-4".to_string()]);
}

#[test]
fn test_arbitrary_values_and_type_hints() {
    let generator = generator(Config::default());
    let result = generator.generate(&[
        "width-[13px]",
        "stroke-width-[length:var(--w)]",
        "background-size-[50%]",
        "background-position-[center_top]",
        "background-image-[red]",
    ]);

    assert_eq!(result.rule("width-[13px]").unwrap().declarations[0].value, "13px");
    assert_eq!(
        result.rule("stroke-width-[length:var(--w)]").unwrap().declarations[0].value,
        "var(--w)"
    );
    assert_eq!(result.rule("background-size-[50%]").unwrap().declarations[0].value, "50%");
    assert_eq!(
        result.rule("background-position-[center_top]").unwrap().declarations[0].value,
        "center top"
    );
    assert_eq!(result.unknown, vec!["background-image-[red]".to_string()]);
    assert!(result
        .diagnostics
        .iter()
        .all(|d| d.level == DiagnosticLevel::Warning));
}

#[test]
fn test_important_and_prefix() {
    let generator = generator(Config::default().with_prefix("tw-"));
    let result = generator.generate(&["!tw-display-none", "display-none"]);

    let rule = result.rule("!tw-display-none").unwrap();
    assert_eq!(rule.selector, "\\!tw-display-none");
    assert_eq!(rule.declarations[0].value, "none !important");
    assert_eq!(result.unknown, vec!["display-none".to_string()]);
}

#[test]
fn test_disable_core_plugins_patch() {
    let plugin = LonghandPlugin::new();
    let generator = Generator::with_plugins(Config::default(), &[&plugin]).unwrap();
    let config = generator.registry().config();
    assert!(!config.is_enabled("display"));
    assert!(!config.is_enabled("transitionTimingFunction"));
    assert!(config.is_enabled("backgroundOpacity"));

    let user = config_with_display();
    let generator = Generator::with_plugins(user, &[&plugin]).unwrap();
    assert!(generator.registry().config().is_enabled("display"));

    let plugin = LonghandPlugin::with_options(LonghandOptions {
        disable_core_plugins: false,
    });
    let generator = Generator::with_plugins(Config::default(), &[&plugin]).unwrap();
    assert!(generator.registry().config().is_enabled("display"));

    // 插件表中的条目不受开关影响
    assert!(generator.generate(&["display-flex"]).unknown.is_empty());
}

fn config_with_display() -> Config {
    config(json!({ "corePlugins": { "display": true } }))
}

#[test]
fn test_extend_merges_into_derived_sections() {
    let generator = generator(config(json!({
        "theme": {
            "extend": {
                "spacing": { "13": "3.25rem" },
                "colors": { "brand": { "DEFAULT": "#0ea5e9", "dark": "#0369a1" } }
            }
        }
    })));

    let result = generator.generate(&["margin-13", "padding-x-13", "color-brand", "outline-color-brand-dark"]);
    assert!(result.unknown.is_empty(), "{:?}", result.unknown);
    assert_eq!(
        result.rule("outline-color-brand-dark").unwrap().declarations,
        vec![Declaration::new("outline-color", "#0369a1")]
    );
}

#[test]
fn test_scan_then_generate() {
    let generator = generator(Config::default());
    let html = r#"<div class="display-flex justify-content-center gap-4 unknown-thing"></div>"#;
    let classes = Generator::scan(html);
    let result = generator.generate(&classes);

    assert!(result.rule("display-flex").is_some());
    assert!(result.rule("justify-content-center").is_some());
    assert!(result.rule("gap-4").is_some());
}

#[test]
fn test_output_follows_registration_order() {
    let generator = generator(Config::default());
    let result = generator.generate(&["padding-4", "margin-4", "display-block", "visibility-hidden"]);
    let classes: Vec<&str> = result.rules().iter().map(|r| r.class.as_str()).collect();
    assert_eq!(classes, vec!["visibility-hidden", "margin-4", "display-block", "padding-4"]);
}
