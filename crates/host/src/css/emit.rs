use super::ir::{Stylesheet, DEFAULTS_SELECTOR};
use longhand_core::Declaration;
use std::fmt::Write;

const INDENT: &str = "  ";

fn write_declarations(css: &mut String, declarations: &[Declaration], depth: usize) -> std::fmt::Result {
    let indent = INDENT.repeat(depth);
    for decl in declarations {
        writeln!(css, "{}{}: {};", indent, decl.property, decl.value)?;
    }
    Ok(())
}

/// 生成 CSS 字符串（两空格缩进，块之间空一行）
pub fn emit_css(stylesheet: &Stylesheet) -> Result<String, std::fmt::Error> {
    let mut blocks = Vec::new();

    for block in &stylesheet.defaults {
        let mut css = String::new();
        writeln!(css, "{} {{", DEFAULTS_SELECTOR)?;
        write_declarations(&mut css, &block.declarations, 1)?;
        css.push_str("}\n");
        blocks.push(css);
    }

    for keyframes in &stylesheet.keyframes {
        let mut css = String::new();
        writeln!(css, "@keyframes {} {{", keyframes.name)?;
        for step in &keyframes.steps {
            writeln!(css, "{}{} {{", INDENT, step.selector)?;
            write_declarations(&mut css, &step.declarations, 2)?;
            writeln!(css, "{}}}", INDENT)?;
        }
        css.push_str("}\n");
        blocks.push(css);
    }

    for rule in &stylesheet.rules {
        let mut css = String::new();
        writeln!(css, ".{} {{", rule.selector)?;
        write_declarations(&mut css, &rule.declarations, 1)?;
        css.push_str("}\n");
        blocks.push(css);
    }

    Ok(blocks.join("\n"))
}
