//! The `render` command: renders a template with the name filters registered.

use anyhow::Result;
use log::debug;
use serde_json::{Map, Value};
use std::io::Write;

use dnsname_core::render_template;

/// Builds a JSON object context from `KEY=VALUE` pairs. Later keys overwrite earlier ones.
pub fn build_context(vars: &[(String, String)]) -> Value {
    let map: Map<String, Value> = vars
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(map)
}

/// Renders `template` against the given variables and writes the result.
pub fn run_render<W: Write>(template: &str, vars: &[(String, String)], out: &mut W) -> Result<()> {
    let context = build_context(vars);
    debug!("Rendering template with {} variable(s).", vars.len());
    let rendered = render_template(template, &context)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_cli_vars() -> Result<()> {
        let vars = vec![(
            "optimizer".to_string(),
            "testing.opsani.com/My Super Amazing App Extravaganza!".to_string(),
        )];
        let mut out = Vec::new();
        run_render("{ optimizer | dns_labelize }", &vars, &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "testing.opsani.com_My-Super-Amazing-App-Extravaganza\n"
        );
        Ok(())
    }

    #[test]
    fn later_vars_win() {
        let vars = vec![
            ("a".to_string(), "1".to_string()),
            ("a".to_string(), "2".to_string()),
        ];
        assert_eq!(build_context(&vars)["a"], "2");
    }

    #[test]
    fn unknown_variable_fails() {
        let mut out = Vec::new();
        assert!(run_render("{ nope | dns_labelize }", &[], &mut out).is_err());
    }
}
