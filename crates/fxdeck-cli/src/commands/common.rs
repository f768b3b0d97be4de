//! Shared CLI helpers used across multiple commands.

use anyhow::Context as _;
use fxdeck_store::{ParamValue, Preset, PresetStore, StoreError};

use super::Context;

/// Width of the rule printed above listings.
const RULE_WIDTH: usize = 80;

/// Open and load the store. A missing root is an error.
pub fn open_store(ctx: &Context) -> anyhow::Result<PresetStore> {
    PresetStore::open(&ctx.presets_dir).with_context(|| {
        format!(
            "cannot load presets from '{}' (set --presets-dir or presets_dir in settings)",
            ctx.presets_dir.display()
        )
    })
}

/// Open the store, treating a missing root as empty. Used by commands that
/// write, since saving creates the directories.
pub fn open_store_or_empty(ctx: &Context) -> anyhow::Result<PresetStore> {
    let mut store = PresetStore::new(&ctx.presets_dir);
    match store.load() {
        Ok(_) => Ok(store),
        Err(StoreError::RootNotFound(root)) => {
            tracing::info!("presets root {:?} does not exist yet, starting empty", root);
            Ok(store)
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse a `key=value` string for clap's `value_parser`.
///
/// The value is read as JSON when it parses (`0.5`, `true`, `{"r":1}`) and
/// kept as a plain string otherwise.
pub fn parse_param(s: &str) -> Result<(String, ParamValue), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!(
            "Invalid parameter format: '{}' (expected key=value)",
            s
        ));
    };
    if key.is_empty() {
        return Err(format!("Missing parameter name in '{}'", s));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| ParamValue::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Print a `=====` rule.
pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// One-line summary used by `search`.
pub fn summary_line(preset: &Preset) -> String {
    format!("{:4} | {:30} | {}", preset.id, preset.name, preset.category)
}

/// Multi-line entry used by `list`.
pub fn print_entry(preset: &Preset) {
    println!(
        "ID: {:4} | {:30} | {:20}",
        preset.id, preset.name, preset.category
    );
    println!(
        "       Type: {:12} | Intensity: {:.2}",
        preset.preset_type, preset.default_intensity
    );
    if !preset.description.is_empty() {
        println!("       {}", preset.description);
    }
    if !preset.tags.is_empty() {
        println!("       Tags: {}", preset.tags.join(", "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_param_json_values() {
        assert_eq!(
            parse_param("contrast=0.2").unwrap(),
            ("contrast".to_string(), json!(0.2))
        );
        assert_eq!(parse_param("on=true").unwrap().1, json!(true));
        assert_eq!(
            parse_param(r#"tint={"r":1,"g":0.5}"#).unwrap().1,
            json!({"r": 1, "g": 0.5})
        );
    }

    #[test]
    fn test_parse_param_falls_back_to_string() {
        assert_eq!(parse_param("mode=soft light").unwrap().1, json!("soft light"));
        assert_eq!(parse_param("expr=a=b").unwrap(), ("expr".to_string(), json!("a=b")));
    }

    #[test]
    fn test_parse_param_rejects_bad_input() {
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=1").is_err());
    }

    #[test]
    fn test_summary_line() {
        let preset = Preset::new("Glow").with_id(7).with_category("Looks");
        let line = summary_line(&preset);
        assert!(line.starts_with("   7 | Glow"), "got: {line}");
        assert!(line.ends_with("| Looks"), "got: {line}");
    }
}
