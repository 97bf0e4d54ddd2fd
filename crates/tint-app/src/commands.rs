//! Subcommand implementations.
//!
//! Each command returns a [`Report`] instead of printing so `main` owns all
//! terminal output and the exit status.

use std::path::Path;

use serde::Serialize;
use tint_common::{Result, TintError};
use tint_config::colors::{CSS_NAME_TO_HEX, SUPPORTED_NAMES};
use tint_config::{
    is_valid_color, read_palette, resolve_color, resolve_palette, validate_palette, Palette,
};

use crate::cli::{Args, Command};

/// Rendered command output plus whether every input was accepted.
#[derive(Debug)]
pub struct Report {
    pub output: String,
    pub success: bool,
}

#[derive(Serialize)]
struct ResolveEntry<'a> {
    input: &'a str,
    resolved: Option<String>,
}

#[derive(Serialize)]
struct CheckEntry<'a> {
    input: &'a str,
    valid: bool,
}

#[derive(Serialize)]
struct NameEntry {
    name: &'static str,
    /// `None` for names the renderer takes as-is.
    hex: Option<&'static str>,
}

pub fn run(args: &Args) -> Result<Report> {
    match &args.command {
        Command::Resolve { colors } => resolve(colors, args.json),
        Command::Check { colors } => check(colors, args.json),
        Command::Names { supported, mapped } => names(*supported, *mapped, args.json),
        Command::Palette { path } => palette(path, args.json),
    }
}

pub fn resolve(colors: &[String], json: bool) -> Result<Report> {
    let entries: Vec<ResolveEntry<'_>> = colors
        .iter()
        .map(|c| ResolveEntry {
            input: c,
            resolved: resolve_color(c),
        })
        .collect();
    let success = entries.iter().all(|e| e.resolved.is_some());

    let output = if json {
        to_json(&entries)?
    } else {
        entries
            .iter()
            .map(|e| format!("{}\t{}", e.input, e.resolved.as_deref().unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(Report { output, success })
}

pub fn check(colors: &[String], json: bool) -> Result<Report> {
    let entries: Vec<CheckEntry<'_>> = colors
        .iter()
        .map(|c| CheckEntry {
            input: c,
            valid: is_valid_color(c),
        })
        .collect();
    let success = entries.iter().all(|e| e.valid);

    let output = if json {
        to_json(&entries)?
    } else {
        entries
            .iter()
            .map(|e| {
                let verdict = if e.valid { "valid" } else { "invalid" };
                format!("{}\t{verdict}", e.input)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(Report { output, success })
}

pub fn names(supported_only: bool, mapped_only: bool, json: bool) -> Result<Report> {
    let mut entries: Vec<NameEntry> = Vec::new();
    if !mapped_only {
        entries.extend(SUPPORTED_NAMES.iter().map(|&name| NameEntry { name, hex: None }));
    }
    if !supported_only {
        entries.extend(
            CSS_NAME_TO_HEX
                .iter()
                .map(|&(name, hex)| NameEntry { name, hex: Some(hex) }),
        );
    }

    let output = if json {
        to_json(&entries)?
    } else {
        entries
            .iter()
            .map(|e| match e.hex {
                Some(hex) => format!("{}\t{hex}", e.name),
                None => e.name.to_owned(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(Report {
        output,
        success: true,
    })
}

pub fn palette(path: &Path, json: bool) -> Result<Report> {
    let palette = read_palette(path)?;
    validate_palette(&palette)?;
    let resolved = resolve_palette(&palette, &Palette::default());

    let output = if json {
        to_json(&resolved)?
    } else {
        let mut lines: Vec<String> = [
            ("background", &resolved.background),
            ("foreground", &resolved.foreground),
            ("light_blue", &resolved.light_blue),
            ("accent_blue", &resolved.accent_blue),
            ("accent_purple", &resolved.accent_purple),
            ("accent_cyan", &resolved.accent_cyan),
            ("accent_green", &resolved.accent_green),
            ("accent_yellow", &resolved.accent_yellow),
            ("accent_red", &resolved.accent_red),
            ("comment", &resolved.comment),
            ("gray", &resolved.gray),
            ("diff_added", &resolved.diff_added),
            ("diff_removed", &resolved.diff_removed),
        ]
        .iter()
        .map(|(slot, value)| format!("{slot}\t{value}"))
        .collect();
        lines.push(format!("gradient\t{}", resolved.gradient.join(",")));
        lines.join("\n")
    };
    Ok(Report {
        output,
        success: true,
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| TintError::Other(format!("failed to serialize output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_common::ConfigError;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolve_prints_tab_separated_lines() {
        let report = resolve(&strings(&["#ABC", "red", "rebeccapurple"]), false).unwrap();
        assert!(report.success);
        assert_eq!(report.output, "#ABC\t#abc\nred\tred\nrebeccapurple\t#663399");
    }

    #[test]
    fn resolve_marks_unresolved_and_fails() {
        let report = resolve(&strings(&["#12345", "blue"]), false).unwrap();
        assert!(!report.success);
        assert_eq!(report.output, "#12345\t-\nblue\tblue");
    }

    #[test]
    fn resolve_json_uses_null_for_unresolved() {
        let report = resolve(&strings(&["DARKKHAKI", "notacolor"]), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.output).unwrap();
        assert_eq!(value[0]["input"], "DARKKHAKI");
        assert_eq!(value[0]["resolved"], "#bdb76b");
        assert!(value[1]["resolved"].is_null());
    }

    #[test]
    fn check_reports_each_color() {
        let report = check(&strings(&["DarkKhaki", ""]), false).unwrap();
        assert!(!report.success);
        assert_eq!(report.output, "DarkKhaki\tvalid\n\tinvalid");
    }

    #[test]
    fn check_json() {
        let report = check(&strings(&["#fff"]), true).unwrap();
        assert!(report.success);
        let value: serde_json::Value = serde_json::from_str(&report.output).unwrap();
        assert_eq!(value[0]["valid"], true);
    }

    #[test]
    fn names_lists_both_tables_by_default() {
        let report = names(false, false, false).unwrap();
        let lines: Vec<&str> = report.output.lines().collect();
        assert_eq!(lines.len(), SUPPORTED_NAMES.len() + CSS_NAME_TO_HEX.len());
        assert!(lines.contains(&"redbright"));
        assert!(lines.contains(&"rebeccapurple\t#663399"));
    }

    #[test]
    fn names_filters() {
        let supported = names(true, false, false).unwrap();
        assert_eq!(supported.output.lines().count(), SUPPORTED_NAMES.len());
        assert!(!supported.output.contains('#'));

        let mapped = names(false, true, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&mapped.output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), CSS_NAME_TO_HEX.len());
        assert_eq!(value[0]["name"], "aliceblue");
        assert_eq!(value[0]["hex"], "#f0f8ff");
    }

    #[test]
    fn palette_prints_resolved_slots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(
            &path,
            "background = \"Black\"\naccent_red = \"Crimson\"\ngradient = [\"#ABC\", \"navy\"]\n",
        )
        .unwrap();

        let report = palette(&path, false).unwrap();
        assert!(report.success);
        assert!(report.output.contains("background\tblack"));
        assert!(report.output.contains("accent_red\t#dc143c"));
        assert!(report.output.ends_with("gradient\t#abc,#000080"));
    }

    #[test]
    fn palette_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yml");
        std::fs::write(&path, "comment: DimGrey\n").unwrap();

        let report = palette(&path, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.output).unwrap();
        assert_eq!(value["comment"], "#696969");
    }

    #[test]
    fn palette_with_bad_color_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "foreground = \"#12345\"\n").unwrap();

        let err = palette(&path, false).unwrap_err();
        assert!(matches!(err, TintError::Config(ConfigError::ValidationError(_))));
        assert!(err.to_string().contains("foreground"));
    }

    #[test]
    fn palette_missing_file() {
        let err = palette(Path::new("/definitely/not/here.toml"), false).unwrap_err();
        assert!(matches!(err, TintError::Config(ConfigError::FileNotFound(_))));
    }
}
