//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render session, environment list and search path views as table, JSON or YAML.
//! - Mask passwords unless the caller explicitly asks to reveal them.
//!
//! Does NOT handle:
//! - Loading configuration (see `commands`).
//! - Writing to stdout (commands print the returned string).

use anyhow::Result;
use serde::Serialize;

use crate::args::OutputFormat;

const MASK: &str = "****";

/// A resolved session ready for display.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub environment: String,
    pub address: String,
    #[serde(rename = "type")]
    pub protocol: String,
    pub password: String,
}

/// One environment row in `list` output.
#[derive(Debug, Serialize)]
pub struct EnvironmentRow {
    pub environment: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub password: String,
}

/// One search location in `paths` output.
#[derive(Debug, Serialize)]
pub struct PathRow {
    pub path: String,
    pub exists: bool,
}

/// Masks a non-empty password.
pub fn mask_password(password: &str, reveal: bool) -> String {
    if reveal || password.is_empty() {
        password.to_string()
    } else {
        MASK.to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        OutputFormat::Table => Ok(None),
    }
}

pub fn format_session(view: &SessionView, format: OutputFormat) -> Result<String> {
    if let Some(output) = structured(view, format)? {
        return Ok(output);
    }

    Ok([
        format!("{:<13}{}", "Environment:", view.environment),
        format!("{:<13}{}", "Address:", view.address),
        format!("{:<13}{}", "Type:", view.protocol),
        format!("{:<13}{}", "Password:", or_dash(&view.password)),
    ]
    .join("\n"))
}

pub fn format_environments(rows: &[EnvironmentRow], format: OutputFormat) -> Result<String> {
    if let Some(output) = structured(rows, format)? {
        return Ok(output);
    }

    if rows.is_empty() {
        return Ok("No environments configured.".to_string());
    }

    let mut lines = vec![
        format!("{:<20} {:<30} {:<10} {:<10}", "Environment", "Address", "Type", "Password"),
        "-".repeat(73),
    ];
    for row in rows {
        lines.push(format!(
            "{:<20} {:<30} {:<10} {:<10}",
            row.environment,
            or_dash(&row.address),
            or_dash(&row.kind),
            or_dash(&row.password)
        ));
    }
    Ok(lines.join("\n"))
}

pub fn format_paths(rows: &[PathRow], format: OutputFormat) -> Result<String> {
    if let Some(output) = structured(rows, format)? {
        return Ok(output);
    }

    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let status = if row.exists { "found" } else { "missing" };
            format!("{}. {} ({})", index + 1, row.path, status)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
