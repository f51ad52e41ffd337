use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Inputs recorded next to an exported table.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Write `<artifact>.provenance.json` with tool version, git commit, callsite,
/// command parameters and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let doc = report_doc(payload.command, payload.params, &[artifact]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "wrote_provenance");
    Ok(provenance_path)
}

/// Provenance document shared by sidecars and `regpoly report`.
#[track_caller]
pub fn report_doc(command: &str, params: Value, outputs: &[&Path]) -> Value {
    let callsite = Location::caller();
    json!({
        "tool": "regpoly",
        "engine_version": regpoly::VERSION,
        "code_rev": current_git_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": command,
        "params": params,
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>()
    })
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
