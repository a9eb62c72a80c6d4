use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Inputs and headline results recorded next to a CLI output.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    /// Summary of what the command produced (e.g. `dmin`, `distance_evals`); `null` if none.
    pub results: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            results: Value::Null,
        }
    }

    pub fn with_results(mut self, results: Value) -> Self {
        self.results = results;
        self
    }
}

/// Write `<artifact>.provenance.json`: git commit, library version, callsite,
/// params, results, and the artifact path.
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

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "nearest_version": nearest::VERSION,
        "command": payload.command,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "results": payload.results,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
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
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/pair.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/pair.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_command_results_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("result.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("solve", json!({"algo": "dc"}))
            .with_results(json!({"dmin": 0.5, "distance_evals": 12}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "solve");
        assert_eq!(parsed["params"]["algo"], "dc");
        assert_eq!(parsed["results"]["distance_evals"], 12);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }

    #[test]
    fn results_default_to_null() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("cloud.csv");
        let prov_path = write_sidecar(&artifact, Payload::new("gen", json!({"n": 3}))).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert!(parsed["results"].is_null());
    }
}
