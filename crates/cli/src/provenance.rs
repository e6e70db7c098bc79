use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters and measurements of one `hull` run, recorded next to its output.
#[derive(Clone, Debug, Serialize)]
pub struct HullRun {
    pub input: String,
    pub sort: String,
    pub capacity: usize,
    pub input_points: usize,
    pub hull_points: usize,
    pub elapsed_ms: f64,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// On-disk layout of `<stem>.provenance.json`.
#[derive(Serialize)]
struct Sidecar<'a, T> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a T,
    outputs: Vec<String>,
}

/// Create the parent directory of `path` unless it is empty or already there.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// Record how `artifact` was produced. Returns the sidecar path.
#[track_caller]
pub fn write_sidecar<T: Serialize>(artifact: &Path, params: &T) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: hullscan::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params,
        outputs: vec![artifact.display().to_string()],
    };
    let path = provenance_path(artifact);
    ensure_parent_dir(&path)?;
    let body = serde_json::to_string_pretty(&doc)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/hull.txt` → `dir/hull.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "hull".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn rev_from_repo() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    non_empty(std::str::from_utf8(&output.stdout).ok()?)
}

/// `GIT_COMMIT` baked in at build time, else `GIT_COMMIT` at runtime, else
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().as_deref().and_then(non_empty))
        .or_else(rev_from_repo)
        .unwrap_or_else(|| "unknown".to_string())
}
