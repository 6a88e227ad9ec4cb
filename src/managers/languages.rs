//! Language-ecosystem adapters: pip, gem, and go.

use crate::error::Result;
use crate::managers::{run_install, InstallOutput, PackageManager};
use crate::shell::{self, home_dir};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One row of `pip3 list --format=json`.
#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
}

/// Normalize a distribution name the way pip compares them: lowercase,
/// with runs of `-`, `_`, and `.` treated as a single `-` (PEP 503).
fn normalize_pip_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for ch in name.chars() {
        if ch == '-' || ch == '_' || ch == '.' {
            if !last_was_sep {
                out.push('-');
            }
            last_was_sep = true;
        } else {
            out.extend(ch.to_lowercase());
            last_was_sep = false;
        }
    }
    out
}

/// Parse the pip listing into a set of normalized package names.
fn parse_pip_listing(json: &str) -> serde_json::Result<HashSet<String>> {
    let entries: Vec<PipListEntry> = serde_json::from_str(json)?;
    Ok(entries
        .iter()
        .map(|e| normalize_pip_name(&e.name))
        .collect())
}

/// Installs Python packages through pip.
///
/// The installed set is listed once per run (`pip3 list --format=json`)
/// instead of shelling out per package; pip startup is slow enough that
/// this is visible on a catalog of any size.
pub struct PipManager {
    output: InstallOutput,
    installed: RefCell<Option<HashSet<String>>>,
}

impl PipManager {
    pub fn new(output: InstallOutput) -> Self {
        Self {
            output,
            installed: RefCell::new(None),
        }
    }
}

impl PackageManager for PipManager {
    fn label(&self) -> &str {
        "pip3"
    }

    fn is_installed(&self, item: &str) -> Result<bool> {
        let mut cache = self.installed.borrow_mut();
        if let Some(installed) = cache.as_ref() {
            return Ok(installed.contains(&normalize_pip_name(item)));
        }

        let command = "pip3 list --format=json";
        let result = shell::execute_quiet(command)?;
        shell::ensure_success(command, &result)?;
        let installed = parse_pip_listing(&result.stdout)
            .map_err(|e| anyhow::anyhow!("unparseable pip listing: {e}"))?;
        let found = installed.contains(&normalize_pip_name(item));
        *cache = Some(installed);
        Ok(found)
    }

    fn install(&self, item: &str) -> Result<()> {
        run_install(&format!("pip3 install {item}"), self.output)
    }
}

/// Installs Ruby gems.
pub struct GemManager {
    output: InstallOutput,
}

impl GemManager {
    pub fn new(output: InstallOutput) -> Self {
        Self { output }
    }

    /// `gem list -i` exits zero only when an exact-name match is installed.
    fn probe_command(item: &str) -> String {
        format!("gem list -i '^{item}$'")
    }
}

impl PackageManager for GemManager {
    fn label(&self) -> &str {
        "gem"
    }

    fn is_installed(&self, item: &str) -> Result<bool> {
        Ok(shell::probe(&Self::probe_command(item)))
    }

    fn install(&self, item: &str) -> Result<()> {
        run_install(&format!("gem install {item}"), self.output)
    }
}

/// Installs Go tools as modules.
///
/// `go install` leaves a binary in `$GOBIN` (or `$GOPATH/bin`, or
/// `~/go/bin`), so presence is a file check on the tool's binary name
/// rather than another subprocess.
pub struct GoManager {
    output: InstallOutput,
    bin_dirs: Vec<PathBuf>,
}

impl GoManager {
    pub fn new(output: InstallOutput) -> Self {
        Self {
            output,
            bin_dirs: default_go_bin_dirs(),
        }
    }

    /// Override the probed bin directories (for tests).
    pub fn with_bin_dirs(output: InstallOutput, bin_dirs: Vec<PathBuf>) -> Self {
        Self { output, bin_dirs }
    }
}

/// The directories `go install` may drop binaries into, in the order the
/// go toolchain itself consults them.
fn default_go_bin_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(gobin) = std::env::var_os("GOBIN") {
        dirs.push(PathBuf::from(gobin));
    }
    if let Some(gopath) = std::env::var_os("GOPATH") {
        dirs.push(PathBuf::from(gopath).join("bin"));
    }
    dirs.push(home_dir().join("go/bin"));
    dirs
}

/// The binary name `go install` produces for a module path: the last path
/// segment, minus any `@version` suffix.
fn tool_binary_name(module: &str) -> &str {
    let without_version = module.split('@').next().unwrap_or(module);
    without_version
        .rsplit('/')
        .next()
        .unwrap_or(without_version)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl PackageManager for GoManager {
    fn label(&self) -> &str {
        "go"
    }

    fn is_installed(&self, item: &str) -> Result<bool> {
        let binary = tool_binary_name(item);
        Ok(self.bin_dirs.iter().any(|dir| {
            let candidate = dir.join(binary);
            candidate.is_file() && is_executable(&candidate)
        }))
    }

    fn install(&self, item: &str) -> Result<()> {
        run_install(&format!("go install {item}"), self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn normalize_pip_name_lowercases() {
        assert_eq!(normalize_pip_name("Flask"), "flask");
    }

    #[test]
    fn normalize_pip_name_folds_separators() {
        assert_eq!(normalize_pip_name("foo_bar"), "foo-bar");
        assert_eq!(normalize_pip_name("foo.bar"), "foo-bar");
        assert_eq!(normalize_pip_name("foo--bar"), "foo-bar");
        assert_eq!(normalize_pip_name("Foo._-Bar"), "foo-bar");
    }

    #[test]
    fn parse_pip_listing_collects_normalized_names() {
        let json = r#"[{"name": "IPython", "version": "8.20.0"},
                       {"name": "scikit_learn", "version": "1.4.0"}]"#;
        let installed = parse_pip_listing(json).unwrap();
        assert!(installed.contains("ipython"));
        assert!(installed.contains("scikit-learn"));
    }

    #[test]
    fn parse_pip_listing_rejects_garbage() {
        assert!(parse_pip_listing("WARNING: not json").is_err());
    }

    #[test]
    fn gem_probe_anchors_the_name() {
        assert_eq!(GemManager::probe_command("rake"), "gem list -i '^rake$'");
    }

    #[test]
    fn tool_binary_name_strips_version_and_path() {
        assert_eq!(tool_binary_name("golang.org/x/tools/gopls@latest"), "gopls");
        assert_eq!(
            tool_binary_name("github.com/go-delve/delve/cmd/dlv@v1.22.0"),
            "dlv"
        );
        assert_eq!(tool_binary_name("gopls"), "gopls");
    }

    #[test]
    fn go_probe_finds_binary_in_bin_dir() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("gopls"));

        let manager =
            GoManager::with_bin_dirs(InstallOutput::Capture, vec![temp.path().to_path_buf()]);
        assert!(manager
            .is_installed("golang.org/x/tools/gopls@latest")
            .unwrap());
    }

    #[test]
    fn go_probe_misses_absent_binary() {
        let temp = TempDir::new().unwrap();
        let manager =
            GoManager::with_bin_dirs(InstallOutput::Capture, vec![temp.path().to_path_buf()]);
        assert!(!manager
            .is_installed("honnef.co/go/tools/cmd/staticcheck@latest")
            .unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn go_probe_skips_non_executable_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dlv");
        fs::write(&path, "not a binary").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let manager =
            GoManager::with_bin_dirs(InstallOutput::Capture, vec![temp.path().to_path_buf()]);
        assert!(!manager
            .is_installed("github.com/go-delve/delve/cmd/dlv@latest")
            .unwrap());
    }

    #[test]
    fn default_go_bin_dirs_ends_with_home_fallback() {
        let dirs = default_go_bin_dirs();
        assert!(dirs.last().unwrap().ends_with("go/bin"));
    }
}
