//! Homebrew adapters: taps, formulas, and casks.
//!
//! All three share the `brew` binary but probe different namespaces, so
//! each gets its own adapter with its own listing command. Presence is
//! whatever `brew list`/`brew tap` reports at the moment of the check;
//! nothing is cached across categories except the tap listing, which is
//! one command for the whole run instead of one per tap.

use crate::error::Result;
use crate::managers::{run_install, InstallOutput, PackageManager};
use crate::shell;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;

/// Registers third-party tap repositories.
pub struct TapManager {
    output: InstallOutput,
    installed: RefCell<Option<HashSet<String>>>,
}

impl TapManager {
    pub fn new(output: InstallOutput) -> Self {
        Self {
            output,
            installed: RefCell::new(None),
        }
    }
}

/// Parse `brew tap` output into the set of registered taps.
fn parse_taps(output: &str) -> HashSet<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl PackageManager for TapManager {
    fn label(&self) -> &str {
        "brew tap"
    }

    fn is_installed(&self, item: &str) -> Result<bool> {
        let mut cache = self.installed.borrow_mut();
        if let Some(taps) = cache.as_ref() {
            return Ok(taps.contains(item));
        }

        let result = shell::execute_quiet("brew tap")?;
        shell::ensure_success("brew tap", &result)?;
        let taps = parse_taps(&result.stdout);
        let found = taps.contains(item);
        *cache = Some(taps);
        Ok(found)
    }

    fn install(&self, item: &str) -> Result<()> {
        run_install(&format!("brew tap {item}"), self.output)
    }
}

/// Installs command-line formulas.
pub struct FormulaManager {
    output: InstallOutput,
}

impl FormulaManager {
    pub fn new(output: InstallOutput) -> Self {
        Self { output }
    }

    /// The listing command whose exit status is the presence probe.
    /// `brew list --versions` exits nonzero when the formula is absent.
    fn probe_command(item: &str) -> String {
        format!("brew list --formula --versions {item}")
    }

    fn install_command(item: &str) -> String {
        format!("brew install {item}")
    }
}

impl PackageManager for FormulaManager {
    fn label(&self) -> &str {
        "brew"
    }

    fn is_installed(&self, item: &str) -> Result<bool> {
        Ok(shell::probe(&Self::probe_command(item)))
    }

    fn install(&self, item: &str) -> Result<()> {
        run_install(&Self::install_command(item), self.output)
    }
}

/// Installs prebuilt applications, fonts, and QuickLook plugins.
///
/// The application directory is explicit configuration rather than an
/// inherited `HOMEBREW_CASK_OPTS`, so the install command is fully
/// determined by its arguments.
pub struct CaskManager {
    appdir: PathBuf,
    output: InstallOutput,
}

impl CaskManager {
    pub fn new(appdir: PathBuf, output: InstallOutput) -> Self {
        Self { appdir, output }
    }

    fn probe_command(item: &str) -> String {
        format!("brew list --cask --versions {item}")
    }

    fn install_command(&self, item: &str) -> String {
        format!(
            "brew install --cask --appdir='{}' {item}",
            self.appdir.display()
        )
    }
}

impl PackageManager for CaskManager {
    fn label(&self) -> &str {
        "brew cask"
    }

    fn is_installed(&self, item: &str) -> Result<bool> {
        Ok(shell::probe(&Self::probe_command(item)))
    }

    fn install(&self, item: &str) -> Result<()> {
        run_install(&self.install_command(item), self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_taps_splits_lines() {
        let output = "homebrew/cask-fonts\nhomebrew/services\n";
        let taps = parse_taps(output);
        assert!(taps.contains("homebrew/cask-fonts"));
        assert!(taps.contains("homebrew/services"));
        assert_eq!(taps.len(), 2);
    }

    #[test]
    fn parse_taps_ignores_blank_lines_and_whitespace() {
        let output = "  homebrew/cask-fonts  \n\n\n";
        let taps = parse_taps(output);
        assert_eq!(taps.len(), 1);
        assert!(taps.contains("homebrew/cask-fonts"));
    }

    #[test]
    fn parse_taps_empty_output() {
        assert!(parse_taps("").is_empty());
    }

    #[test]
    fn formula_probe_uses_versions_listing() {
        assert_eq!(
            FormulaManager::probe_command("wget"),
            "brew list --formula --versions wget"
        );
    }

    #[test]
    fn formula_install_command() {
        assert_eq!(FormulaManager::install_command("jq"), "brew install jq");
    }

    #[test]
    fn cask_probe_targets_cask_namespace() {
        assert_eq!(
            CaskManager::probe_command("iterm2"),
            "brew list --cask --versions iterm2"
        );
    }

    #[test]
    fn cask_install_carries_explicit_appdir() {
        let manager = CaskManager::new(PathBuf::from("/Applications"), InstallOutput::Capture);
        assert_eq!(
            manager.install_command("rectangle"),
            "brew install --cask --appdir='/Applications' rectangle"
        );
    }

    #[test]
    fn cask_appdir_is_quoted_for_spaces() {
        let manager = CaskManager::new(
            PathBuf::from("/Users/someone/My Apps"),
            InstallOutput::Capture,
        );
        let command = manager.install_command("vlc");
        assert!(command.contains("--appdir='/Users/someone/My Apps'"));
    }

    #[test]
    fn labels_name_their_namespace() {
        assert_eq!(TapManager::new(InstallOutput::Capture).label(), "brew tap");
        assert_eq!(FormulaManager::new(InstallOutput::Capture).label(), "brew");
        assert_eq!(
            CaskManager::new(PathBuf::from("/Applications"), InstallOutput::Capture).label(),
            "brew cask"
        );
    }
}
