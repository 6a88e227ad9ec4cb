//! External package manager adapters.
//!
//! Each adapter pairs a presence probe with an install command against one
//! external manager, behind the [`PackageManager`] trait the batch
//! installer consumes. Adapters spawn the external tool and nothing else;
//! the manager's own database is the only source of truth for "installed".

pub mod homebrew;
pub mod languages;

pub use homebrew::{CaskManager, FormulaManager, TapManager};
pub use languages::{GemManager, GoManager, PipManager};

use crate::catalog::ManagerKind;
use crate::config::Settings;
use crate::error::Result;
use crate::shell::{self, CommandOptions};

/// How much of the external tool's output reaches the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutput {
    /// Inherit stdio so the tool writes straight to the terminal.
    Stream,
    /// Capture both streams; stderr is replayed only on failure.
    Capture,
}

impl InstallOutput {
    /// Execution options implementing this output policy.
    pub(crate) fn options(self) -> CommandOptions {
        match self {
            Self::Stream => CommandOptions::default(),
            Self::Capture => CommandOptions {
                capture_stdout: true,
                capture_stderr: true,
                ..Default::default()
            },
        }
    }
}

/// Run an install-style command under the given output policy.
pub(crate) fn run_install(command: &str, output: InstallOutput) -> Result<()> {
    let result = shell::execute(command, &output.options())?;
    shell::ensure_success(command, &result)
}

/// The probe/install pair a category is processed against.
///
/// Probe and install must target the same underlying manager: a probe that
/// consults `brew list` pairs with `brew install`, never with pip. The
/// installer holds that pairing per category via [`manager_for`].
pub trait PackageManager {
    /// Manager name for status lines (e.g. "brew cask").
    fn label(&self) -> &str;

    /// Whether `item` is already present, per the manager's own listing.
    fn is_installed(&self, item: &str) -> Result<bool>;

    /// Install `item`. A nonzero exit propagates untouched to the caller.
    fn install(&self, item: &str) -> Result<()>;
}

/// Build the adapter owning a category's namespace.
pub fn manager_for(
    kind: ManagerKind,
    settings: &Settings,
    output: InstallOutput,
) -> Box<dyn PackageManager> {
    match kind {
        ManagerKind::Tap => Box::new(TapManager::new(output)),
        ManagerKind::Formula => Box::new(FormulaManager::new(output)),
        ManagerKind::Cask => Box::new(CaskManager::new(settings.cask_appdir.clone(), output)),
        ManagerKind::Pip => Box::new(PipManager::new(output)),
        ManagerKind::Gem => Box::new(GemManager::new(output)),
        ManagerKind::Go => Box::new(GoManager::new(output)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_for_covers_every_kind() {
        let settings = Settings::default();
        for kind in [
            ManagerKind::Tap,
            ManagerKind::Formula,
            ManagerKind::Cask,
            ManagerKind::Pip,
            ManagerKind::Gem,
            ManagerKind::Go,
        ] {
            let manager = manager_for(kind, &settings, InstallOutput::Capture);
            assert!(!manager.label().is_empty());
        }
    }

    #[test]
    fn labels_match_catalog_vocabulary() {
        let settings = Settings::default();
        let manager = manager_for(ManagerKind::Cask, &settings, InstallOutput::Capture);
        assert_eq!(manager.label(), "brew cask");
    }
}
