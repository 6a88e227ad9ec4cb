//! The idempotent batch installer.
//!
//! One parameterized pass replaces the probe-then-install loop the shell
//! ancestor duplicated per package kind: given an ordered item list and
//! the [`PackageManager`] owning its namespace, install everything the
//! manager doesn't already report present.
//!
//! Items are processed strictly in the given order. Present items are
//! skipped with a notice and never re-installed. The first failed install
//! aborts the whole run: no retry, no recovery, nothing after it in the
//! category is touched.

use crate::managers::PackageManager;
use crate::ui::UserInterface;

use crate::error::Result;

/// What a category pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryReport {
    /// Items newly installed this run.
    pub installed: usize,
    /// Items already present, skipped.
    pub skipped: usize,
}

impl CategoryReport {
    /// Total items processed.
    pub fn total(&self) -> usize {
        self.installed + self.skipped
    }
}

/// Install every item in `items` not already present.
///
/// `manager` supplies the probe and install operations; both must target
/// the same external namespace. Returns the skip/install counts, or the
/// first error the external manager produced.
pub fn install_missing(
    name: &str,
    items: &[&str],
    manager: &dyn PackageManager,
    ui: &mut dyn UserInterface,
) -> Result<CategoryReport> {
    let mut report = CategoryReport::default();

    for &item in items {
        if manager.is_installed(item)? {
            tracing::debug!(item, manager = manager.label(), "already installed");
            ui.skipped(&format!("{item} already installed"));
            report.skipped += 1;
            continue;
        }

        tracing::info!(item, manager = manager.label(), category = name, "installing");
        let mut spinner = ui.start_spinner(&format!("Installing {item}…"));
        match manager.install(item) {
            Ok(()) => {
                spinner.finish_success(&format!("{item} installed"));
                report.installed += 1;
            }
            Err(e) => {
                spinner.finish_error(&format!("{item} failed"));
                return Err(e);
            }
        }
    }

    Ok(report)
}
