//! Fixed-order run orchestration.
//!
//! One entry point, no decisions: prerequisites, then every catalog
//! category, then the trailing language-runtime installers, always in the
//! same order. The only branches anywhere are the per-item present/absent
//! checks inside [`installer::install_missing`].

use crate::catalog::CATALOG;
use crate::config::Settings;
use crate::error::{BasecampError, Result};
use crate::fetch::ScriptFetcher;
use crate::installer::{self, CategoryReport};
use crate::managers::{manager_for, InstallOutput};
use crate::provision::{language_runtime_steps, prerequisite_steps, StepOutcome};
use crate::shell;
use crate::ui::UserInterface;
use std::time::{Duration, Instant};

/// Totals across the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Items newly installed.
    pub installed: usize,
    /// Items already present.
    pub skipped: usize,
}

impl RunSummary {
    fn add(&mut self, report: CategoryReport) {
        self.installed += report.installed;
        self.skipped += report.skipped;
    }

    fn add_step(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Installed => self.installed += 1,
            StepOutcome::AlreadyPresent => self.skipped += 1,
        }
    }
}

/// The ordered pass names of a run, exactly as executed.
///
/// Exposed so the order is assertable: it is part of the contract, not an
/// implementation accident.
pub fn plan(settings: &Settings) -> Vec<&'static str> {
    let mut names = Vec::new();
    for step in prerequisite_steps() {
        names.push(step.name);
    }
    for category in CATALOG {
        names.push(category.name);
    }
    for step in language_runtime_steps(&settings.nvm_dir) {
        names.push(step.name);
    }
    names
}

/// Run the whole bootstrap.
pub fn run(settings: &Settings, ui: &mut dyn UserInterface) -> Result<RunSummary> {
    ensure_supported_platform()?;

    if shell::is_elevated() {
        ui.warning("Running as root; the Homebrew installer will refuse to.");
    }

    ui.show_header("basecamp");
    let start = Instant::now();

    let output = if ui.output_mode().shows_command_output() {
        InstallOutput::Stream
    } else {
        InstallOutput::Capture
    };
    let fetcher = ScriptFetcher::new();

    let prerequisites = prerequisite_steps();
    let runtimes = language_runtime_steps(&settings.nvm_dir);
    let total = prerequisites.len() + CATALOG.len() + runtimes.len();
    let mut position = 0;
    let mut summary = RunSummary::default();

    for step in &prerequisites {
        position += 1;
        ui.show_category(step.name, position, total);
        summary.add_step(step.run(&fetcher, output, ui)?);
    }

    for category in CATALOG {
        position += 1;
        ui.show_category(category.name, position, total);
        let manager = manager_for(category.kind, settings, output);
        let report =
            installer::install_missing(category.name, category.items, manager.as_ref(), ui)?;
        summary.add(report);
    }

    for step in &runtimes {
        position += 1;
        ui.show_category(step.name, position, total);
        summary.add_step(step.run(&fetcher, output, ui)?);
    }

    let elapsed = start.elapsed();
    ui.message("");
    ui.success(&format!(
        "Camp is set: {} installed, {} already present in {}",
        summary.installed,
        summary.skipped,
        format_duration(elapsed)
    ));
    tracing::info!(
        installed = summary.installed,
        skipped = summary.skipped,
        "bootstrap complete"
    );

    Ok(summary)
}

fn ensure_supported_platform() -> Result<()> {
    if shell::is_macos() {
        return Ok(());
    }
    Err(BasecampError::UnsupportedPlatform {
        message: "basecamp drives xcode-select, Homebrew, and cask installs; \
                  only macOS hosts are supported"
            .to_string(),
    })
}

/// Human-friendly elapsed time: "850ms", "12.3s", "2m 05s".
fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    if millis < 1000 {
        return format!("{}ms", millis);
    }
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }
    let minutes = (secs / 60.0) as u64;
    let rest = secs - (minutes as f64) * 60.0;
    format!("{}m {:02.0}s", minutes, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_order_is_the_contractual_sequence() {
        let settings = Settings::default();
        assert_eq!(
            plan(&settings),
            vec![
                "Xcode Command Line Tools",
                "Homebrew",
                "Taps",
                "Formulas",
                "Fonts",
                "QuickLook plugins",
                "Applications",
                "Python packages",
                "Ruby gems",
                "Go tools",
                "nvm",
                "rustup",
            ]
        );
    }

    #[test]
    fn plan_is_deterministic() {
        let settings = Settings::default();
        assert_eq!(plan(&settings), plan(&settings));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn run_refuses_non_macos_hosts() {
        use crate::ui::MockUI;

        let settings = Settings::default();
        let mut ui = MockUI::new();
        let err = run(&settings, &mut ui).unwrap_err();

        assert!(matches!(err, BasecampError::UnsupportedPlatform { .. }));
        // Refused before anything ran: no banners, no spinners
        assert!(ui.headers().is_empty());
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn summary_accumulates_reports_and_steps() {
        let mut summary = RunSummary::default();
        summary.add(CategoryReport {
            installed: 2,
            skipped: 3,
        });
        summary.add_step(StepOutcome::Installed);
        summary.add_step(StepOutcome::AlreadyPresent);

        assert_eq!(
            summary,
            RunSummary {
                installed: 3,
                skipped: 4
            }
        );
    }

    #[test]
    fn format_duration_picks_sensible_units() {
        assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration(Duration::from_millis(12_300)), "12.3s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 05s");
    }
}
