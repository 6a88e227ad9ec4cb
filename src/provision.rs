//! One-shot provisioning steps.
//!
//! Not everything a fresh machine needs comes out of a package catalog.
//! The Xcode Command Line Tools and Homebrew itself must exist before the
//! first `brew` probe can run, and nvm and rustup ship as installer
//! scripts rather than packages. Each is the same probe-then-install
//! shape as a catalog category, with a single item.

use crate::error::Result;
use crate::fetch::ScriptFetcher;
use crate::managers::InstallOutput;
use crate::shell::{self, CommandOptions};
use crate::ui::UserInterface;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Official Homebrew installer script.
pub const HOMEBREW_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// nvm installer script, pinned to a released tag.
pub const NVM_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/nvm-sh/nvm/v0.40.3/install.sh";

/// rustup installer script.
pub const RUSTUP_INSTALL_URL: &str = "https://sh.rustup.rs";

/// How a step decides the tool is already present.
enum ProbeKind {
    /// Command exits zero; stdout may carry a version to display.
    Command(&'static str),
    /// A file exists (nvm has no binary, only a sourced script).
    File(PathBuf),
}

/// How a step installs the tool.
enum InstallKind {
    /// Run a local command as-is.
    Command(&'static str),
    /// Fetch a remote script and hand it to bash.
    RemoteScript {
        url: String,
        env: Vec<(String, String)>,
        args: &'static str,
    },
}

/// Outcome of a one-shot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Probe said present; nothing ran.
    AlreadyPresent,
    /// The installer ran to completion.
    Installed,
}

/// A provisioning step that installs a single tool.
pub struct OneShotStep {
    /// Display name.
    pub name: &'static str,
    /// Identifier used for scratch files.
    slug: &'static str,
    probe: ProbeKind,
    install: InstallKind,
}

/// The prerequisite steps, in the order the run executes them: the
/// compiler toolchain first, then the package manager everything else
/// goes through.
pub fn prerequisite_steps() -> Vec<OneShotStep> {
    vec![
        OneShotStep {
            name: "Xcode Command Line Tools",
            slug: "clt",
            probe: ProbeKind::Command("xcode-select -p"),
            install: InstallKind::Command("xcode-select --install"),
        },
        OneShotStep {
            name: "Homebrew",
            slug: "homebrew",
            probe: ProbeKind::Command("brew --version"),
            install: InstallKind::RemoteScript {
                url: HOMEBREW_INSTALL_URL.to_string(),
                env: vec![("NONINTERACTIVE".to_string(), "1".to_string())],
                args: "",
            },
        },
    ]
}

/// The two independent language-runtime installers that close the run.
///
/// `nvm_dir` is explicit configuration; the installer script honors it
/// through `NVM_DIR` instead of inheriting whatever the process happened
/// to export.
pub fn language_runtime_steps(nvm_dir: &std::path::Path) -> Vec<OneShotStep> {
    vec![
        OneShotStep {
            name: "nvm",
            slug: "nvm",
            probe: ProbeKind::File(nvm_dir.join("nvm.sh")),
            install: InstallKind::RemoteScript {
                url: NVM_INSTALL_URL.to_string(),
                env: vec![(
                    "NVM_DIR".to_string(),
                    nvm_dir.to_string_lossy().into_owned(),
                )],
                args: "",
            },
        },
        OneShotStep {
            name: "rustup",
            slug: "rustup",
            probe: ProbeKind::Command("rustup --version"),
            install: InstallKind::RemoteScript {
                url: RUSTUP_INSTALL_URL.to_string(),
                env: Vec::new(),
                args: "-y --no-modify-path",
            },
        },
    ]
}

impl OneShotStep {
    /// Build a remote-script step against an arbitrary URL (for tests).
    #[cfg(test)]
    fn remote(name: &'static str, slug: &'static str, probe: ProbeKind, url: String) -> Self {
        Self {
            name,
            slug,
            probe,
            install: InstallKind::RemoteScript {
                url,
                env: Vec::new(),
                args: "",
            },
        }
    }

    /// Probe for the tool; returns presence plus a displayable version.
    fn probe_present(&self) -> Result<(bool, Option<String>)> {
        match &self.probe {
            ProbeKind::Command(command) => {
                let result = shell::execute_quiet(command)?;
                if result.success {
                    Ok((true, extract_version(&result.stdout)))
                } else {
                    Ok((false, None))
                }
            }
            ProbeKind::File(path) => Ok((path.is_file(), None)),
        }
    }

    /// Probe, then install if absent. Fail-fast like everything else.
    pub fn run(
        &self,
        fetcher: &ScriptFetcher,
        output: InstallOutput,
        ui: &mut dyn UserInterface,
    ) -> Result<StepOutcome> {
        let (present, version) = self.probe_present()?;
        if present {
            tracing::debug!(step = self.name, "already installed");
            match version {
                Some(v) => ui.skipped(&format!("{} {} already installed", self.name, v)),
                None => ui.skipped(&format!("{} already installed", self.name)),
            }
            return Ok(StepOutcome::AlreadyPresent);
        }

        tracing::info!(step = self.name, "installing");
        let mut spinner = ui.start_spinner(&format!("Installing {}…", self.name));
        let outcome = match &self.install {
            InstallKind::Command(command) => {
                let options = exec_options(output, &[]);
                shell::execute(command, &options)
                    .and_then(|result| shell::ensure_success(command, &result))
            }
            InstallKind::RemoteScript { url, env, args } => fetcher
                .fetch(url)
                .and_then(|script| run_script(self.slug, &script, env, args, output)),
        };

        match outcome {
            Ok(()) => {
                spinner.finish_success(&format!("{} installed", self.name));
                Ok(StepOutcome::Installed)
            }
            Err(e) => {
                spinner.finish_error(&format!("{} failed", self.name));
                Err(e)
            }
        }
    }
}

fn exec_options(output: InstallOutput, env: &[(String, String)]) -> CommandOptions {
    let mut options = output.options();
    for (key, value) in env {
        options.env.insert(key.clone(), value.clone());
    }
    options
}

/// Write a fetched script to a scratch file and hand it to bash.
fn run_script(
    slug: &str,
    script: &str,
    env: &[(String, String)],
    args: &str,
    output: InstallOutput,
) -> Result<()> {
    let path = std::env::temp_dir().join(format!("basecamp-{}-{}.sh", slug, std::process::id()));
    std::fs::write(&path, script)?;

    let command = if args.is_empty() {
        format!("/bin/bash '{}'", path.display())
    } else {
        format!("/bin/bash '{}' {}", path.display(), args)
    };

    let options = exec_options(output, env);
    let result = shell::execute(&command, &options);
    let _ = std::fs::remove_file(&path);

    let result = result?;
    shell::ensure_success(&command, &result)
}

/// Pull a dotted version number out of a tool's version banner
/// (e.g. "Homebrew 4.3.9" or "rustup 1.27.1 (2024-04-29)").
fn extract_version(output: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_RE.get_or_init(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").unwrap());
    re.captures(output)
        .map(|captures| captures[1].to_string())
}
