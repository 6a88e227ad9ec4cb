//! Basecamp - Idempotent macOS workstation bootstrap.
//!
//! Basecamp replaces the usual several-hundred-line `setup.sh` with a
//! single binary: a built-in catalog of Homebrew taps, formulas, casks,
//! fonts, QuickLook plugins, and language-ecosystem packages, installed
//! through one idempotent probe-then-install pass per category. Items
//! already present are skipped; the first failed install aborts the run.
//!
//! # Modules
//!
//! - [`catalog`] - The built-in package catalog (flat data)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Remote installer script retrieval
//! - [`installer`] - The idempotent batch installer
//! - [`interrupt`] - Ctrl-C handling
//! - [`managers`] - External package manager adapters
//! - [`provision`] - One-shot prerequisite and runtime installers
//! - [`runner`] - Fixed-order run orchestration
//! - [`shell`] - Shell command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use basecamp::catalog::CATALOG;
//!
//! // The catalog is ordered data: taps come first so later formula and
//! // cask installs can resolve against them.
//! assert_eq!(CATALOG[0].name, "Taps");
//! let items: usize = CATALOG.iter().map(|c| c.items.len()).sum();
//! assert!(items > 0);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod interrupt;
pub mod managers;
pub mod provision;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{BasecampError, Result};
