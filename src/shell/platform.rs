//! Host platform checks.

use std::path::PathBuf;

/// Check whether the host is a macOS machine.
///
/// Every external command this tool drives (`xcode-select`, `brew`,
/// QuickLook plugins, cask installs) is macOS-specific, so the runner
/// refuses to start anywhere else.
pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive shell invocation and to suppress
/// progress bars. Checks common CI environment variables: `CI`,
/// `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root.
///
/// The Homebrew installer refuses to run under root, so the runner warns
/// before the first install rather than failing halfway through.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// The current user's home directory, from `$HOME`.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_macos_matches_compile_target() {
        assert_eq!(is_macos(), cfg!(target_os = "macos"));
    }

    #[test]
    fn home_dir_is_not_empty() {
        assert!(!home_dir().as_os_str().is_empty());
    }

    #[test]
    fn is_ci_detects_ci_var() {
        std::env::set_var("CI", "true");
        assert!(is_ci());
        std::env::remove_var("CI");
    }
}
