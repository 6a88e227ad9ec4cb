//! Interrupt handling.
//!
//! The only cancellation a bootstrap run supports is the operator hitting
//! Ctrl-C. The handler writes one graceful-exit notice and terminates
//! with the conventional 130 status; whatever the external package
//! manager was doing is its own problem to clean up. Because every pass
//! is idempotent, re-running after an interrupt picks up where it left
//! off.

use std::sync::atomic::{AtomicBool, Ordering};

/// Printed once when the run is interrupted.
pub const INTERRUPT_NOTICE: &str =
    "\nInterrupted. Stopping here; re-run basecamp to pick up where it left off.\n";

static HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);
static NOTICE_PRINTED: AtomicBool = AtomicBool::new(false);

/// Install the SIGINT handler. Safe to call more than once; only the
/// first call registers anything.
pub fn install_handler() {
    if HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    #[cfg(unix)]
    // SAFETY: registering a handler that only calls async-signal-safe
    // functions (write, _exit)
    unsafe {
        let handler = handle_sigint as extern "C" fn(libc::c_int);
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

#[cfg(unix)]
extern "C" fn handle_sigint(_sig: libc::c_int) {
    // The notice goes out exactly once even if SIGINT is delivered again
    // before _exit runs.
    if !NOTICE_PRINTED.swap(true, Ordering::SeqCst) {
        // SAFETY: write(2) is async-signal-safe
        unsafe {
            libc::write(
                libc::STDERR_FILENO,
                INTERRUPT_NOTICE.as_ptr() as *const libc::c_void,
                INTERRUPT_NOTICE.len(),
            );
        }
    }
    // SAFETY: _exit(2) is async-signal-safe
    unsafe {
        libc::_exit(130);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_mentions_rerunning() {
        assert!(INTERRUPT_NOTICE.contains("re-run"));
        assert!(INTERRUPT_NOTICE.ends_with('\n'));
    }

    #[test]
    fn install_handler_is_idempotent() {
        install_handler();
        install_handler();
        assert!(HANDLER_INSTALLED.load(Ordering::SeqCst));
    }
}
