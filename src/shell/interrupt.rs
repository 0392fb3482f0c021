//! Interrupt (Ctrl-C) tracking.
//!
//! A terminal Ctrl-C delivers SIGINT to the whole foreground process
//! group, but a signal sent to the launcher alone reaches only the
//! launcher. The handler only sets an atomic flag. The process runner polls
//! it while a child runs and stops the child once it is set, and the
//! bootstrapper checks it between steps.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Result;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
extern "C" fn handle_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT handler.
///
/// On non-unix targets this is a no-op and the OS default applies.
pub fn install_handler() -> Result<()> {
    #[cfg(unix)]
    {
        let handler = handle_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
        // SAFETY: the handler only performs an atomic store, which is
        // async-signal-safe.
        let previous = unsafe { libc::signal(libc::SIGINT, handler) };
        if previous == libc::SIG_ERR {
            return Err(std::io::Error::last_os_error().into());
        }
        tracing::debug!("SIGINT handler installed");
    }
    Ok(())
}

/// Whether an interrupt has been received since startup.
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Whether a child's exit status shows it was killed by SIGINT.
#[cfg(unix)]
pub fn killed_by_interrupt(status: &std::process::ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT)
}

#[cfg(not(unix))]
pub fn killed_by_interrupt(_status: &std::process::ExitStatus) -> bool {
    false
}

/// Whether this process inherited SIGINT as ignored.
///
/// Children inherit an ignored disposition across exec, so tests that rely on
/// a child dying from SIGINT cannot run under a harness started that way
/// (for example a background job of a non-interactive shell).
#[cfg(all(test, unix))]
pub(crate) fn sigint_ignored() -> bool {
    // SAFETY: a null new action only queries the current disposition.
    unsafe {
        let mut current: libc::sigaction = std::mem::zeroed();
        libc::sigaction(libc::SIGINT, std::ptr::null(), &mut current) == 0
            && current.sa_sigaction == libc::SIG_IGN
    }
}
