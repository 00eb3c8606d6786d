//! Session lifecycle entry points
//!
//! The host authentication framework drives one login event through the
//! two-method lifecycle modeled here. `open_session` carries all the real
//! work; `close_session` has nothing to do and always succeeds.

use crate::args::{self, Action, ModuleArgs};
use crate::control::ControlDirs;
use crate::error::{RecentError, Result};
use crate::resolver::{self, HostResolver, SystemResolver};
use crate::writer;
use tracing::{debug, error};

/// Outcome vocabulary shared with the host framework.
///
/// This is the only result type that crosses the host boundary; the richer
/// [`RecentError`] classification stays internal and is translated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The session step completed.
    Success,
    /// The session step failed; the host's own policy decides whether that
    /// blocks the login.
    SessionError,
}

/// Per-login context supplied by the host framework.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    remote_host: Option<String>,
}

impl SessionContext {
    /// Context for a login from the given remote host identifier.
    pub fn new(remote_host: Option<String>) -> Self {
        Self { remote_host }
    }

    /// The remote host identifier, absent for non-networked logins.
    pub fn remote_host(&self) -> Option<&str> {
        self.remote_host.as_deref()
    }
}

/// The two fixed session lifecycle entry points the host framework calls.
pub trait SessionModule {
    /// Called when a session opens.
    fn open_session(&self, context: &SessionContext, args: &[String]) -> SessionOutcome;

    /// Called when a session closes.
    fn close_session(&self, context: &SessionContext, args: &[String]) -> SessionOutcome;
}

/// Session hook that reconciles authentication outcomes with a recent list.
///
/// Clients that keep failing to authenticate stay rate-limited by the
/// firewall; a client that logs in successfully gets its address removed
/// from (or, with `+`, added to) the named list.
pub struct RecentHook {
    dirs: ControlDirs,
    resolver: Box<dyn HostResolver>,
}

impl RecentHook {
    /// Hook using the stock kernel control directories and the system
    /// resolver.
    pub fn new() -> Self {
        Self::with_dirs(ControlDirs::default())
    }

    /// Hook writing under non-standard control directories.
    pub fn with_dirs(dirs: ControlDirs) -> Self {
        Self {
            dirs,
            resolver: Box::new(SystemResolver),
        }
    }

    /// Replace the name-resolution backend (deterministic lookups in tests).
    pub fn with_resolver(mut self, resolver: Box<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Run the full update for one login event, keeping the classified
    /// error.
    ///
    /// Stages run in order and the first failure is terminal: validate the
    /// invocation arguments, resolve the client address, pick the control
    /// file, write the directive. [`SessionModule::open_session`] wraps this
    /// with the translation to the host's two-valued outcome.
    pub fn apply(&self, context: &SessionContext, raw_args: &[String]) -> Result<()> {
        let ModuleArgs { action, list } = args::parse_args(raw_args)?;

        let rhost = context
            .remote_host()
            .ok_or(RecentError::MissingRemoteHost)?;
        let address = resolver::resolve_ipv4(self.resolver.as_ref(), rhost)?;

        let path = self.dirs.control_path(&list);
        writer::write_directive(&path, action, address)?;

        match action {
            Action::Add => debug!("added {}/{} to list {}", rhost, address, list),
            Action::Remove => debug!("removed {}/{} from list {}", rhost, address, list),
        }
        Ok(())
    }
}

impl SessionModule for RecentHook {
    fn open_session(&self, context: &SessionContext, args: &[String]) -> SessionOutcome {
        match self.apply(context, args) {
            Ok(()) => SessionOutcome::Success,
            Err(err) => {
                error!("{}", err);
                SessionOutcome::SessionError
            }
        }
    }

    fn close_session(&self, _context: &SessionContext, _args: &[String]) -> SessionOutcome {
        SessionOutcome::Success
    }
}

impl Default for RecentHook {
    fn default() -> Self {
        Self::new()
    }
}
