//! Session hook that reconciles logins with a kernel recent list
//!
//! Pairs with the packet filter's `recent` match: the firewall rate-limits
//! new connections from unknown sources, and a successful authentication
//! adds or removes the client's address in the named recent list so clients
//! with a correct login stop being penalized. One invocation handles one
//! login event; the host framework supplies the arguments and the remote
//! host identifier, and gets back a two-valued outcome.

pub mod args;
pub mod config;
pub mod control;
pub mod error;
pub mod resolver;
pub mod session;
pub mod writer;

// Re-export commonly used types
pub use args::{Action, ModuleArgs, DEFAULT_LIST};
pub use config::{Config, ConfigLoader};
pub use control::ControlDirs;
pub use error::{RecentError, Result};
pub use resolver::{HostResolver, SystemResolver};
pub use session::{RecentHook, SessionContext, SessionModule, SessionOutcome};
