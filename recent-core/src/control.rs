//! Control pseudo-file location for the kernel recent-list interface

use std::path::PathBuf;

/// Control directory for kernels 2.6.28 and newer.
pub const XT_RECENT_DIR: &str = "/proc/net/xt_recent";
/// Control directory for kernels before 2.6.28.
pub const IPT_RECENT_DIR: &str = "/proc/net/ipt_recent";

/// Parent directories holding one control pseudo-file per recent list.
///
/// The kernel renamed the directory from `ipt_recent` to `xt_recent` in
/// 2.6.28; both generations are candidates so the hook works on either side
/// of that boundary. Non-standard roots can be supplied for containers and
/// tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDirs {
    current: PathBuf,
    legacy: PathBuf,
}

impl Default for ControlDirs {
    fn default() -> Self {
        Self {
            current: PathBuf::from(XT_RECENT_DIR),
            legacy: PathBuf::from(IPT_RECENT_DIR),
        }
    }
}

impl ControlDirs {
    /// Directories rooted somewhere other than the stock `/proc` locations.
    pub fn new(current: impl Into<PathBuf>, legacy: impl Into<PathBuf>) -> Self {
        Self {
            current: current.into(),
            legacy: legacy.into(),
        }
    }

    /// Pick the control file for a list.
    ///
    /// The current-generation candidate wins whenever it exists. Otherwise
    /// the legacy candidate is returned without any existence check of its
    /// own; if that one is missing too, the write stage reports it.
    pub fn control_path(&self, list: &str) -> PathBuf {
        let current = self.current.join(list);
        if current.exists() {
            current
        } else {
            self.legacy.join(list)
        }
    }
}
