//! Formatting and writing control directives

use crate::args::Action;
use crate::error::{RecentError, Result};
use std::fs::File;
use std::io::Write;
use std::net::Ipv4Addr;
use std::path::Path;

/// Render the one-line command understood by the recent-list interface.
pub fn format_directive(action: Action, address: Ipv4Addr) -> String {
    format!("{}{}\n", action.sign(), address)
}

/// Write a directive to the control pseudo-file.
///
/// The file is opened in truncating write mode; the kernel interprets the
/// write as a command, not as content to store. The whole line goes out in
/// one write call so a concurrent reader of the same control path never sees
/// a partial command. Open and write failures both carry the path and the
/// underlying system error.
pub fn write_directive(path: &Path, action: Action, address: Ipv4Addr) -> Result<()> {
    let directive = format_directive(action, address);

    let mut control = File::create(path).map_err(|err| RecentError::FileOpen {
        path: path.to_path_buf(),
        source: err,
    })?;
    control
        .write_all(directive.as_bytes())
        .map_err(|err| RecentError::FileOpen {
            path: path.to_path_buf(),
            source: err,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quad(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_add_directive() {
        assert_eq!(
            format_directive(Action::Add, quad("203.0.113.9")),
            "+203.0.113.9\n"
        );
    }

    #[test]
    fn test_format_remove_directive() {
        assert_eq!(
            format_directive(Action::Remove, quad("198.51.100.2")),
            "-198.51.100.2\n"
        );
    }

    #[test]
    fn test_write_directive_exact_bytes() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("DEFAULT");

        write_directive(&path, Action::Add, quad("203.0.113.9")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "+203.0.113.9\n");
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("MYLIMIT");
        fs::write(&path, "stale content much longer than one directive\n").unwrap();

        write_directive(&path, Action::Remove, quad("198.51.100.2")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "-198.51.100.2\n");
    }

    #[test]
    fn test_open_failure_carries_path() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("no_such_dir").join("DEFAULT");

        let err = write_directive(&path, Action::Add, quad("203.0.113.9")).unwrap_err();
        match err {
            RecentError::FileOpen { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected FileOpen, got {:?}", other),
        }
    }
}
