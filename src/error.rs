//! Error types.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result alias for manager operations.
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Errors returned by resolver manager operations.
///
/// Every variant is fatal for a run: nothing is retried and no later stage
/// executes once one of these is returned.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Checking for a marker path failed for a reason other than the path
    /// being absent (typically `PermissionDenied`).
    #[error("failed to check for '{}': {source}", path.display())]
    Probe {
        /// The marker path being probed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing a fragment failed.
    #[error("failed to write file '{}': {source}", path.display())]
    Write {
        /// The fragment destination.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The update command could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line, for display.
        command: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The update command exited unsuccessfully.
    #[error("`{command}` exited with {status}: {output}")]
    Regenerate {
        /// The command line, for display.
        command: String,
        /// Exit status of the command.
        status: ExitStatus,
        /// Combined stdout then stderr, verbatim except that invalid UTF-8
        /// is replaced with U+FFFD.
        output: String,
    },

    /// Neither a head nor a base address was supplied.
    #[error("either a head or a base address is required")]
    MissingAddress,

    /// An address failed IPv4/IPv6 syntax validation.
    #[error("invalid nameserver address: '{address}'")]
    InvalidAddress {
        /// The rejected input.
        address: String,
    },
}

impl ManagerError {
    /// Returns `true` for errors caused by the caller's input rather than the
    /// host.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::MissingAddress | Self::InvalidAddress { .. })
    }

    /// Returns `true` if the underlying I/O error is `PermissionDenied`.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::Probe { source, .. } | Self::Write { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn argument_errors() {
        assert!(ManagerError::MissingAddress.is_argument_error());
        assert!(
            ManagerError::InvalidAddress {
                address: "2.2".into()
            }
            .is_argument_error()
        );
        let write = ManagerError::Write {
            path: "/etc/resolvconf.conf".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(!write.is_argument_error());
    }

    #[test]
    fn permission_denied_detected_through_probe_and_write() {
        let probe = ManagerError::Probe {
            path: "/etc/resolvconf/resolv.conf.d/head".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(probe.is_permission_denied());

        let write = ManagerError::Write {
            path: "/etc/resolvconf.conf".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!write.is_permission_denied());
        assert!(!ManagerError::MissingAddress.is_permission_denied());
    }

    #[test]
    fn write_error_names_the_path() {
        let err = ManagerError::Write {
            path: "/etc/resolvconf.conf".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("'/etc/resolvconf.conf'"));
    }
}
