//! Detection of the resolver-management convention installed on the host.

use crate::config::ResolverPaths;
use crate::error::{ManagerError, Result};
use std::fmt;
use std::io;
use std::path::Path;

/// Which resolver-management convention is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverConvention {
    /// Debian `resolvconf`: `head`/`base` fragments under
    /// `/etc/resolvconf/resolv.conf.d/`.
    ResolvConf,
    /// `openresolv`: a single `key=value` file at `/etc/resolvconf.conf`.
    OpenResolv,
    /// Neither marker present. Nothing is written.
    None,
}

impl fmt::Display for ResolverConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ResolvConf => "resolvconf",
            Self::OpenResolv => "openresolv",
            Self::None => "none",
        })
    }
}

/// Probes both marker paths. `resolvconf` wins if both are present.
///
/// # Errors
///
/// Returns [`ManagerError::Probe`] if either marker cannot be checked for a
/// reason other than not existing, even when the other marker was found.
pub fn detect_convention(paths: &ResolverPaths) -> Result<ResolverConvention> {
    let resolvconf = exists(paths.resolvconf_marker())?;
    let openresolv = exists(paths.openresolv_marker())?;

    let convention = match (resolvconf, openresolv) {
        (true, _) => ResolverConvention::ResolvConf,
        (false, true) => ResolverConvention::OpenResolv,
        (false, false) => ResolverConvention::None,
    };

    tracing::info!(convention = %convention, "Detected resolver convention");
    Ok(convention)
}

/// `NotFound` is a negative answer; every other error is fatal.
fn exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Marker not present");
            Ok(false)
        }
        Err(source) => Err(ManagerError::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}
