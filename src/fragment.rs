//! Fragment synthesis and writing.
//!
//! Every fragment is rewritten in full on each run with mode `0644`. Nothing
//! here reads a fragment back.

use crate::config::ResolverPaths;
use crate::convention::ResolverConvention;
use crate::error::{ManagerError, Result};
use crate::nameservers::Nameservers;
use std::fs::{OpenOptions, Permissions};
use std::io::Write;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

/// Banner at the top of the `resolvconf` head fragment.
const HEAD_BANNER: &str = "# This file was automatically updated by resolvconf-manager";

/// Resolver file `openresolv` is told to generate.
const OPENRESOLV_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Mode of every written fragment.
const FRAGMENT_MODE: u32 = 0o644;

/// Writes the fragments for `convention`.
///
/// Returns the paths written, in write order. Inputs that are absent leave
/// the matching file untouched.
///
/// Under `openresolv` only the head address is used, and with no head address
/// the config file is left untouched rather than written with an empty
/// `name_servers=`.
///
/// # Errors
///
/// Returns [`ManagerError::Write`] on the first failed write. Files written
/// before the failure are left in place.
pub fn write_fragments(
    paths: &ResolverPaths,
    convention: ResolverConvention,
    nameservers: &Nameservers,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match convention {
        ResolverConvention::ResolvConf => {
            if let Some(head) = &nameservers.head {
                write_file(&paths.resolvconf_head, &resolvconf_head_content(head))?;
                written.push(paths.resolvconf_head.clone());
            } else {
                tracing::debug!("No head address, leaving head fragment untouched");
            }

            if nameservers.base.is_empty() {
                tracing::debug!("No base addresses, leaving base fragment untouched");
            } else {
                write_file(
                    &paths.resolvconf_base,
                    &resolvconf_base_content(&nameservers.base),
                )?;
                written.push(paths.resolvconf_base.clone());
            }
        }
        ResolverConvention::OpenResolv => {
            if !nameservers.base.is_empty() {
                tracing::warn!(
                    base = ?nameservers.base,
                    "openresolv supports only a head address, ignoring base addresses"
                );
            }

            if let Some(head) = &nameservers.head {
                write_file(&paths.openresolv_conf, &openresolv_content(head))?;
                written.push(paths.openresolv_conf.clone());
            } else {
                tracing::warn!(
                    path = %paths.openresolv_conf.display(),
                    "No head address, leaving openresolv config untouched"
                );
            }
        }
        ResolverConvention::None => {
            tracing::info!("No resolver convention detected, writing nothing");
        }
    }

    Ok(written)
}

// ---------------------------------------------------------------------------
// Content helpers
// ---------------------------------------------------------------------------

/// ```text
/// # This file was automatically updated by resolvconf-manager
///
/// nameserver 99.99.99.99
/// ```
fn resolvconf_head_content(address: &str) -> String {
    format!("{HEAD_BANNER}\n\nnameserver {address}\n")
}

/// One `nameserver` line per address, no trailing newline.
fn resolvconf_base_content(addresses: &[String]) -> String {
    addresses
        .iter()
        .map(|a| format!("nameserver {a}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn openresolv_content(address: &str) -> String {
    format!("resolv_conf={OPENRESOLV_RESOLV_CONF}\nname_servers={address}")
}

/// Truncating write. The mode is forced even if the file already existed.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source| ManagerError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FRAGMENT_MODE)
        .open(path)
        .map_err(wrap)?;
    file.write_all(contents.as_bytes()).map_err(wrap)?;
    file.set_permissions(Permissions::from_mode(FRAGMENT_MODE))
        .map_err(wrap)?;

    tracing::info!(path = %path.display(), "Wrote resolver fragment");
    tracing::debug!(path = %path.display(), contents, "Fragment contents");
    Ok(())
}
