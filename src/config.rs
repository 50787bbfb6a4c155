//! Manager configuration.

use std::fmt;
use std::path::{Path, PathBuf};

/// Debian `resolvconf` head fragment. Also the resolvconf marker.
pub const RESOLVCONF_HEAD_FILE: &str = "/etc/resolvconf/resolv.conf.d/head";

/// Debian `resolvconf` base fragment.
pub const RESOLVCONF_BASE_FILE: &str = "/etc/resolvconf/resolv.conf.d/base";

/// `openresolv` configuration file. Also the openresolv marker.
pub const OPENRESOLV_CONF_FILE: &str = "/etc/resolvconf.conf";

/// The fixed paths probed and written by the manager.
///
/// # Example
///
/// ```
/// use resolvconf_manager::ResolverPaths;
///
/// let paths = ResolverPaths::under_root("/tmp/image");
/// assert_eq!(
///     paths.openresolv_conf,
///     std::path::Path::new("/tmp/image/etc/resolvconf.conf"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverPaths {
    /// Head fragment, prepended by `resolvconf` to the generated file.
    pub resolvconf_head: PathBuf,

    /// Base fragment, merged by `resolvconf` into the generated file.
    pub resolvconf_base: PathBuf,

    /// Single-file `openresolv` configuration.
    pub openresolv_conf: PathBuf,
}

impl ResolverPaths {
    /// Rebases the system paths under `root`.
    ///
    /// Useful for tests and for preparing a chroot.
    #[must_use]
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let rebase = |p: &str| root.join(p.trim_start_matches('/'));
        Self {
            resolvconf_head: rebase(RESOLVCONF_HEAD_FILE),
            resolvconf_base: rebase(RESOLVCONF_BASE_FILE),
            openresolv_conf: rebase(OPENRESOLV_CONF_FILE),
        }
    }

    /// Marker whose presence means the `resolvconf` layout is installed.
    #[must_use]
    pub fn resolvconf_marker(&self) -> &Path {
        &self.resolvconf_head
    }

    /// Marker whose presence means `openresolv` is installed.
    #[must_use]
    pub fn openresolv_marker(&self) -> &Path {
        &self.openresolv_conf
    }
}

impl Default for ResolverPaths {
    fn default() -> Self {
        Self {
            resolvconf_head: PathBuf::from(RESOLVCONF_HEAD_FILE),
            resolvconf_base: PathBuf::from(RESOLVCONF_BASE_FILE),
            openresolv_conf: PathBuf::from(OPENRESOLV_CONF_FILE),
        }
    }
}

/// External command that regenerates `/etc/resolv.conf` from the fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand {
    /// Program name or path.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl UpdateCommand {
    /// Creates a command from a program and its arguments.
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for UpdateCommand {
    /// `resolvconf -u`
    fn default() -> Self {
        Self::new("resolvconf", ["-u"])
    }
}

impl fmt::Display for UpdateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Configuration for a [`ResolvconfManager`](crate::ResolvconfManager).
///
/// # Example
///
/// ```
/// use resolvconf_manager::{ManagerConfig, ResolverPaths, UpdateCommand};
///
/// let config = ManagerConfig::default()
///     .with_paths(ResolverPaths::under_root("/tmp/image"))
///     .with_update_command(UpdateCommand::new("true", Vec::<String>::new()))
///     .with_validation(false);
///
/// assert!(!config.validate);
/// assert_eq!(config.update_command.to_string(), "true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Paths probed and written.
    pub paths: ResolverPaths,

    /// Command run after the fragments are written.
    pub update_command: UpdateCommand,

    /// Reject addresses that are not valid IPv4 or IPv6 syntax.
    pub validate: bool,
}

impl ManagerConfig {
    /// Overrides the paths.
    #[must_use]
    pub fn with_paths(mut self, paths: ResolverPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Overrides the update command.
    #[must_use]
    pub fn with_update_command(mut self, command: UpdateCommand) -> Self {
        self.update_command = command;
        self
    }

    /// Enables or disables address validation.
    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            paths: ResolverPaths::default(),
            update_command: UpdateCommand::default(),
            validate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_system_paths() {
        let p = ResolverPaths::default();
        assert_eq!(p.resolvconf_head, Path::new(RESOLVCONF_HEAD_FILE));
        assert_eq!(p.resolvconf_base, Path::new(RESOLVCONF_BASE_FILE));
        assert_eq!(p.openresolv_conf, Path::new(OPENRESOLV_CONF_FILE));
        assert_eq!(p.resolvconf_marker(), p.resolvconf_head.as_path());
        assert_eq!(p.openresolv_marker(), p.openresolv_conf.as_path());
    }

    #[test]
    fn under_root_rebases() {
        let p = ResolverPaths::under_root("/scratch");
        assert_eq!(
            p.resolvconf_head,
            Path::new("/scratch/etc/resolvconf/resolv.conf.d/head")
        );
        assert_eq!(
            p.resolvconf_base,
            Path::new("/scratch/etc/resolvconf/resolv.conf.d/base")
        );
        assert_eq!(p.openresolv_conf, Path::new("/scratch/etc/resolvconf.conf"));
    }

    #[test]
    fn update_command_defaults() {
        let c = UpdateCommand::default();
        assert_eq!(c.program, "resolvconf");
        assert_eq!(c.args, vec!["-u"]);
        assert_eq!(c.to_string(), "resolvconf -u");
    }

    #[test]
    fn manager_config_defaults() {
        let c = ManagerConfig::default();
        assert!(c.validate);
        assert_eq!(c.paths, ResolverPaths::default());
        assert_eq!(c.update_command, UpdateCommand::default());
    }
}
