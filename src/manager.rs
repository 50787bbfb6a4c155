//! Orchestration of a single run.

use crate::config::ManagerConfig;
use crate::convention::{self, ResolverConvention};
use crate::error::Result;
use crate::fragment;
use crate::nameservers::Nameservers;
use crate::regenerate;
use std::path::PathBuf;

/// Injects nameservers through whichever convention the host uses.
///
/// # Lifecycle
///
/// [`apply`](Self::apply) runs the whole sequence:
///
/// 1. check the input (and validate it unless disabled),
/// 2. [`detect_convention`](Self::detect_convention),
/// 3. [`write_fragments`](Self::write_fragments),
/// 4. [`regenerate`](Self::regenerate), always, even if nothing was written.
///
/// The first error stops the run. Fragments already written stay on disk.
///
/// # Permissions
///
/// The system paths under `/etc` require root. The caller must handle
/// elevation.
///
/// # Example
///
/// ```rust,ignore
/// use resolvconf_manager::{Nameservers, ResolvconfManager};
///
/// let manager = ResolvconfManager::default();
/// manager.apply(&Nameservers::new(Some("169.254.0.2"), ["8.8.8.8"]))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolvconfManager {
    config: ManagerConfig,
}

impl ResolvconfManager {
    /// Creates a manager with the given configuration.
    #[must_use]
    pub const fn new(config: ManagerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Probes the configured marker paths.
    ///
    /// # Errors
    ///
    /// See [`convention::detect_convention`].
    pub fn detect_convention(&self) -> Result<ResolverConvention> {
        convention::detect_convention(&self.config.paths)
    }

    /// Writes fragments for `convention` to the configured paths.
    ///
    /// # Errors
    ///
    /// See [`fragment::write_fragments`].
    pub fn write_fragments(
        &self,
        convention: ResolverConvention,
        nameservers: &Nameservers,
    ) -> Result<Vec<PathBuf>> {
        fragment::write_fragments(&self.config.paths, convention, nameservers)
    }

    /// Runs the configured update command.
    ///
    /// # Errors
    ///
    /// See [`regenerate::regenerate`].
    pub fn regenerate(&self) -> Result<()> {
        regenerate::regenerate(&self.config.update_command)
    }

    /// Runs the full sequence and returns the detected convention.
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage. Argument errors are reported
    /// before anything is probed.
    pub fn apply(&self, nameservers: &Nameservers) -> Result<ResolverConvention> {
        nameservers.ensure_not_empty()?;
        if self.config.validate {
            nameservers.validate()?;
        }

        let convention = self.detect_convention()?;
        let written = self.write_fragments(convention, nameservers)?;
        self.regenerate()?;

        tracing::info!(
            convention = %convention,
            written = written.len(),
            "Updated nameservers"
        );
        Ok(convention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResolverPaths, UpdateCommand};
    use crate::error::ManagerError;
    use std::fs;

    fn manager_in(dir: &std::path::Path, command: UpdateCommand) -> ResolvconfManager {
        ResolvconfManager::new(
            ManagerConfig::default()
                .with_paths(ResolverPaths::under_root(dir))
                .with_update_command(command),
        )
    }

    fn no_op() -> UpdateCommand {
        UpdateCommand::new("true", Vec::<String>::new())
    }

    #[test]
    fn missing_input_is_rejected_before_probing() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let m = manager_in(
            dir.path(),
            UpdateCommand::new("touch", [marker.to_string_lossy().into_owned()]),
        );

        assert!(matches!(
            m.apply(&Nameservers::default()),
            Err(ManagerError::MissingAddress)
        ));
        assert!(!marker.exists());
    }

    #[test]
    fn invalid_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let m = manager_in(dir.path(), no_op());
        assert!(matches!(
            m.apply(&Nameservers::head("256.256.256.256")),
            Err(ManagerError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn validation_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let m = ResolvconfManager::new(
            ManagerConfig::default()
                .with_paths(ResolverPaths::under_root(dir.path()))
                .with_update_command(no_op())
                .with_validation(false),
        );
        let paths = &m.config().paths;
        fs::create_dir_all(paths.resolvconf_head.parent().unwrap()).unwrap();
        fs::write(&paths.resolvconf_head, "").unwrap();

        m.apply(&Nameservers::head("dns.internal")).unwrap();
        assert!(
            fs::read_to_string(&paths.resolvconf_head)
                .unwrap()
                .ends_with("nameserver dns.internal\n")
        );
    }

    #[test]
    fn write_failure_skips_regenerate() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let m = manager_in(
            dir.path(),
            UpdateCommand::new("touch", [marker.to_string_lossy().into_owned()]),
        );
        let paths = &m.config().paths;
        // The head marker is a directory: detection succeeds, writing fails.
        fs::create_dir_all(&paths.resolvconf_head).unwrap();

        assert!(matches!(
            m.apply(&Nameservers::head("1.1.1.1")),
            Err(ManagerError::Write { .. })
        ));
        assert!(!marker.exists());
    }
}
