//! # resolvconf-manager
//!
//! Put a nameserver first in `/etc/resolv.conf` on Linux hosts managed by
//! either Debian `resolvconf` or `openresolv`.
//!
//! Both tools generate `/etc/resolv.conf` from configuration they own, so
//! editing the file directly does not survive the next update. This crate
//! detects which tool is installed, writes the configuration that tool reads,
//! and runs `resolvconf -u` to regenerate the file.
//!
//! | Convention   | Marker                                | Written                                      |
//! |--------------|---------------------------------------|----------------------------------------------|
//! | `resolvconf` | `/etc/resolvconf/resolv.conf.d/head`  | `head` (head address), `base` (base addresses) |
//! | `openresolv` | `/etc/resolvconf.conf`                | `/etc/resolvconf.conf` (head address only)   |
//!
//! If neither marker exists nothing is written, but the update command still
//! runs.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use resolvconf_manager::{Nameservers, ResolvconfManager};
//!
//! // Requires root.
//! let manager = ResolvconfManager::default();
//! let convention = manager.apply(&Nameservers::new(Some("169.254.0.2"), ["8.8.8.8"]))?;
//! ```
//!
//! ## Testing against a scratch directory
//!
//! ```rust,ignore
//! use resolvconf_manager::{ManagerConfig, ResolverPaths, ResolvconfManager, UpdateCommand};
//!
//! let manager = ResolvconfManager::new(
//!     ManagerConfig::default()
//!         .with_paths(ResolverPaths::under_root(dir.path()))
//!         .with_update_command(UpdateCommand::new("true", Vec::<String>::new())),
//! );
//! ```
//!
//! ## Permissions
//!
//! Writing under `/etc` requires root. The caller is responsible for
//! privilege elevation.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod convention;
pub mod error;
pub mod fragment;
pub mod manager;
pub mod nameservers;
pub mod regenerate;
pub mod util;

pub use config::{ManagerConfig, ResolverPaths, UpdateCommand};
pub use convention::{ResolverConvention, detect_convention};
pub use error::{ManagerError, Result};
pub use fragment::write_fragments;
pub use manager::ResolvconfManager;
pub use nameservers::{Nameservers, is_valid_address};
pub use regenerate::regenerate;
