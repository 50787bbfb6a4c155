//! `resolvconf-manager` command-line entry point.

use clap::Parser;
use resolvconf_manager::{ManagerConfig, Nameservers, ResolverPaths, ResolvconfManager, util};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Printed to stdout when no address is supplied.
const USAGE: &str = "resolvconf-manager [address]

Update resolv.conf to have the address provided as the first entry in /etc/resolv.conf
";

/// Invalid or missing arguments.
const EXIT_USAGE: u8 = 1;

/// A probe, write or regeneration step failed.
const EXIT_FAILURE: u8 = 2;

/// Update resolv.conf to have the address provided as the first entry in
/// /etc/resolv.conf
#[derive(Parser, Debug)]
#[command(name = "resolvconf-manager", version, about, long_about = None)]
struct Cli {
    /// IP address to prepend as first nameserver.
    #[arg(value_name = "ADDRESS", conflicts_with = "head")]
    address: Option<String>,

    /// IP address to prepend as first nameserver.
    #[arg(long, value_name = "ADDRESS")]
    head: Option<String>,

    /// Comma-separated IP addresses to append as nameservers (resolvconf only).
    #[arg(long, value_name = "ADDRESSES", value_delimiter = ',')]
    base: Vec<String>,

    /// Accept addresses that are not valid IPv4/IPv6 syntax.
    #[arg(long)]
    skip_validation: bool,

    /// Treat this directory as `/` for every probed and written path.
    #[arg(long, env = "RESOLVCONF_MANAGER_ROOT", hide = true)]
    root: Option<PathBuf>,
}

impl Cli {
    /// The positional address and `--head` are the same head address.
    fn nameservers(&self) -> Nameservers {
        let head = self.address.as_ref().or(self.head.as_ref());
        Nameservers::new(head.cloned(), self.base.iter().cloned())
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing left to report to if stdout/stderr are gone.
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let nameservers = cli.nameservers();
    if nameservers.is_empty() {
        print!("{USAGE}");
        return ExitCode::from(EXIT_USAGE);
    }

    init_logging();

    let mut config = ManagerConfig::default().with_validation(!cli.skip_validation);
    match &cli.root {
        Some(root) => config = config.with_paths(ResolverPaths::under_root(root)),
        None if !util::is_root() => {
            tracing::warn!("Not running as root, writing under /etc will likely fail");
        }
        None => {}
    }

    match ResolvconfManager::new(config).apply(&nameservers) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_argument_error() => {
            tracing::error!("{e}");
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            if e.is_permission_denied() {
                tracing::error!("{e} (are you root?)");
            } else {
                tracing::error!("{e}");
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
