use clap::{Parser, Subcommand, ValueEnum};
use notemark::model::Domain;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.2" for releases, "0.4.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Domain selector as it appears on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DomainArg {
    Linux,
    Git,
    GitAdvanced,
    Vim,
    Networking,
    ShellScripting,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Linux => Domain::Linux,
            DomainArg::Git => Domain::Git,
            DomainArg::GitAdvanced => Domain::GitAdvanced,
            DomainArg::Vim => Domain::Vim,
            DomainArg::Networking => Domain::Networking,
            DomainArg::ShellScripting => Domain::ShellScripting,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "notemark", bin_name = "notemark", version = get_version())]
#[command(about = "Command-reference study catalog for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Domain to operate on (defaults to the configured default-domain)
    #[arg(short, long, global = true, value_enum)]
    pub domain: Option<DomainArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List topics grouped by category
    #[command(alias = "ls")]
    List {
        /// Filter topics before grouping
        #[arg(short, long)]
        search: Option<String>,

        /// Sort alphabetically by name instead of authoring order
        #[arg(long)]
        sort: bool,
    },

    /// Search topics across name, category, and description
    Search { term: String },

    /// View one or more topics by slug
    #[command(alias = "v")]
    View {
        /// Slugs of the topics (e.g. grep git-rebase)
        #[arg(required = true, num_args = 1..)]
        slugs: Vec<String>,
    },

    /// List the categories of the current domain
    Categories,

    /// List the available domains
    Domains,

    /// Run a practical simulation (gzip, ssh, curl)
    Demo {
        /// Simulation name (omit to list the available ones)
        name: Option<String>,

        /// Events to fire instead of the default walkthrough
        #[arg(short, long = "event")]
        events: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-domain)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
