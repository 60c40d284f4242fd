use anyhow::Result;
use aurh::commands::{self, Config};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// aurh - AUR helper
///
/// Keeps a local store of AUR recipe repositories, builds and installs them
/// with makepkg, and reports which installed packages are out of date.
///
/// Examples:
///   aurh search yay            # Search the AUR
///   aurh install yay           # Clone, build and install yay
///   aurh upgrade               # Pull every tracked recipe and rebuild outdated ones
///   aurh check                 # Compare installed and AUR versions
#[derive(Parser, Debug)]
#[command(author, version = env!("AURH_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Repository store directory (defaults to <cache dir>/aurh)
    #[arg(
        long = "root",
        short = 'r',
        env = "AURH_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub root: Option<PathBuf>,

    /// Package API URL (defaults to https://aur.archlinux.org)
    #[arg(long = "api-url", env = "AURH_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Answer yes to all prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch, build and install packages
    #[command(visible_alias = "i")]
    Install(RequiredPackages),

    /// Uninstall packages and delete their local repositories
    #[command(visible_alias = "r")]
    Remove(RequiredPackages),

    /// Pull recipes and rebuild packages whose installed version differs
    #[command(visible_alias = "u")]
    Upgrade(OptionalPackages),

    /// Clone or pull recipes without building
    #[command(visible_alias = "y")]
    Refresh(OptionalPackages),

    /// Show package details from the AUR
    #[command(visible_alias = "d")]
    Details(RequiredPackages),

    /// Search the AUR
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Compare installed, remote and local state of tracked packages
    #[command(visible_alias = "c")]
    Check,

    /// List tracked packages
    #[command(visible_alias = "l")]
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct RequiredPackages {
    /// Package names
    #[arg(value_name = "PACKAGE", required = true, num_args = 1..)]
    pub packages: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct OptionalPackages {
    /// Package names (defaults to every tracked package)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Search terms; every term must match the name or description
    #[arg(value_name = "TERM", required = true, num_args = 1..)]
    pub terms: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Also print each repository's origin URL
    #[arg(long)]
    pub urls: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let runtime = aurh::runtime::RealRuntime;
    let config = Config::new(&runtime, cli.root, cli.api_url, cli.yes)?;

    match command {
        Commands::Install(args) => commands::install(&runtime, &config, args.packages).await?,
        Commands::Remove(args) => commands::remove(&runtime, &config, &args.packages)?,
        Commands::Upgrade(args) => commands::upgrade(&runtime, &config, args.packages).await?,
        Commands::Refresh(args) => commands::refresh(&runtime, &config, args.packages).await?,
        Commands::Details(args) => commands::details(&runtime, &config, &args.packages).await?,
        Commands::Search(args) => commands::search(&runtime, &config, &args.terms).await?,
        Commands::Check => commands::check(&runtime, &config).await?,
        Commands::List(args) => commands::list(&runtime, &config, args.urls)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_install_parsing() {
        let cli = Cli::try_parse_from(["aurh", "install", "yay", "paru"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.packages, vec!["yay", "paru"]);
            }
            _ => panic!("Expected Install command"),
        }
        assert_eq!(cli.root, None);
        assert!(!cli.yes);
    }

    #[test]
    fn test_cli_install_requires_package() {
        assert!(Cli::try_parse_from(["aurh", "install"]).is_err());
        assert!(Cli::try_parse_from(["aurh", "remove"]).is_err());
        assert!(Cli::try_parse_from(["aurh", "details"]).is_err());
        assert!(Cli::try_parse_from(["aurh", "search"]).is_err());
    }

    #[test]
    fn test_cli_upgrade_defaults_to_all() {
        let cli = Cli::try_parse_from(["aurh", "upgrade"]).unwrap();
        match cli.command {
            Some(Commands::Upgrade(args)) => assert!(args.packages.is_empty()),
            _ => panic!("Expected Upgrade command"),
        }
    }

    #[test]
    fn test_cli_aliases() {
        let cli = Cli::try_parse_from(["aurh", "y", "foo"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Refresh(_))));

        let cli = Cli::try_parse_from(["aurh", "s", "foo", "bar"]).unwrap();
        match cli.command {
            Some(Commands::Search(args)) => assert_eq!(args.terms, vec!["foo", "bar"]),
            _ => panic!("Expected Search command"),
        }

        let cli = Cli::try_parse_from(["aurh", "c"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn test_cli_list_urls() {
        let cli = Cli::try_parse_from(["aurh", "l", "--urls"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => assert!(args.urls),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_global_options_parsing() {
        let cli = Cli::try_parse_from([
            "aurh",
            "--root",
            "/tmp/store",
            "upgrade",
            "-y",
            "--api-url",
            "http://localhost:8080",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/store")));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
        assert!(cli.yes);
    }

    #[test]
    fn test_cli_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["aurh"]).unwrap();
        assert!(cli.command.is_none());
    }
}
