//! Scorecard CLI - scrape competitive-programming profiles into one JSON
//! array for the scoring engine.

mod config;

use clap::{Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

use scorecard::{CpHandles, PlatformId, ProfileScraper};

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(version)]
#[command(about = "Multi-platform competitive-programming profile scraper")]
#[command(
    long_about = "Scorecard fetches profile statistics from LeetCode, CodeChef, Codeforces, \
AtCoder, HackerRank and GitHub, normalizes them into one canonical schema, \
and prints the result as a JSON array. Platforms that fail to scrape are \
simply missing from the output."
)]
#[command(after_long_help = r#"EXAMPLES
    Scrape two platforms:
        $ scorecard scrape --leetcode neal_wu --codeforces tourist

    Scrape a single platform:
        $ scorecard platform github octocat

    Use default handles from the config file:
        $ scorecard scrape

CONFIGURATION
    Scorecard reads configuration from:
      1. ~/.config/scorecard/config.toml (or $XDG_CONFIG_HOME/scorecard/config.toml)
      2. ./scorecard.toml
      3. Environment variables (SCORECARD_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    SCORECARD_GITHUB_TOKEN    GitHub token (optional). Enables the pinned-repo
                              GraphQL query and raises REST rate limits.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape all platforms with a configured or given handle
    Scrape {
        #[command(flatten)]
        handles: HandleArgs,
    },
    /// Scrape a single platform
    Platform {
        /// Platform name (leetcode, codechef, codeforces, atcoder,
        /// hackerrank, github)
        platform: String,
        /// Handle on that platform
        handle: String,
    },
}

/// Per-platform handle overrides. A flag takes precedence over the config
/// file's `[handles]` section.
#[derive(Debug, Clone, clap::Args)]
struct HandleArgs {
    /// LeetCode username
    #[arg(long)]
    leetcode: Option<String>,

    /// CodeChef username
    #[arg(long)]
    codechef: Option<String>,

    /// Codeforces handle
    #[arg(long)]
    codeforces: Option<String>,

    /// AtCoder username
    #[arg(long)]
    atcoder: Option<String>,

    /// HackerRank username
    #[arg(long)]
    hackerrank: Option<String>,

    /// GitHub username
    #[arg(long)]
    github: Option<String>,
}

fn parse_platform(name: &str) -> Option<PlatformId> {
    PlatformId::ALL
        .into_iter()
        .find(|p| p.as_str() == name.to_lowercase())
}

fn merge_handles(flags: HandleArgs, defaults: config::HandlesConfig) -> CpHandles {
    CpHandles {
        leetcode: flags.leetcode.or(defaults.leetcode),
        codechef: flags.codechef.or(defaults.codechef),
        codeforces: flags.codeforces.or(defaults.codeforces),
        atcoder: flags.atcoder.or(defaults.atcoder),
        hackerrank: flags.hackerrank.or(defaults.hackerrank),
        github: flags.github.or(defaults.github),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    // Pretty output for humans, compact for pipes.
    let rendered = if Term::stdout().is_term() {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("scorecard=info,scorecard_cli=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load();
    let cli = Cli::parse();

    let scraper = ProfileScraper::new(config.github.token.clone());

    match cli.command {
        Commands::Scrape { handles } => {
            let handles = merge_handles(handles, config.handles);
            let stats = scraper.scrape_all_platforms_for_user(&handles).await;
            print_json(&stats)?;
        }
        Commands::Platform { platform, handle } => {
            let Some(platform) = parse_platform(&platform) else {
                eprintln!("unknown platform: {platform}");
                std::process::exit(2);
            };
            match scraper.scrape_platform_for_user(platform, &handle).await {
                Some(stats) => print_json(&stats)?,
                None => {
                    eprintln!("scrape failed for {platform} handle {handle:?}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
