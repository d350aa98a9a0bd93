use anyhow::Result;
use clap::Parser;
use folio::commands::{self, BuildOptions, config::Config};
use folio::site::Theme;
use std::path::PathBuf;

/// folio - the ogerly.dev portfolio site
///
/// Lists the published repositories or builds the static site from the
/// repository collection at /data/repos.json.
///
/// Examples:
///   folio repos --language Rust               # List Rust repositories
///   folio --data-url https://ogerly.dev repos # Read the live collection
///   folio build --out dist --theme dark       # Generate the static site
#[derive(Parser, Debug)]
#[command(author, version = env!("FOLIO_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of a site serving /data/repos.json (also via FOLIO_DATA_URL)
    #[arg(long = "data-url", env = "FOLIO_DATA_URL", value_name = "URL", global = true)]
    pub data_url: Option<String>,

    /// Local repository collection, used when no URL is given (also via FOLIO_DATA_FILE)
    #[arg(
        long = "data-file",
        env = "FOLIO_DATA_FILE",
        value_name = "PATH",
        global = true
    )]
    pub data_file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List repositories, most starred first
    Repos(ReposArgs),

    /// Generate the static site
    Build(BuildArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReposArgs {
    /// Only show repositories in this language (exact match)
    #[arg(long, short = 'l', value_name = "LANGUAGE")]
    pub language: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Output directory
    #[arg(long, short = 'o', value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    /// Initial theme of the generated pages (light or dark)
    #[arg(long, env = "FOLIO_THEME", value_name = "THEME", default_value = "light")]
    pub theme: Theme,

    /// Fail instead of publishing the error page when loading fails
    #[arg(long)]
    pub strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(folio::runtime::RealRuntime, cli.data_url, cli.data_file)?;

    match cli.command {
        Commands::Repos(args) => commands::repos(config, args.language).await?,
        Commands::Build(args) => {
            commands::build(
                config,
                BuildOptions {
                    out_dir: args.out,
                    theme: args.theme,
                    strict: args.strict,
                },
            )
            .await?;
        }
    }
    Ok(())
}
