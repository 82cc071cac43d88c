use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playlist_stats::{cli, config, error, logging, targets::parse_target_attributes, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeOptions),

    /// Show statistics for a playlist
    Playlist(PlaylistOptions),

    /// Show statistics for recommendations seeded from a playlist
    Recs(RecsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    address: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist ID
    id: String,

    /// Print the API's JSON instead of tables
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RecsOptions {
    /// Playlist ID
    id: String,

    /// Comma-separated seed track IDs; at most five are used
    #[clap(long)]
    seeds: Option<String>,

    #[clap(long)]
    acousticness: Option<String>,
    #[clap(long)]
    danceability: Option<String>,
    #[clap(long)]
    energy: Option<String>,
    #[clap(long)]
    instrumentalness: Option<String>,
    #[clap(long)]
    liveness: Option<String>,
    #[clap(long)]
    speechiness: Option<String>,
    #[clap(long)]
    valence: Option<String>,

    /// Print the API's JSON instead of tables
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if !matches!(cli.command, Command::Completions(_)) {
        logging::init_logging();
    }

    match cli.command {
        Command::Serve(opt) => cli::serve(opt.address).await,
        Command::Playlist(opt) => cli::playlist(opt.id, opt.json).await,
        Command::Recs(opt) => {
            let params = utils::params_from_pairs(&[
                ("acousticness", opt.acousticness.as_ref()),
                ("danceability", opt.danceability.as_ref()),
                ("energy", opt.energy.as_ref()),
                ("instrumentalness", opt.instrumentalness.as_ref()),
                ("liveness", opt.liveness.as_ref()),
                ("speechiness", opt.speechiness.as_ref()),
                ("valence", opt.valence.as_ref()),
            ]);
            let targets = parse_target_attributes(&params);
            cli::recs(opt.id, opt.seeds, targets, opt.json).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
