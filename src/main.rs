use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use radarcli::{cli, config, error, heuristics::NameFilters, types::PkceToken, utils};
use tokio::sync::Mutex;

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
    /// Authorize with Spotify API
    Auth,

    /// Show recent releases from followed artists
    Radar(RadarOptions),

    /// Handle followed artists
    Artists(ArtistsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RadarOptions {
    /// Region a release must be available in (ISO 3166-1 alpha-2)
    #[clap(long, default_value = "CA")]
    pub region: String,

    /// Number of days after which releases are omitted
    #[clap(long, default_value_t = 60)]
    pub max_age_days: u32,

    /// Don't show any EP's, only show full-length releases
    #[clap(long)]
    pub hide_eps: bool,

    /// Show full URLs instead of Spotify URIs you must copy-paste
    #[clap(long)]
    pub show_urls: bool,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    pub date: Option<String>,

    /// Bound the age window in both directions, excluding releases dated
    /// more than max-age-days in the future
    #[clap(long)]
    pub absolute_window: bool,

    /// Release type(s) to include, comma separated
    /// (album, single, compilation, appears-on, all)
    #[clap(long = "types", value_parser = utils::parse_release_kinds)]
    pub types: Option<utils::ReleaseKinds>,

    /// Ignore today's cached snapshot and refetch
    #[clap(long)]
    pub no_cache: bool,

    /// Keep re-releases (deluxe, remastered, anniversary editions, ...)
    #[clap(long)]
    pub show_re_releases: bool,

    /// Keep live recordings
    #[clap(long)]
    pub show_live: bool,

    /// Keep soundtracks
    #[clap(long)]
    pub show_soundtracks: bool,

    /// Keep remixes and reworks
    #[clap(long)]
    pub show_remixes: bool,

    /// Report releases dropped by the name heuristics after the table
    #[clap(long)]
    pub log_filtered: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle followed artists",
    args_conflicts_with_subcommands = true // disallow mixing --search with subcommands
)]
pub struct ArtistsOptions {
    /// Search for artists
    #[clap(long)]
    pub search: Option<String>,

    /// Subcommands under `artists` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<ArtistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArtistsSubcommand {
    /// Refresh the artist snapshot from the API
    Update,
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

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }

        Command::Radar(opt) => {
            let request = cli::RadarRequest {
                region: opt.region,
                max_age_days: opt.max_age_days,
                hide_eps: opt.hide_eps,
                show_urls: opt.show_urls,
                reference_date: opt.date,
                absolute_window: opt.absolute_window,
                types: opt.types,
                no_cache: opt.no_cache,
                name_filters: NameFilters {
                    keep_re_releases: opt.show_re_releases,
                    keep_live_recordings: opt.show_live,
                    keep_soundtracks: opt.show_soundtracks,
                    keep_remixes: opt.show_remixes,
                },
                log_filtered: opt.log_filtered,
            };
            cli::radar(request).await;
        }

        Command::Artists(opt) => match opt.command {
            Some(ArtistsSubcommand::Update) => cli::update_artists().await,
            None => cli::list_artists(opt.search).await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
