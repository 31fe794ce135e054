use anyhow::{Context, bail};
use cinescope::{
    CatalogConfig, FetchController, FetchState, ImageUrlBuilder, MovieListUiModel, MovieUiModel,
    TimeWindow, config, remote_repository, screen::screens,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "cinescope", version, about = "Browse The Movie Database from the terminal")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API access token, overrides the configured one
    #[arg(long, global = true, env = "TMDB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Response language (ISO 639-1)
    #[arg(long, global = true)]
    language: Option<String>,

    /// Poster size token
    #[arg(long, global = true, default_value = "w200")]
    size: String,

    /// Offer to retry after a failure
    #[arg(long, global = true)]
    interactive: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Popular movies
    Popular,
    /// Trending movies
    Trending {
        #[arg(long, default_value = "week")]
        window: TimeWindow,
    },
    /// Search movies by title
    Search { query: String },
    /// Details for one movie
    Movie { id: String },
    /// Movies similar to the given one
    Similar { id: String },
    /// Recommendations based on the given movie
    Recommendations { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinescope::init_tracing().context("failed to install tracing subscriber")?;

    let cli = Cli::parse();

    let path = cli.config.clone().or_else(config::default_path);
    let mut config = CatalogConfig::load_from(path.as_deref()).context("failed to load config")?;
    if let Some(token) = cli.token.clone() {
        config = config.with_access_token(token);
    }
    if let Some(language) = cli.language.clone() {
        config = config.with_language(language);
    }
    info!("Using {} (language: {})", config.api_base_url, config.language);

    let repository = remote_repository(&config).context("failed to build HTTP client")?;
    let images = ImageUrlBuilder::from_config(&config);

    match cli.command {
        Command::Popular => {
            let screen = screens::popular(repository);
            show(&screen, None, &cli, |list| print_list(list, &images, &cli.size)).await
        }
        Command::Trending { window } => {
            let screen = screens::trending(repository, window);
            show(&screen, None, &cli, |list| print_list(list, &images, &cli.size)).await
        }
        Command::Search { ref query } => {
            let screen = screens::search(repository);
            show(&screen, Some(query.clone()), &cli, |list| {
                print_list(list, &images, &cli.size);
            })
            .await
        }
        Command::Movie { ref id } => {
            let screen = screens::movie_detail(repository);
            show(&screen, Some(id.clone()), &cli, |movie| {
                print_movie(movie, &images, &cli.size);
            })
            .await
        }
        Command::Similar { ref id } => {
            let screen = screens::similar(repository);
            show(&screen, Some(id.clone()), &cli, |list| {
                print_list(list, &images, &cli.size);
            })
            .await
        }
        Command::Recommendations { ref id } => {
            let screen = screens::recommendations(repository);
            show(&screen, Some(id.clone()), &cli, |list| {
                print_list(list, &images, &cli.size);
            })
            .await
        }
    }
}

/// Fetch once, offering a manual retry on failure when interactive
async fn show<T, F>(
    screen: &FetchController<T>,
    param: Option<String>,
    cli: &Cli,
    render: F,
) -> anyhow::Result<()>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T),
{
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    loop {
        screen.fetch_now(param.clone()).await;
        let FetchState { data, error, .. } = screen.state();

        match error {
            None => {
                if let Some(data) = data {
                    render(&data);
                }
                screen.dispose();
                return Ok(());
            }
            Some(message) if cli.interactive => {
                eprintln!("{message}");
                eprint!("Retry? [y/N] ");
                let answer = stdin.next_line().await?.unwrap_or_default();
                if !answer.trim().eq_ignore_ascii_case("y") {
                    screen.dispose();
                    bail!(message);
                }
            }
            Some(message) => {
                screen.dispose();
                bail!(message);
            }
        }
    }
}

fn print_list(list: &MovieListUiModel, images: &ImageUrlBuilder, size: &str) {
    if list.is_empty() {
        println!("No movies found.");
        return;
    }

    for movie in &list.results {
        let poster = images.sized_url(&movie.poster_path, size).unwrap_or_default();
        println!("{:>8}  {}  {}", movie.id, movie.title, poster);
    }
    println!(
        "page {} of {} ({} results)",
        list.current_page, list.total_pages, list.total_results
    );
}

fn print_movie(movie: &MovieUiModel, images: &ImageUrlBuilder, size: &str) {
    println!("{} (#{})", movie.title, movie.id);
    if let Some(poster) = images.sized_url(&movie.poster_path, size) {
        println!("{poster}");
    }
    if !movie.genres.is_empty() {
        let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{}", genres.join(", "));
    }
    if !movie.overview.is_empty() {
        println!();
        println!("{}", movie.overview);
    }
}
