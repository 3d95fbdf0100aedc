//! Podcast Catalog CLI
//!
//! Terminal host for the listing controller: renders pages, lists
//! categories and replays interaction sessions from stdin.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use podcast_catalog::{
    controller::{Controller, Event},
    error::{AppError, Result},
    models::{CatalogKind, Config, ViewState},
    pipeline::SortMode,
    render::ListingView,
    source::{DocumentSource, Source},
    utils::same_tag,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Podcast Catalog - episode and guest listings
#[derive(Parser, Debug)]
#[command(
    name = "podcast-catalog",
    version,
    about = "Paginated, filterable podcast episode and guest listings"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "catalog.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one listing page
    Render {
        /// Data document path or http(s) URL (default: source.location)
        #[arg(long)]
        source: Option<String>,

        /// Record kind: episodes or guests
        #[arg(long, default_value = "episodes")]
        kind: CatalogKind,

        /// Category token
        #[arg(long)]
        category: Option<String>,

        /// Sub-category token within the category
        #[arg(long)]
        sub: Option<String>,

        /// Free-text search query
        #[arg(long)]
        search: Option<String>,

        /// Sort mode (default: the listing's configured sort)
        #[arg(long)]
        sort: Option<SortMode>,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List category tokens with record counts
    Categories {
        #[arg(long)]
        source: Option<String>,

        #[arg(long, default_value = "episodes")]
        kind: CatalogKind,
    },

    /// Read event commands from stdin and print the view after each
    Session {
        #[arg(long)]
        source: Option<String>,

        #[arg(long, default_value = "episodes")]
        kind: CatalogKind,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Validate configuration (and the data document when a source is given)
    Validate {
        #[arg(long)]
        source: Option<String>,

        #[arg(long, default_value = "episodes")]
        kind: CatalogKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Initialize logging with the given default level filter.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Resolve the data location from the flag or the configuration.
fn open_source(flag: Option<String>, config: &Config) -> Result<Source> {
    let location = flag.or_else(|| config.source.location.clone()).ok_or_else(|| {
        AppError::config("no data source: pass --source or set source.location")
    })?;
    Source::parse(&location, &config.source)
}

fn print_view(view: &ListingView, format: Format) -> Result<()> {
    match format {
        Format::Text => print!("{view}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(view)?),
    }
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.logging.level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    init_logging(&level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });
    config.validate()?;
    let config = Arc::new(config);

    match cli.command {
        Command::Render {
            source,
            kind,
            category,
            sub,
            search,
            sort,
            page,
            format,
        } => {
            let source = open_source(source, &config)?;
            let controller = Controller::load(&source, kind, Arc::clone(&config)).await;

            let events = [
                sort.map(Event::SelectSort),
                category.map(Event::SelectCategory),
                sub.map(|s| Event::SelectSubcategory(Some(s))),
                search.map(Event::Search),
                Some(Event::GoToPage(page)),
            ];
            let state = events
                .into_iter()
                .flatten()
                .fold(controller.initial_state(), |state, event| {
                    controller.handle_event(&state, event).state
                });

            print_view(&controller.render(&state), format)?;
        }

        Command::Categories { source, kind } => {
            let source = open_source(source, &config)?;
            let controller = Controller::load(&source, kind, Arc::clone(&config)).await;
            if controller.load_failed() {
                return Err(AppError::load(source.location(), config.messages.load_error(kind)));
            }

            let counts = controller.category_counts();
            if counts.is_empty() {
                log::info!("No categories in {}", source.location());
            }
            for (token, count) in counts {
                let label = config
                    .categories
                    .iter()
                    .find(|c| same_tag(&c.token, &token))
                    .map(|c| c.label.as_str())
                    .unwrap_or(token.as_str());
                println!("{token:<16} {label:<20} {count}");
            }
        }

        Command::Session {
            source,
            kind,
            format,
        } => {
            let source = open_source(source, &config)?;
            let controller = Controller::load(&source, kind, Arc::clone(&config)).await;

            let mut state: ViewState = controller.initial_state();
            print_view(&controller.render(&state), format)?;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                let event = match line.parse::<Event>() {
                    Ok(event) => event,
                    Err(e) => {
                        log::warn!("{e}");
                        continue;
                    }
                };

                let transition = controller.handle_event(&state, event);
                if transition.scroll_to_top {
                    log::debug!("Scroll to top");
                }
                state = transition.state;
                print_view(&controller.render(&state), format)?;
            }
        }

        Command::Validate { source, kind } => {
            log::info!("Validating configuration...");
            log::info!(
                "✓ Config OK ({} categories, {} icon mappings)",
                config.categories.len(),
                config.icons.len()
            );

            if source.is_some() {
                let source = open_source(source, &config)?;
                let catalog = podcast_catalog::source::load_catalog(&source, kind).await?;
                log::info!("✓ {} OK ({} records)", source.location(), catalog.len());
            }

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
