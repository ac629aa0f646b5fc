//! Forfeiture notices CLI
//!
//! Local front end for the notices engine: search the table, inspect filter
//! catalogs, generate mock data and talk to the legal assistant.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use notices::{
    error::Result,
    models::{Config, FilterCategory, SortColumn, SortDirection, SortSpec},
    pipeline::{FilterCatalog, ViewState, narrow_options},
    services::{self, ChatOutcome, ChatSession, DeadlineUrgency, ProxyChatClient},
    store::NoticeStore,
};

/// Civil asset forfeiture notice search
#[derive(Parser, Debug)]
#[command(name = "notices", version, about = "Civil asset forfeiture notice search")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Evaluate deadlines as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search, filter, sort and page through notices
    Search {
        /// Free text matched against case number, description, location and asset type
        #[arg(short, long, default_value = "")]
        query: String,

        /// Restrict to agencies (repeatable)
        #[arg(long)]
        agency: Vec<String>,

        /// Restrict to asset types (repeatable)
        #[arg(long)]
        asset_type: Vec<String>,

        /// Restrict to "City, ST" locations (repeatable)
        #[arg(long)]
        location: Vec<String>,

        /// Sort column (e.g. claimDeadline, caseNumber, agency)
        #[arg(long, default_value = "claimDeadline")]
        sort: String,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number (signed-in only)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// View as a signed-in user instead of the anonymous preview
        #[arg(long)]
        authenticated: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the options of a filter category with their counts
    Options {
        /// Agency, "Asset Type" or Location
        category: String,

        /// Narrow options by label
        #[arg(long, default_value = "")]
        filter: String,
    },

    /// Generate mock notices as JSON
    Generate {
        /// Number of notices (default: dataset.generate_count)
        #[arg(long)]
        count: Option<usize>,

        /// Generator seed (default: dataset.seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration and dataset
    Validate,

    /// Ask the legal assistant one question
    Chat {
        /// The question to send
        message: String,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the configured dataset, or generate one when none is configured.
fn load_store(config: &Config, base_path: &Path, today: NaiveDate) -> Result<NoticeStore> {
    match config.dataset.resolved_path(base_path) {
        Some(path) if path.exists() => NoticeStore::load(&path),
        Some(path) => {
            log::warn!(
                "Dataset not found at {}. Using generated notices.",
                path.display()
            );
            services::generate_store(config.dataset.generate_count, today, config.dataset.seed)
        }
        None => services::generate_store(config.dataset.generate_count, today, config.dataset.seed),
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config);
    init_logging(cli.verbose, &config.logging.level);

    // Relative dataset paths resolve against the config file's directory
    let base_path = cli
        .config
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Command::Search {
            query,
            agency,
            asset_type,
            location,
            sort,
            desc,
            page,
            authenticated,
            json,
        } => {
            let column: SortColumn = sort.parse()?;
            let store = load_store(&config, &base_path, today)?;

            let mut view = ViewState::new();
            view.set_search(query);
            view.set_filter(FilterCategory::Agency, agency);
            view.set_filter(FilterCategory::AssetType, asset_type);
            view.set_filter(FilterCategory::Location, location);
            if authenticated {
                view.sign_in();
            }
            view.set_sort(SortSpec::new(column, direction(desc)));
            view.set_page(page);

            let output = view.render(store.records(), today, &config.engine);

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            for record in &output.rows {
                let urgency = DeadlineUrgency::classify(record.claim_deadline, today);
                let source = record
                    .source_notice_url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "Source unavailable".to_string());
                println!(
                    "{:<16} {:<5} {:<16} {:<18} {:<10} {:<10} {}",
                    record.case_number,
                    record.agency,
                    record.asset_type,
                    record.location(),
                    record.seizure_date,
                    urgency.label(record.claim_deadline),
                    source
                );
            }
            if output.rows.is_empty() {
                println!("No notices found matching your criteria.");
            }

            println!();
            println!("{}", output.counts.summary());
            if let Some(pager) = &output.pager {
                let mut items: Vec<String> = Vec::new();
                if pager.show_first {
                    items.push("1".to_string());
                    if pager.leading_gap {
                        items.push("…".to_string());
                    }
                }
                items.extend(pager.pages.iter().map(|p| p.to_string()));
                if pager.show_last {
                    if pager.trailing_gap {
                        items.push("…".to_string());
                    }
                    items.push(output.counts.total_pages.to_string());
                }
                println!("Pages: {}", items.join(" "));
            } else {
                println!("Sign up to see all matching notices.");
            }
        }

        Command::Options { category, filter } => {
            let category: FilterCategory = category.parse()?;
            let store = load_store(&config, &base_path, today)?;
            let catalog = FilterCatalog::build(store.records());

            for option in narrow_options(catalog.options(category), &filter) {
                println!("{:<24} {}", option.label, option.count.unwrap_or(0));
            }
        }

        Command::Generate {
            count,
            seed,
            output,
        } => {
            let count = count.unwrap_or(config.dataset.generate_count);
            let seed = seed.unwrap_or(config.dataset.seed);
            let store = services::generate_store(count, today, seed)?;

            match output {
                Some(path) => {
                    store.save(&path)?;
                    log::info!("Saved {} notices to {}", store.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(store.records())?),
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");

            let store = load_store(&config, &base_path, today)?;
            log::info!("✓ Dataset OK ({} notices)", store.len());

            log::info!("All validations passed!");
        }

        Command::Chat { message } => {
            let client = ProxyChatClient::new(&config.chat)?;
            let mut session = ChatSession::new();

            match session.send(&client, &message).await {
                ChatOutcome::Success(reply) => println!("{reply}"),
                ChatOutcome::Failure(e) => {
                    if let Some(message) = session.error() {
                        eprintln!("{message}");
                    }
                    return Err(e);
                }
                ChatOutcome::Ignored => log::warn!("Empty message, nothing sent."),
            }
        }
    }

    Ok(())
}

fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}
