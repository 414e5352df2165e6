use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use kickoff::bootstrap::{BootOutcome, RouteSource, boot};
use kickoff::components::message_box::Tone;
use kickoff::config::{AppConfig, ConfigError};
use kickoff::net::error::ApiError;
use kickoff::net::transport::{ReqwestTransport, TransportError};
use kickoff::net::types::Position;
use kickoff::pages::create_match::{MatchForm, submit_match};
use kickoff::pages::dashboard::{DashboardLoad, DashboardView, load_dashboard};
use kickoff::pages::position_selection::save_profile;
use kickoff::state::context::AppContext;
use kickoff::state::router::{RESET_NOTICE, auth_failed_message};
use kickoff::storage::{FileStore, StoreError};
use kickoff::telegram::LaunchContext;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Rejected(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "kickoff-cli", about = "Drive the Kickoff mini app flows from a terminal")]
struct Cli {
    /// Backend base URL; overrides KICKOFF_API_BASE_URL from the environment.
    #[arg(long)]
    base_url: Option<String>,

    /// Session file standing in for the browser's localStorage.
    #[arg(long, env = "KICKOFF_STORE_PATH", default_value = ".kickoff/session.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the startup flow once and print where the app would land.
    Boot {
        #[arg(long, env = "KICKOFF_INIT_DATA")]
        init_data: Option<String>,
        /// Same as opening the app with `?reset=true`.
        #[arg(long, default_value_t = false)]
        reset: bool,
        /// Page path the app is served from.
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Exchange Telegram launch data for a token.
    Auth {
        #[arg(long, env = "KICKOFF_INIT_DATA")]
        init_data: String,
    },
    /// Save nickname and position.
    Profile {
        #[arg(long)]
        nickname: String,
        /// One of gk, df, mf, fw.
        #[arg(long)]
        position: Position,
    },
    /// Fetch and print the dashboard.
    Dashboard,
    Match(MatchCommand),
    /// Authorized GET of any backend path, printed as JSON.
    Get { path: String },
    /// Show what the session file holds (token presence only).
    Session,
    /// Clear the stored session.
    Reset,
}

#[derive(Args, Debug)]
struct MatchCommand {
    #[command(subcommand)]
    command: MatchSubcommand,
}

#[derive(Subcommand, Debug)]
enum MatchSubcommand {
    Create {
        #[arg(long)]
        opponent: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        location: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let ctx = build_context(&cli)?;

    match cli.command {
        Command::Boot { init_data, reset, path } => run_boot(&ctx, init_data, reset, path).await,
        Command::Auth { init_data } => {
            let auth = ctx.api.authenticate(&init_data).await?;
            println!("authenticated; profile setup needed: {}", auth.requires_profile_setup);
            Ok(())
        }
        Command::Profile { nickname, position } => {
            let message = save_profile(&ctx.api, nickname.trim(), position).await?;
            println!("{message}");
            Ok(())
        }
        Command::Dashboard => match load_dashboard(&ctx).await {
            DashboardLoad::Ready(view) => {
                print_dashboard(&view);
                Ok(())
            }
            DashboardLoad::Failed(message) => Err(CliError::Rejected(message)),
            DashboardLoad::AlreadyLoading => Err(CliError::Rejected("dashboard load already in flight".to_owned())),
        },
        Command::Match(MatchCommand { command: MatchSubcommand::Create { opponent, date, time, location } }) => {
            let form = MatchForm { opponent, date, time, location };
            let Some(flash) = submit_match(&ctx, &form).await else {
                return Err(CliError::Rejected("match submission already in flight".to_owned()));
            };
            match flash.tone {
                Tone::Success => {
                    println!("{}", flash.text);
                    Ok(())
                }
                Tone::Error => Err(CliError::Rejected(flash.text)),
            }
        }
        Command::Get { path } => {
            let json = ctx.api.fetch_authorized(&path).await?;
            print_json(&json)
        }
        Command::Session => print_json(&serde_json::json!({
            "hasToken": ctx.session.token().is_some(),
            "profileSetupNeeded": ctx.session.profile_setup_needed(),
            "positionLabel": ctx.session.position_label(),
            "nickname": ctx.session.nickname(),
        })),
        Command::Reset => {
            ctx.session.reset()?;
            println!("session cleared");
            Ok(())
        }
    }
}

fn build_context(cli: &Cli) -> Result<AppContext, CliError> {
    let mut config = AppConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    tracing::debug!(base_url = %config.api_base_url, store = %cli.store.display(), "configured");

    let transport = ReqwestTransport::new(config.timeouts)?;
    let store = FileStore::open(&cli.store)?;
    Ok(AppContext::new(config, Arc::new(transport), Arc::new(store)))
}

async fn run_boot(ctx: &AppContext, init_data: Option<String>, reset: bool, path: String) -> Result<(), CliError> {
    let launch = LaunchContext {
        pathname: path,
        query: if reset { "?reset=true".to_owned() } else { String::new() },
        init_data: kickoff::telegram::normalize_init_data(init_data),
    };

    match boot(ctx, &launch).await {
        BootOutcome::Routed { screen, source } => {
            let source = match source {
                RouteSource::Offline => "cached session",
                RouteSource::Authenticated => "authenticated",
            };
            println!("screen: {screen} ({source}); base path: {}", ctx.base_path());
            Ok(())
        }
        BootOutcome::Reset => {
            println!("{RESET_NOTICE}");
            Ok(())
        }
        BootOutcome::AuthFailed { message } => Err(CliError::Rejected(auth_failed_message(&message))),
        BootOutcome::AlreadyStarted => Ok(()),
    }
}

fn print_dashboard(view: &DashboardView) {
    println!("{}", view.display_name);
    if !view.position_line.is_empty() {
        println!("{}", view.position_line);
    }
    println!("goals {}  assists {}  matches {}", view.goals, view.assists, view.matches);
    match &view.next_match {
        Some(m) => println!("next match: vs {} on {} {} at {}", m.opponent, m.date, m.time, m.location),
        None => println!("next match: none scheduled"),
    }
    println!("team chemistry: {} ({}%)", view.chemistry_text, view.chemistry_percent);
    if !view.recent_results.is_empty() {
        let results: Vec<&str> = view.recent_results.iter().map(|c| c.text.as_str()).collect();
        println!("recent: {}", results.join(" "));
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
