use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use dialoguer::Select;

use crate::api::{ClientOptions, build_client, fetch_history};
use crate::archive::{Archiver, HttpDownloader};
use crate::config::AppConfig;
use crate::logging;
use crate::models::Correspondent;
use crate::session::{LoginMethod, resolve_session};
use crate::utils::{render_banner, terminal_width, token_from_env};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "b4nd-archiver")]
#[command(version = VERSION)]
#[command(about = "Archive a fan-club chat history to local files", long_about = None)]
pub struct Cli {
    /// HTTP forward proxy
    #[arg(long, value_name = "HOST:PORT")]
    pub proxy: Option<String>,

    /// Correspondent id, skipping the selection menu
    #[arg(long, value_name = "ID")]
    pub correspondent: Option<i64>,

    /// Login method, skipping the selection menu (ignored when B4ND_TOKEN is set)
    #[arg(long, value_enum)]
    pub login: Option<LoginMethod>,

    /// Override the API base URL of the correspondent's tenant
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Directory to archive into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Catalog file with extra tenants and correspondents
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Give up after this many rejected logins
    #[arg(long, value_name = "N", default_value_t = 3,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_login_attempts: u32,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the resolved token
    #[arg(long)]
    pub show_token: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments and run the archive pipeline
///
/// Usage errors exit with status 1. API failures are reported and end the run with
/// status 0 since nothing was written; local errors are returned to `main`.
pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS });
        }
    };

    logging::init(cli.verbose);
    display_welcome();
    execute(&cli)
}

fn display_welcome() {
    let title = format!("B4ND Archiver Version {}", VERSION);
    println!("{}", render_banner(terminal_width(), &[&title]));
}

fn execute(cli: &Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let client = build_client(&ClientOptions {
        proxy: cli.proxy.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
    })?;
    if let Some(proxy) = &cli.proxy {
        println!("Using proxy: {}", proxy);
    }

    let correspondent = select_correspondent(&config, cli.correspondent)?;
    let mut tenant = config.tenant_for(correspondent)?.clone();
    if let Some(api_base) = &cli.api_base {
        tenant.api_base = api_base.clone();
    }
    tracing::info!(
        correspondent = correspondent.id,
        tenant = %tenant.name,
        api_base = %tenant.api_base,
        "selected correspondent"
    );

    let env_token = token_from_env();
    let method = match (&env_token, cli.login) {
        (Some(_), _) => LoginMethod::Token,
        (None, Some(method)) => method,
        (None, None) => select_login_method()?,
    };

    let session = resolve_session(&client, &tenant, method, env_token, cli.max_login_attempts)?;
    if cli.show_token {
        println!("Token: {}", session.token);
    }

    let messages = match fetch_history(&client, &session, correspondent.id) {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::SUCCESS);
        }
    };

    let archiver = Archiver::new(&cli.output_dir, &session.api_base, HttpDownloader::new(&client));
    let summary = archiver.archive(&messages, &mut io::stdout().lock())?;
    tracing::info!(%summary, "archive complete");

    Ok(ExitCode::SUCCESS)
}

fn require_terminal(flag: &str) -> Result<()> {
    if !io::stdin().is_terminal() {
        bail!("Selection menus need a terminal; pass {} instead", flag);
    }
    Ok(())
}

fn select_correspondent(config: &AppConfig, requested: Option<i64>) -> Result<&Correspondent> {
    if let Some(id) = requested {
        return config.correspondent(id).with_context(|| {
            let known: Vec<String> = config.correspondents.iter().map(|c| c.menu_label()).collect();
            format!("Unknown correspondent id {} (known: {})", id, known.join(", "))
        });
    }

    require_terminal("--correspondent")?;
    let labels: Vec<String> = config.correspondents.iter().map(|c| c.menu_label()).collect();
    let index = Select::new()
        .with_prompt("Select the artist")
        .items(&labels)
        .default(0)
        .interact()
        .context("Prompt failed")?;

    Ok(&config.correspondents[index])
}

fn select_login_method() -> Result<LoginMethod> {
    require_terminal("--login or set B4ND_TOKEN")?;
    let labels: Vec<&str> = LoginMethod::ALL.iter().map(|m| m.menu_label()).collect();
    let index = Select::new()
        .with_prompt("Select Login Method")
        .items(&labels)
        .default(0)
        .interact()
        .context("Prompt failed")?;

    Ok(LoginMethod::ALL[index])
}
