use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuestionBankService};
use storage::{BankLocation, DEFAULT_BANK_PATH};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyBank,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyBank => write!(f, "--bank must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz [ui] [--bank <path|url>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank {DEFAULT_BANK_PATH}");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    bank: BankLocation,
    log_filter: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Run(Args),
    Help,
}

impl Args {
    /// Parse flags after the optional `ui` subcommand.
    ///
    /// `bank_env` and `log_env` are the values of `QUIZ_BANK` and `RUST_LOG`;
    /// flags take precedence over them.
    fn parse(
        args: impl IntoIterator<Item = String>,
        bank_env: Option<String>,
        log_env: Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut bank = bank_env
            .filter(|value| !value.trim().is_empty())
            .map_or_else(BankLocation::default, |value| BankLocation::parse(&value));
        let mut log_filter = log_env
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let mut args = args.into_iter().peekable();
        if args.peek().map(String::as_str) == Some("ui") {
            args.next();
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(&mut args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyBank);
                    }
                    bank = BankLocation::parse(&value);
                }
                "--log" => {
                    log_filter = require_value(&mut args, "--log")?;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Run(Self { bank, log_filter }))
    }
}

struct DesktopApp {
    bank: BankLocation,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn bank_service(&self) -> Arc<QuestionBankService> {
        self.services.bank_service()
    }

    fn bank_source(&self) -> String {
        self.bank.to_string()
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}); using {DEFAULT_LOG_FILTER}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    let stdout_layer = log_fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = Args::parse(
        std::env::args().skip(1),
        std::env::var("QUIZ_BANK").ok(),
        std::env::var("RUST_LOG").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match invocation {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Run(args) => args,
    };

    init_tracing(&args.log_filter);
    tracing::info!(bank = %args.bank, "starting quiz");

    let services = AppServices::from_location(args.bank.clone());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: args.bank,
        services,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
