//! `effio` binary: runs the greeter program against the terminal.

use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use effio::console::StdConsole;
use effio::greeter::{self, GreeterConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "effio")]
#[command(about = "Asks for a name until the accepted one is entered", long_about = None)]
#[command(version)]
struct Cli {
    /// Name that is let in
    #[arg(long, env = "EFFIO_ACCEPTED_NAME", default_value = "Joe")]
    accepted_name: String,

    /// How many names may be entered before giving up
    #[arg(long, env = "EFFIO_ATTEMPTS", default_value = "3")]
    attempts: usize,

    /// Line printed before each read
    #[arg(long)]
    prompt: Option<String>,

    /// Welcome line; `{name}` is replaced with the entered name
    #[arg(long)]
    welcome: Option<String>,

    /// Rejection line; `{name}` is replaced with the entered name
    #[arg(long)]
    rejection: Option<String>,
}

impl Cli {
    fn into_config(self) -> GreeterConfig {
        let mut config = GreeterConfig::default()
            .with_accepted_name(self.accepted_name)
            .with_attempts(self.attempts);
        if let Some(prompt) = self.prompt {
            config = config.with_prompt(prompt);
        }
        if let Some(welcome) = self.welcome {
            config = config.with_welcome(welcome);
        }
        if let Some(rejection) = self.rejection {
            config = config.with_rejection(rejection);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the conversation on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Cli::parse().into_config();
    tracing::debug!(?config, "starting greeter");

    let console = Rc::new(StdConsole);
    let name = greeter::program(&console, &config)
        .run()
        .context("greeter gave up")?;

    tracing::info!(%name, "greeter finished");
    Ok(())
}
