//! A simple program demonstrates how to use `recipe-chat` as a library.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use recipe_chat::Session;
use recipe_chat::core::{ChefBuilder, Config, ErrorKind};
use recipe_chat::openai::{OpenAIConfigBuilder, OpenAIProvider};
use tokio::io::{self, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // `Config::from_env` also loads `.env`, so it goes first.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let openai_config = match OpenAIConfigBuilder::from_env() {
        Ok(builder) => builder.build(),
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "using model {} at {}",
        config.model(),
        openai_config.base_url()
    );

    let model_provider = OpenAIProvider::new(openai_config);
    let chef = ChefBuilder::from_config(&config, model_provider).build();
    let mut session = Session::new(chef);

    let progress_style =
        match ProgressStyle::with_template("{spinner} {wide_msg}") {
            Ok(style) => style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            Err(err) => {
                warn!("invalid progress template: {err}");
                ProgressStyle::default_spinner()
            }
        };

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/reset" {
            session.reset();
            println!("{}🧹 Starting over.", BAR_CHAR.bright_yellow());
            continue;
        }

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("🍳 Cooking...");
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        let result = session.send_message(line).await;
        progress_bar.finish_and_clear();

        match result {
            Ok(reply) => {
                println!(
                    "{}🧑‍🍳 {}",
                    BAR_CHAR.bright_cyan(),
                    reply.bright_white()
                );
            }
            Err(err) => {
                error!("chat failed: {err}");
                println!(
                    "{}😓 {}",
                    BAR_CHAR.bright_red(),
                    apology(err.kind())
                );
            }
        }
    }

    ExitCode::SUCCESS
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

#[inline]
fn apology(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => {
            "Sorry, I couldn't reach the kitchen. Please try again."
        }
        ErrorKind::Authentication => {
            "Sorry, the kitchen didn't accept my credentials."
        }
        ErrorKind::RateLimitExceeded => {
            "Sorry, the kitchen is busy right now. Please try again shortly."
        }
        ErrorKind::MalformedResponse | ErrorKind::Other => {
            "Sorry, something went wrong while preparing your answer."
        }
    }
}
