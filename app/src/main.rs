//! Terminal front end for the task list.
//!
//! Reads one command per line from stdin and repaints the list on stdout
//! after every change. Logs go to stderr.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use tasklist::cli::{self, Command, HELP};
use tasklist::config::AppConfig;
use tasklist::paint::TextPainter;
use tasklist::{router, App};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tasklist_runtime::metrics::register_metrics();

    tracing::info!(
        data_dir = %config.storage.data_dir.display(),
        key = %config.storage.key,
        in_memory = config.storage.in_memory,
        "Configuration loaded"
    );

    let mut app = App::open(&config).context("opening task list storage")?;
    app.store_mut().add_renderer(TextPainter::new(io::stdout()));
    let route = if router::parse(&config.initial_route).is_some() {
        config.initial_route.as_str()
    } else {
        tracing::warn!(route = %config.initial_route, "Unknown initial route, showing all");
        router::DEFAULT_ROUTE
    };
    app.navigate(route).context("applying initial route")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match cli::interpret(&line, &app) {
            Ok(Command::Input(event)) => app.handle(event)?,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {},
            Err(error) => eprintln!("{error}"),
        }

        if let Some(id) = app.session().editing_id() {
            println!("editing {id}> {}", app.session().draft());
            io::stdout().flush()?;
        }
    }

    tracing::info!("Bye");
    Ok(())
}
