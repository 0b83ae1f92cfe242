use anyhow::Context;
use portfolio_router::app::{load_routes, App};
use portfolio_router::config::RouterConfig;
use portfolio_router::features::{parse_command, start_clock, ShellCommand};
use portfolio_router::page::{MemoryHistory, MemoryPage, PageSurface};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // load centralized config
    let config = Arc::new(RouterConfig::from_env().context("Failed to load router config")?);
    let routes = Arc::new(load_routes(&config)?);

    // the sidebar gets one icon per route
    let page = Arc::new(MemoryPage::new(routes.entries().iter().map(|e| e.key.clone())));
    let initial_fragment = std::env::args().nth(1).unwrap_or_default();
    let history = Arc::new(MemoryHistory::new(&initial_fragment));

    let app = App::from_config(config.clone(), routes, page.clone(), history.clone())?;

    let clock = start_clock(page.clone() as Arc<dyn PageSurface>, config.clock_tick);

    let outcome = app.boot().await;
    info!(%outcome, "booted");
    print_snapshot(&page)?;

    // start reading commands
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Show => {}
            ShellCommand::Key(press) => {
                let outcome = app.input.handle_key(&press).await;
                info!(?outcome, "key handled");
            }
            ShellCommand::Push(fragment) => {
                history.push(&fragment);
                let outcome = app.input.handle_hash_change().await;
                info!(%outcome, "hash changed");
            }
            ShellCommand::Back => {
                if history.back() {
                    let outcome = app.input.handle_hash_change().await;
                    info!(%outcome, "went back");
                } else {
                    warn!("already at the oldest history entry");
                }
            }
            ShellCommand::Forward => {
                if history.forward() {
                    let outcome = app.input.handle_hash_change().await;
                    info!(%outcome, "went forward");
                } else {
                    warn!("already at the newest history entry");
                }
            }
            ShellCommand::Click(href) => {
                let outcome = app.input.handle_click(Some(&href)).await;
                info!(?outcome, "click handled");
            }
            ShellCommand::MissingArgument(command) => {
                warn!(%command, "missing argument");
                continue;
            }
            ShellCommand::Unrecognized(line) => {
                warn!(command = %line, "unrecognized command");
                continue;
            }
        }

        print_snapshot(&page)?;
    }

    clock.abort();
    Ok(())
}

fn print_snapshot(page: &MemoryPage) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&page.snapshot())
        .context("Failed to serialize page snapshot")?;
    println!("{}", json);
    Ok(())
}
