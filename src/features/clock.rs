use crate::page::PageSurface;
use chrono::{Datelike, Local, Timelike};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

const MIN_TICK: Duration = Duration::from_secs(1);

pub fn format_clock<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Stamps the year once, then keeps the clock text current on a background task.
///
/// The first tick fires immediately. Abort the returned handle to stop ticking.
pub fn start_clock(page: Arc<dyn PageSurface>, tick: Duration) -> JoinHandle<()> {
    page.set_year_text(&current_year().to_string());

    // tokio's interval refuses a zero period
    let tick = tick.max(MIN_TICK);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        loop {
            interval.tick().await;
            let now = format_clock(&Local::now());
            debug!(clock = %now, "clock tick");
            page.set_clock_text(&now);
        }
    })
}
