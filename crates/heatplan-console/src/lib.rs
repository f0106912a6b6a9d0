//! Colorful console output for planning sessions.
//!
//! Provides a custom `tracing` layer that formats store and engine events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Calculations (start, end, failure)
//! - **DEBUG**: Store changes (added, rejected, reset)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DIRECTIVE: &str = "heatplan=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the
/// default `heatplan=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = match DEFAULT_DIRECTIVE.parse() {
            Ok(directive) => EnvFilter::builder()
                .with_default_directive(directive)
                .from_env_lossy(),
            Err(_) => EnvFilter::from_default_env(),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 _                _         _
| |__   ___  __ _| |_ _ __ | | __ _ _ __
| '_ \ / _ \/ _` | __| '_ \| |/ _` | '_ \
| | | |  __/ (_| | |_| |_) | | (_| | | | |
|_| |_|\___|\__,_|\__| .__/|_|\__,_|_| |_|
                     |_|
"#;

    let version_line = format!("            v{} - Building Heat Planner\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_red());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Accept events from heatplan crates only
        if !target.starts_with("heatplan") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    reason: Option<String>,
    engine: Option<String>,
    error: Option<String>,
    count: Option<u64>,
    cleared: Option<u64>,
    revision: Option<u64>,
    building_count: Option<u64>,
    duration_us: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "name" => self.name = Some(s),
            "reason" => self.reason = Some(s),
            "engine" => self.engine = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "count" => self.count = Some(value),
            "cleared" => self.cleared = Some(value),
            "revision" => self.revision = Some(value),
            "building_count" => self.building_count = Some(value),
            "duration_us" => self.duration_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "engine" => self.engine = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "building_added" => format_building_added(v),
        "building_rejected" => format_building_rejected(v),
        "store_reset" => format_store_reset(v),
        "calculate_start" => format_calculate_start(v),
        "calculate_end" => format_calculate_end(v),
        "calculate_failed" => format_calculate_failed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_building_added(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("");
    let count = v.count.unwrap_or(0);

    format!(
        "{} {} Added {} │ {} buildings",
        format_elapsed(),
        "+".bright_green().bold(),
        format!("{:?}", name).white().bold(),
        format_count(count).bright_yellow()
    )
}

fn format_building_rejected(v: &EventVisitor) -> String {
    let reason = v.reason.as_deref().unwrap_or("invalid input");
    let count = v.count.unwrap_or(0);

    format!(
        "{} {} Ignored input: {} │ {} buildings",
        format_elapsed(),
        "·".bright_black(),
        reason.yellow(),
        format_count(count).bright_yellow()
    )
}

fn format_store_reset(v: &EventVisitor) -> String {
    let cleared = v.cleared.unwrap_or(0);

    format!(
        "{} {} Reset │ {} buildings cleared",
        format_elapsed(),
        "↺".bright_cyan().bold(),
        format_count(cleared).bright_yellow()
    )
}

fn format_calculate_start(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("unknown");
    let buildings = v.building_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Calculating │ {} │ {} buildings",
        format_elapsed(),
        "▶".bright_green().bold(),
        engine.white().bold(),
        format_count(buildings).bright_yellow()
    );

    if let Some(revision) = v.revision {
        output.push_str(&format!(" │ revision {}", revision.to_string().bright_black()));
    }

    output
}

fn format_calculate_end(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("unknown");
    let duration = v.duration_us.unwrap_or(0);

    format!(
        "{} {} {} finished │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        engine.white().bold(),
        format_duration_us(duration).yellow()
    )
}

fn format_calculate_failed(v: &EventVisitor) -> String {
    let engine = v.engine.as_deref().unwrap_or("unknown");
    let error = v.error.as_deref().unwrap_or("unknown error");

    format!(
        "{} {} {} failed │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        engine.white().bold(),
        error.bright_red()
    )
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests;
