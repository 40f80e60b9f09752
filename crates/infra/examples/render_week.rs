//! Example: Rendering the sample week as text
//!
//! Loads `config/weekplan.toml` (or the file named by `WEEKPLAN_CONFIG`),
//! generates the week through the memoizing cache, and prints each day
//! followed by the category totals. Today's day is marked with `*`.
//!
//! Run from the workspace root:
//!
//! ```bash
//! cargo run -p weekplan-infra --example render_week
//! RUST_LOG=debug cargo run -p weekplan-infra --example render_week -- --json
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, Local};
use weekplan_common::format_minutes_as_hours;
use weekplan_core::{summary_lines, ScheduleService};
use weekplan_domain::Weekday;
use weekplan_infra::{init_tracing, FileConfigSource, MokaScheduleCache, ScheduleCacheConfig};

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    let json_logs = std::env::args().any(|arg| arg == "--json");
    init_tracing(json_logs)?;

    let source = match std::env::var_os("WEEKPLAN_CONFIG") {
        Some(_) => FileConfigSource::discover(),
        None => FileConfigSource::new(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/weekplan.toml"),
        ),
    };

    let cache = Arc::new(MokaScheduleCache::new(ScheduleCacheConfig::default()));
    let service = ScheduleService::with_cache(cache);
    let plan = service.generate_from(&source).context("failed to generate the weekly plan")?;

    let today = Weekday::from(Local::now().weekday());

    for (day, activities) in plan.schedule.iter() {
        let marker = if day == today { "*" } else { " " };
        println!("{marker} {day}");
        if activities.is_empty() {
            println!("    (nothing scheduled)");
        }
        for activity in activities {
            println!(
                "    {:<18} {:<16} [{}] {}",
                activity.time.to_string(),
                activity.name,
                activity.category,
                activity.details
            );
        }
        for warning in plan.report.for_day(day) {
            println!("    ! {}", warning.violation);
        }
    }

    println!();
    for line in summary_lines(&plan.stats) {
        println!("{line}");
    }
    println!("Scheduled: {}", format_minutes_as_hours(plan.stats.total_scheduled_minutes));

    Ok(())
}
