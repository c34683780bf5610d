use crate::cli::commands::open_pool;
use crate::cli::commands::status::print_sessions;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::queries::staff_ids;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::resolve_period;
use crate::utils::formatting::{pad_left, pad_right};
use crate::utils::time::format_hms;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        staff,
        period,
        sessions,
    } = cmd
    {
        let zone = cfg.zone()?;
        let (from, to) = resolve_period(period.as_deref(), zone.today())?;
        let mut pool = open_pool(cfg)?;

        let staff_list = match staff {
            Some(s) => vec![s.clone()],
            None => staff_ids(&mut pool)?,
        };

        if staff_list.is_empty() {
            info("No action logs recorded yet.");
            return Ok(());
        }

        for staff_id in staff_list {
            let reports = Core::load_range_reports(&mut pool, &staff_id, from, to)?;

            header(format!("Staff {} · {} → {}", staff_id, from, to));

            if reports.is_empty() {
                println!("No events between {} and {}", from, to);
                continue;
            }

            let mut total = 0;
            for day in &reports {
                let r = &day.report;
                total += r.worked_seconds;

                let running = if r.is_running() { "  (running)" } else { "" };
                println!(
                    "{}  {} sessions  {}{}",
                    day.date,
                    pad_left(&r.sessions.len().to_string(), 2),
                    format_hms(r.worked_seconds),
                    running
                );

                if *sessions {
                    print_sessions(r, &cfg.separator_char);
                    println!();
                }
            }

            println!(
                "{} {}",
                pad_right("Total worked:", 26),
                format_hms(total)
            );
        }
    }
    Ok(())
}
