use crate::cli::commands::{open_pool, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::sessions::SessionReport;
use crate::core::view::AttendanceView;
use crate::db::queries::load_actions;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREEN, RESET, YELLOW, color_for_running, colorize_in_out, colorize_optional};
use crate::utils::formatting::{bold, describe_device, secs2readable};
use crate::utils::table::Table;
use crate::utils::time::format_hm;
use std::thread;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { staff, date, watch } = cmd {
        let zone = cfg.zone()?;
        let day = resolve_date(cfg, date.as_deref())?;
        let mut pool = open_pool(cfg)?;

        let entries = load_actions(&mut pool, staff, &day)?;
        let mut view = AttendanceView::new(staff.as_str(), day, zone.now());
        view.load(1, &entries);

        header(format!("Staff {} · {}", staff, day));
        println!("Timezone: {}", zone);
        print_sessions(&view.report, &cfg.separator_char);
        print_clock(&view);

        if let Some(secs) = watch
            && view.is_running()
        {
            for _ in 0..*secs {
                thread::sleep(Duration::from_secs(1));
                view.tick(zone.now());
                print_clock(&view);
            }
        }
    }

    Ok(())
}

fn print_clock(view: &AttendanceView) {
    let color = color_for_running(view.is_running());
    let state = if view.is_running() {
        "running"
    } else {
        "stopped"
    };
    println!(
        "Worked: {}{}{} ({}) · next: {}",
        color,
        bold(&view.clock()),
        RESET,
        state,
        view.next_action()
    );
}

/// Sessions table (In → Out, devices, duration) plus skipped-entry warnings.
pub(crate) fn print_sessions(report: &SessionReport, separator_char: &str) {
    if report.sessions.is_empty() {
        println!("No sessions.");
    } else {
        let mut table = Table::new(
            &["#", "IN", "OUT", "DURATION", "IN DEV", "OUT DEV", "BY", ""],
            separator_char,
        );

        for (i, s) in report.sessions.iter().enumerate() {
            let duration = s
                .duration_seconds()
                .map(secs2readable)
                .unwrap_or_else(|| "-".to_string());

            let out_dev = if s.is_open() {
                String::new()
            } else {
                describe_device(s.end_device.as_deref())
            };

            // Only the trailing open session is actually running
            let marker = if report.is_running() && i + 1 == report.sessions.len() {
                format!("{GREEN}Running{RESET}")
            } else if s.is_open() {
                format!("{YELLOW}no check-out{RESET}")
            } else {
                String::new()
            };

            table.add_row(vec![
                (i + 1).to_string(),
                colorize_in_out(&format_hm(Some(s.start)), true),
                colorize_in_out(&format_hm(s.end), false),
                colorize_optional(&duration),
                describe_device(s.start_device.as_deref()),
                colorize_optional(&out_dev),
                s.start_by.clone().unwrap_or_else(|| "-".to_string()),
                marker,
            ]);
        }

        print!("{}", table.render());
    }

    for sk in &report.skipped {
        warning(format!(
            "Entry #{} skipped: malformed timestamp '{}'",
            sk.index + 1,
            sk.time_stamp
        ));
    }
}
