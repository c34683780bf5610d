use crate::cli::commands::{open_pool, resolve_moment, resolve_origin};
use crate::cli::parser::{Commands, PunchArgs};
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::ui::messages::success;
use crate::utils::formatting::describe_device;

/// Handle `checkin`, `checkout` and `punch`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (args, action): (&PunchArgs, Option<Action>) = match cmd {
        Commands::Checkin(a) => (a, Some(Action::CheckIn)),
        Commands::Checkout(a) => (a, Some(Action::CheckOut)),
        Commands::Punch(a) => (a, None),
        _ => return Ok(()),
    };

    let at = resolve_moment(cfg, args.date.as_deref(), args.at.as_deref())?;
    let origin = resolve_origin(cfg, args.device.as_deref(), args.by.as_deref());

    let mut pool = open_pool(cfg)?;

    let entry = match action {
        Some(a) => PunchLogic::record(&mut pool, &args.staff, a, at, &origin)?,
        None => PunchLogic::toggle(&mut pool, &args.staff, at, &origin)?,
    };

    let label = if entry.action.is_check_in() {
        "Check-in"
    } else {
        "Check-out"
    };

    success(format!(
        "{} recorded for staff {} at {} ({})",
        label,
        entry.staff_id,
        entry.time_stamp,
        describe_device(entry.device.as_deref())
    ));

    Ok(())
}
