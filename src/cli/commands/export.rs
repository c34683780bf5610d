use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        staff,
        format,
        file,
        period,
        force,
    } = cmd
    {
        let today = cfg.zone()?.today();
        let bounds = resolve_period(Some(period.as_deref().unwrap_or("month")), today)?;

        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, staff, bounds, *format, file, *force)?;
    }
    Ok(())
}
