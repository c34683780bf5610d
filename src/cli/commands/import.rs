use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, format } = cmd {
        let mut pool = open_pool(cfg)?;
        let n = ImportLogic::import(&mut pool, Path::new(file), *format)?;

        if n == 0 {
            info(format!("No action log entries found in {}", file));
        } else {
            success(format!("Imported {} action log entries from {}", n, file));
        }
    }
    Ok(())
}
