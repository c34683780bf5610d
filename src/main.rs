//! rAttendLog main entrypoint.

use rattendlog::run;
use rattendlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
