use anyhow::{Context, Result};
use std::env;
use std::io;

use tracing::info;
use u_timetable::cli::{run_demo, Session};
use u_timetable::config::SchoolDayConfig;
use u_timetable::logging;

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let demo = args.iter().any(|a| a == "--demo");
    let config = match args.iter().position(|a| a == "--config") {
        Some(idx) => {
            let path = args
                .get(idx + 1)
                .context("--config requires a path to a JSON file")?;
            info!(path = %path, "loading school day configuration");
            SchoolDayConfig::load(path)
                .with_context(|| format!("failed to load configuration from {path}"))?
        }
        None => SchoolDayConfig::default(),
    };

    let mut timetable = config.build_timetable();

    if demo {
        run_demo(&mut timetable, &mut io::stdout().lock())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(timetable, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}
