use anyhow::{Context, Result};
use engine::EngineContext;
use space_station::{SeededSource, Station, StationConfig};

fn main() -> Result<()> {
    engine::init_logging("info");

    // ---- Config: first argument, or built-in defaults ----
    let config = match std::env::args_os().nth(1) {
        Some(path) => StationConfig::load(&path)?,
        None => StationConfig::default(),
    };

    let source = SeededSource::from_config(config.session.seed);
    let station = Station::new(config.session, source);

    // ---- Create engine context (game owns this) ----
    let ctx = EngineContext::new(config.window).context("failed to start the event loop")?;
    ctx.run(station).context("space station stopped")?;
    Ok(())
}
