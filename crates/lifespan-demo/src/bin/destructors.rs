//! Buffer lifetime demonstration.
//!
//! Run with:
//!   cargo run -p lifespan-demo --bin destructors

use std::sync::Arc;

use lifespan_core::ConsoleSink;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lifespan_demo::logging::init();
    let console = Arc::new(ConsoleSink::stdout());
    lifespan_demo::destructors::run(&console)?;
    Ok(())
}
