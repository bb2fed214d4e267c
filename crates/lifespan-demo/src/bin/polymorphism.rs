//! Shape dispatch demonstration.
//!
//! Run with:
//!   cargo run -p lifespan-demo --bin polymorphism

use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lifespan_demo::logging::init();
    let mut out = io::stdout().lock();
    lifespan_demo::polymorphism::run(&mut out)?;
    Ok(())
}
