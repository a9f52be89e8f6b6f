#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use bitlife::{Config, Engine, NiceInt, Seed};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;

// Native only; the wasm build ships the library alone.
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Usage: `bench_tick [side] [generations] [fill_rate]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Config::LOG_FILTER)),
        )
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let side = match args.first() {
        Some(s) => s.parse::<u32>().context("side must be a positive integer")?,
        None => Config::BENCH_SIDE,
    };
    let generations = match args.get(1) {
        Some(s) => s.parse::<u64>().context("generations must be an integer")?,
        None => Config::BENCH_GENERATIONS,
    };
    let fill_rate = match args.get(2) {
        Some(s) => s.parse::<f64>().context("fill rate must be a number")?,
        None => Config::FILL_RATE,
    };

    let timer = Instant::now();
    let mut engine = Engine::new(side, side, Seed::random(fill_rate, Some(Config::SEED)))?;
    println!("Time on building field: {:?}", timer.elapsed());
    println!("Population: {}", NiceInt::from(engine.population()));

    let timer = Instant::now();
    engine.update(generations);
    let elapsed = timer.elapsed();
    println!("Time on {} generations: {:?}", NiceInt::from(generations), elapsed);
    let cells_per_sec = (side as f64).powi(2) * generations as f64 / elapsed.as_secs_f64();
    println!("Cells per second: {}", NiceInt::from(cells_per_sec as u64));
    println!("Population: {}", NiceInt::from(engine.population()));
    Ok(())
}
