//! Step throughput benchmark across grid sizes

use std::time::Instant;

use life_engine::Engine;
use rand::{SeedableRng, rngs::StdRng};

/// Average milliseconds per step, plus average change-list length
fn benchmark_step(size: usize, iterations: u32) -> Result<(f64, f64), life_engine::LifeError> {
    let mut engine = Engine::new(size, size)?;
    engine.randomize_with(&mut StdRng::seed_from_u64(size as u64));

    let mut changes = 0usize;
    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
        changes += engine.take_changed_cells().len();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    Ok((ms, changes as f64 / iterations as f64))
}

fn main() -> Result<(), life_engine::LifeError> {
    env_logger::init();
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [20, 50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>14} {:>12}", "Size", "ms/step", "Mcells/sec", "Changes");
    println!("{:-<52}", "");

    for size in sizes {
        let (ms, changes) = benchmark_step(size, iterations)?;
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>14.1} {:>12.0}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            changes
        );
    }
    Ok(())
}
