//! Performance benchmark for the rule pass and the connectivity pass

use std::time::Instant;

use bubble_life::domain::{Boundary, EvalStrategy, Lattice, LifeRule, connectivity, evaluate, next_states_parallel};
use bubble_life::config::LatticeConfig;

fn build(n: usize, m: usize) -> Lattice {
    let config = LatticeConfig::new(n, m, 1.0, 7);
    match Lattice::build(&config) {
        Ok(lattice) => lattice,
        Err(err) => panic!("benchmark lattice {n}x{m}x{n} rejected: {err}"),
    }
}

/// Average milliseconds per call of `f` over `iterations` runs
fn time_ms(iterations: u32, mut f: impl FnMut()) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== BubbleLife Performance Benchmark ===\n");

    let sizes = [(10, 20), (20, 40), (40, 80), (64, 128), (100, 200)];
    let iterations = 10;
    let rule = LifeRule::default();

    let strategies = EvalStrategy::all();
    print!("{:>14} {:>10}", "Lattice", "Cells");
    for strategy in &strategies {
        print!(" {:>12}", strategy.name());
    }
    println!(" {:>10} {:>12}", "Speedup", "Groups");
    println!("{:-<76}", "");

    for (n, m) in sizes {
        let mut lattice = build(n, m);

        // A rule pass only rewrites `next`, so repeating it on one lattice is stable
        let timings: Vec<f64> = strategies
            .iter()
            .map(|&strategy| {
                time_ms(iterations, || {
                    std::hint::black_box(evaluate(&mut lattice, &rule, Boundary::Wrap, strategy));
                })
            })
            .collect();
        let serial_ms = timings[0];
        let parallel_ms = timings[timings.len() - 1];
        let groups_ms = time_ms(iterations, || {
            std::hint::black_box(connectivity::components(&lattice));
        });

        print!("{:>14} {:>10}", format!("{n}x{m}x{n}"), lattice.len());
        for ms in &timings {
            print!(" {:>10.2}ms", ms);
        }
        println!(
            " {:>9.1}x {:>10.2}ms",
            serial_ms / parallel_ms.max(f64::EPSILON),
            groups_ms
        );
    }

    let (n, m) = (100, 200);
    let lattice = build(n, m);
    let cells = lattice.len();
    let parallel_ms = time_ms(iterations, || {
        std::hint::black_box(next_states_parallel(&lattice, &rule, Boundary::Wrap));
    });
    println!("\n=== Throughput at {n}x{m}x{n} ===\n");
    println!(
        "Parallel rule pass: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
