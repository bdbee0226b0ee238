//! Entanglement survey over the divisor pairs of a level.
//!
//! Surveys an index-2 subgroup of GL(2, Z/30Z) whose mod-2 and mod-5
//! images are correlated, then a subgroup of GL(2, Z/12Z) through the
//! general comparison.
//!
//! Run with: RUST_LOG=entangle=debug cargo run --release --example entanglement_survey

use std::time::Instant;

use entangle::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LEVEL_30: [[i64; 4]; 6] = [
    [11, 0, 0, 1],
    [1, 1, 1, 0],
    [1, 6, 0, 1],
    [1, 0, 6, 1],
    [7, 15, 0, 1],
    [1, 10, 0, 1],
];

const LEVEL_12: [[i64; 4]; 3] = [[1, 1, 0, 1], [1, 0, 1, 1], [11, 0, 0, 1]];

fn print_notable(title: &str, reports: &[PairReport]) {
    println!("{title}");
    let mut any = false;
    for report in reports.iter().filter(|r| r.is_notable()) {
        println!("  {report}");
        any = true;
    }
    if !any {
        println!("  no entanglements");
    }
    println!();
}

fn main() -> Result<(), EntanglementError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let detector = EntanglementDetector::new(DetectorConfig::default());

    let start = Instant::now();
    let reports = detector.survey_coprime(30, &LEVEL_30)?;
    print_notable("Coprime pairs of level 30:", &reports);

    let reports = detector.survey_general(12, &LEVEL_12)?;
    print_notable("All pairs of level 12:", &reports);

    println!(
        "{} kernels cached, {:.2?} elapsed",
        detector.cache().len(),
        start.elapsed()
    );
    Ok(())
}
