//! Shared utilities for integration tests

#![allow(dead_code)]

use effect_stats::Column;

pub const EPSILON: f64 = 1e-10;

/// Install a test subscriber once; `RUST_LOG=debug` shows engine events
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn text_column(name: &str, values: &[&str]) -> Column {
    Column::new(name, values.iter().copied())
}

pub fn numeric_column(name: &str, values: &[f64]) -> Column {
    Column::new(name, values.iter().copied())
}
