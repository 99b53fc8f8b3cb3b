//! Benchmark-only crate; see `benches/ml_dsa.rs`.
