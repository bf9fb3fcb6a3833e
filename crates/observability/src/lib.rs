//! Tracing/logging setup shared by binaries and tests that embed the statement
//! engine. The engine itself only emits events; nothing is printed unless one
//! of these subscribers is installed.

/// Initialize process-wide tracing (JSON lines, `RUST_LOG` filter).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing for tests: compact output captured by the test harness.
///
/// Safe to call from every test.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
