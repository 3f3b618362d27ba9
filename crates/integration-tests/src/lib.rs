//! Integration tests for Driftline.
//!
//! Cross-module flows through the [`App`] composition root: persistence
//! round-trips across a simulated page reload, catalog paging with transient
//! failures, and the contact-form pipeline. Everything runs against
//! [`MemoryStorage`] and [`RecordingRenderer`], the same seams a real
//! embedder plugs into.
//!
//! Run with: `cargo test -p driftline-integration-tests`

use std::sync::Once;

use driftline_landing::config::LandingConfig;
use driftline_landing::render::RecordingRenderer;
use driftline_landing::state::App;
use driftline_landing::storage::MemoryStorage;

/// The app wiring every flow test uses.
pub type TestApp = App<MemoryStorage, RecordingRenderer>;

/// Build an app with zero artificial latency on empty storage.
#[must_use]
pub fn test_app() -> TestApp {
    test_app_with(MemoryStorage::new())
}

/// Build an app with zero artificial latency on the given storage.
///
/// Used to simulate a page reload: tear one app down with
/// [`App::into_storage`] and build the next on what it persisted.
#[must_use]
pub fn test_app_with(storage: MemoryStorage) -> TestApp {
    init_tracing();
    App::new(
        LandingConfig::instant(),
        storage,
        RecordingRenderer::new(),
    )
}

/// Install a test subscriber once so `RUST_LOG` works under `cargo test`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
