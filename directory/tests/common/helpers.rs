//! Test helpers and builder patterns for controller tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use directory::{DirectoryController, DirectoryHandle, MockVendorSource};
use shared::{DirectoryConfig, DirectoryView, SharedError, SharedResult, Vendor};

use super::fixtures::TestFixtures;

type LoadScript = Arc<dyn Fn(usize) -> SharedResult<Vec<Vendor>> + Send + Sync>;

/// Builder for a controller backed by a scripted mock source
pub struct ControllerBuilder {
    debounce: Duration,
    script: LoadScript,
}

impl ControllerBuilder {
    /// Mock source that returns `acme_and_beta` on every load
    pub fn new() -> Self {
        Self {
            debounce: Duration::from_millis(TestFixtures::DEBOUNCE_MS),
            script: Arc::new(|_| Ok(TestFixtures::acme_and_beta())),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_vendors(mut self, vendors: Vec<Vendor>) -> Self {
        self.script = Arc::new(move |_| Ok(vendors.clone()));
        self
    }

    /// `script` receives the zero-based load number
    pub fn with_load_script<F>(mut self, script: F) -> Self
    where
        F: Fn(usize) -> SharedResult<Vec<Vendor>> + Send + Sync + 'static,
    {
        self.script = Arc::new(script);
        self
    }

    /// First load succeeds with `vendors`, every later load fails
    pub fn failing_after_first(self, vendors: Vec<Vendor>) -> Self {
        self.with_load_script(move |load| {
            if load == 0 {
                Ok(vendors.clone())
            } else {
                Err(SharedError::SourceUnavailable {
                    message: "vendor service offline".to_string(),
                })
            }
        })
    }

    pub fn build_source(&self) -> MockVendorSource {
        let mut source = MockVendorSource::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let script = Arc::clone(&self.script);

        source
            .expect_load_vendors()
            .returning(move || script(calls.fetch_add(1, Ordering::SeqCst)))
            .times(0..);
        source
            .expect_describe()
            .return_const("mock vendor source".to_string())
            .times(0..);
        source
    }

    pub fn spawn(self) -> DirectoryHandle {
        let source = self.build_source();
        let config = DirectoryConfig::default().with_debounce(self.debounce);
        DirectoryController::spawn(source, config).expect("valid test config")
    }
}

/// Assertion and timing helpers
pub struct TestHelpers;

impl TestHelpers {
    /// Spawn with default fixtures and wait for the first load to land
    pub async fn loaded_controller() -> DirectoryHandle {
        let handle = ControllerBuilder::new().spawn();
        Self::wait_loaded(&handle).await;
        handle
    }

    pub async fn wait_loaded(handle: &DirectoryHandle) -> DirectoryView {
        handle
            .wait_for(|view| !view.loading)
            .await
            .expect("controller running")
    }

    /// Let the controller task drain its queue without moving the clock
    pub async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    /// Advance paused time and let the controller react
    pub async fn advance(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Self::settle().await;
    }

    pub fn filtered_names(view: &DirectoryView) -> Vec<String> {
        TestFixtures::names(&view.filtered_vendors)
    }
}
