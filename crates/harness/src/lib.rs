pub mod session;
pub mod submitter;

pub use session::TestSession;
pub use submitter::{FailingSubmitter, RecordingSubmitter};

use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once per process. Honors `RUST_LOG`,
/// defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
