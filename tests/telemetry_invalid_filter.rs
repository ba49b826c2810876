//! Invalid `RUST_LOG` directives are reported rather than ignored.

use dav_protocol::config::Config;
use dav_protocol::telemetry::{TelemetryError, init_tracing};

#[test]
fn invalid_rust_log_is_reported() {
    // SAFETY: this test binary runs a single test and no other thread reads
    // the environment.
    unsafe { std::env::set_var("RUST_LOG", "dav_protocol=notalevel") };

    let result = init_tracing(&Config::default());

    assert!(matches!(result, Err(TelemetryError::InvalidFilter(_))));
}
