use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber for the binary. `RUST_LOG` overrides the
/// default filter, which keeps command output free of store chatter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
