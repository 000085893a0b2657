use shared_utils::env::env_var_or;

/// Installs the global tracing subscriber.
///
/// The filter comes from `SIGNAL_ALERTER_LOG` when set (e.g.
/// `signal_alerter=debug`), defaulting to `info`.
pub fn init_tracing() {
    let filter = env_var_or("SIGNAL_ALERTER_LOG", "info");
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
