use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`; when it is unset or invalid the
/// default is `info,diesel=warn,tower_http=info`: request traces and
/// application events stay visible without per-query noise from the ORM.
///
/// Call once, at the start of `main`. Calling it again is a no-op.
pub fn init_logging() {
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "info,diesel=warn,tower_http=info".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
