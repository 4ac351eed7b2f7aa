//! Setting up logging.
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the decoder and the listener.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to see every decoded message but not the listener:
///   RUST_LOG=mdns_decode::base=TRACE,mdns_decode::net=OFF
///
/// Calling this more than once is harmless. Only the first call has an
/// effect.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
