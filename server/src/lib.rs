mod config;
mod records;

pub use crate::config::{CONFIG, Config};
pub use crate::records::{RECORDS, RecordsClient};

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
