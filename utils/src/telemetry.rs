use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Installs the fmt subscriber on stderr so stdout only carries answers.
///
/// `RUST_LOG` wins when set; otherwise `crate_name` logs at info and
/// everything else at warn.
pub fn init(crate_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{crate_name}=info,aoc_utils=info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
}
