use tracing_subscriber::EnvFilter;

use crate::wire::GenerationRequest;

/// Install the stderr subscriber. `RUST_LOG` wins unless `debug` is set.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("headline_prompt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn print_json_debug(stage: &str, req: &GenerationRequest) -> anyhow::Result<()> {
    let req_json = serde_json::to_string_pretty(req)?;
    tracing::debug!("{stage}: request payload\n{req_json}");
    Ok(())
}
