mod generator;

use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source = Path::new(generator::SOURCE_PATH);
    let output = Path::new(generator::OUTPUT_DIR);

    if let Err(err) = generator::generate(source, output) {
        tracing::error!(error = %err, "favicon generation failed");
        std::process::exit(1);
    }
}
