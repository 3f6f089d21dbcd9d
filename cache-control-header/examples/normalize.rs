//! Read a `Cache-Control` header value from stdin and print its canonical form.
//!
//! Strictness is driven by the environment:
//!
//! ```sh
//! echo "Private, MAX-AGE = 60, foo" \
//!     | CACHE_CONTROL_IGNORE_UNKNOWN_DIRECTIVES=1 RUST_LOG=debug \
//!     cargo run --example normalize --features examples
//! ```

use cache_control_header::{ParseOptions, parse_reader};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = ParseOptions::from_env()?;
    let header = parse_reader(std::io::stdin().lock(), &options)?;

    for directive in header.directives() {
        match header.delta(directive) {
            Some(duration) => tracing::info!("{directive}: {duration:?}"),
            None => tracing::info!("{directive}"),
        }
    }

    println!("{header}");

    Ok(())
}
