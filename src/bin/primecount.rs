use std::{io, process};

use tracing::level_filters::LevelFilter;
use tracing_forest::{ForestLayer, PrettyPrinter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use oddsieve::{count_primes, SegmentedSieve, SieveConfig};

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::from(PrettyPrinter::new().writer(io::stderr)))
        .init();

    let sieve = match SegmentedSieve::new(SieveConfig::DEFAULT) {
        Ok(sieve) => sieve,
        Err(err) => {
            eprintln!("Invalid sieve configuration: {}", err);
            process::exit(1);
        }
    };

    let flags = sieve.run();
    println!("Number of primes up to {}:", sieve.upper_bound());
    println!("{}", count_primes(&flags));
}
