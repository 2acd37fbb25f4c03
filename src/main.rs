use std::env;
use std::error::Error;

use dualgrad::{train_loop, Dataset, NeuralNet, Sgd, TrainConfig};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;

/// Epoch progress is part of the program's output, so the crate's own
/// `info` events stay on whatever `RUST_LOG` says.
const PROGRESS_DIRECTIVE: &str = "dualgrad=info";

fn main() -> Result<(), Box<dyn Error>> {
    set_default_logging();

    let event_format = format().with_target(false).without_time();

    tracing_subscriber::fmt()
        .with_env_filter(with_progress(EnvFilter::from_default_env())?)
        .event_format(event_format)
        .init();

    let network = NeuralNet::random(&mut rand::thread_rng());
    let dataset = Dataset::xor();

    let outcome = train_loop(network, &dataset, &Sgd::default(), &TrainConfig::default())?;

    println!();
    println!("{:<10} {:>6} {:>10}", "input", "target", "predicted");
    for p in &outcome.predictions {
        let input = format!("({}, {})", p.input[0], p.input[1]);
        println!("{:<10} {:>6} {:>10.4}", input, p.target, p.predicted);
    }
    println!();
    println!("Training complete.");

    Ok(())
}

fn set_default_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
}

/// Layers the progress directive on top of `filter`.
fn with_progress(filter: EnvFilter) -> Result<EnvFilter, Box<dyn Error>> {
    Ok(filter.add_directive(PROGRESS_DIRECTIVE.parse()?))
}
