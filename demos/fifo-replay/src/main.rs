mod op;
mod replay;
mod shared;

use std::str::FromStr;

use anyhow::Result;
use argh::FromArgs;

#[derive(Debug, FromArgs)]
/// Drive a FIFO queue with a random workload and check its ordering
#[argh(help_triggers("--help"))]
struct Args {
    /// number of operations to run
    #[argh(option, default = "10000")]
    ops: usize,
    /// seed of the random workload, picked at random if omitted
    #[argh(option)]
    seed: Option<u64>,
    /// workload to run, may be "replay" or "shared"
    #[argh(option, default = "Mode::Replay")]
    mode: Mode,
    /// number of producer threads in "shared" mode
    #[argh(option, default = "4")]
    producers: usize,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Replay,
    Shared,
}

impl FromStr for Mode {
    type Err = &'static str;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "replay" => Ok(Mode::Replay),
            "shared" => Ok(Mode::Shared),
            _ => Err("invalid mode"),
        }
    }
}

fn main() -> Result<()> {
    let args = argh::from_env::<Args>();
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = fastrand::Rng::with_seed(seed);
    tracing::info!("started {:?}, ops={}, seed={seed}", args.mode, args.ops);

    let stats = match args.mode {
        Mode::Replay => replay::replay(&mut rng, args.ops)?,
        Mode::Shared => shared::shared(&mut rng, args.ops, args.producers)?,
    };

    tracing::info!(
        "finished {:?}, enqueued={}, dequeued={}, missed={}, cleared={}, peak_len={}",
        args.mode,
        stats.enqueued,
        stats.dequeued,
        stats.missed,
        stats.cleared,
        stats.peak_len,
    );
    Ok(())
}
