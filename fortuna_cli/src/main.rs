mod input;
mod session;

use fortuna_core::EngineParams;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is the game.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let params = EngineParams::default_classic();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut rng = rand::thread_rng();

    let result = session::run(&mut rng, &params, &mut stdin.lock(), &mut stdout.lock());
    if let Err(err) = &result {
        error!("session aborted: {err:#}");
    }
    result.map(|_| ())
}
