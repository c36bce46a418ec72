use fortuna_core::{spin_once, EngineParams};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    // Example end-to-end spin with a fixed seed
    let params = EngineParams::default_classic();
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = spin_once(&mut rng, &params, 10, 3).expect("default config is valid");
    println!("{}", outcome.grid);
    println!(
        "winnings={} lines={:?}",
        outcome.win.total_winnings, outcome.win.winning_lines
    );
}
