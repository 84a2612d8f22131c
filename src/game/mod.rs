pub mod animals;
pub mod christmas;
pub mod drawing;
pub mod focus;
pub mod math;
pub mod memory;
pub mod profile;
pub mod puzzle;
pub mod reading;
pub mod sequence;
pub mod settings;
pub mod stats_manager;
pub mod stats_recorder;
pub mod tooth_brushing;

use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Every engine draws from one of these so a `SEED` reproduces a whole session.
pub fn seeded_rng(target: &str, seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    info!(target: target, "New game; seed: {}", seed);
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
pub mod tests {
    use std::sync::Once;
    use test_context::TestContext;

    static INIT_LOGGER: Once = Once::new();

    pub struct UsingLogger;

    impl TestContext for UsingLogger {
        fn setup() -> UsingLogger {
            INIT_LOGGER.call_once(|| {
                let _ = env_logger::builder().is_test(true).try_init();
            });
            UsingLogger
        }

        fn teardown(self) {}
    }
}
