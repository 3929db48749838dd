use flexi_logger::Logger;
use log::info;
use ordered_lru::{LruConfig, OrderedLru};

/// Number of steps the Collatz sequence starting at `n` needs to reach 1
fn collatz_steps(cache: &mut OrderedLru<u64, u32>, n: u64) -> u32 {
    if n <= 1 {
        return 0;
    }
    if let Some(steps) = cache.get(&n) {
        return *steps;
    }

    let next = if n.is_multiple_of(2) { n / 2 } else { 3 * n + 1 };
    let steps = collatz_steps(cache, next) + 1;
    cache.set(n, steps);
    steps
}

fn main() -> Result<(), anyhow::Error> {
    let _logger = Logger::try_with_str("debug")?.start()?;

    let config = LruConfig::from_json_str(r#"{ "capacity": 256 }"#)?;
    let mut cache = config.build();

    let (longest, steps) = (1..10_000u64)
        .map(|n| (n, collatz_steps(&mut cache, n)))
        .max_by_key(|(_, steps)| *steps)
        .unwrap_or((1, 0));

    info!("Longest chain below 10000 starts at {longest} ({steps} steps)");
    info!(
        "Cache holds {} of {} entries, most recent: {:?}",
        cache.len(),
        cache.capacity(),
        cache.keys().next_back()
    );
    Ok(())
}
