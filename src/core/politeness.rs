use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Spaces request starts to the same host at least `delay` apart. Callers
/// reserve the next free slot for their host under the lock, then sleep
/// outside it; the first request to a host goes through immediately.
#[derive(Debug)]
pub struct PolitenessGate {
    delay: Duration,
    slots: Mutex<HashMap<String, Instant>>,
}

impl PolitenessGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub async fn acquire(&self, host: &str) {
        if self.delay.is_zero() {
            return;
        }

        let slot = {
            let mut slots = self.slots.lock();
            let now = Instant::now();
            let slot = match slots.get(host) {
                Some(previous) => now.max(*previous + self.delay),
                None => now,
            };
            slots.insert(host.to_string(), slot);
            slot
        };

        sleep_until(slot).await;
    }
}
