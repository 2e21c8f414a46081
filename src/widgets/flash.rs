// Flash expiry - one-shot timer that clears duplicate-chip emphasis
//
// The chip list never cancels a timer. Each flash is tagged with the chip
// index and a generation number; when the expiry arrives the chip list
// ignores it unless both still match the current flash.

use std::time::Duration;

/// Currently displayed flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub index: usize,
    pub generation: u64,
}

/// Scheduled expiry for a flash; await `expire()` to receive the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a flash timer does nothing until it is awaited"]
pub struct FlashTimer {
    target: Flash,
    delay: Duration,
}

/// Signal delivered back to the widget once a flash timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashExpired {
    pub target: Flash,
}

impl FlashTimer {
    pub(crate) fn new(target: Flash, delay: Duration) -> Self {
        Self { target, delay }
    }

    pub fn target(&self) -> Flash {
        self.target
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the flash duration, then yield the expiry signal
    pub async fn expire(self) -> FlashExpired {
        tokio::time::sleep(self.delay).await;
        FlashExpired {
            target: self.target,
        }
    }
}
