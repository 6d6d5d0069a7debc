use std::{thread::sleep, time::{Duration, Instant}};

/// Blocking frame pacer: each `tick` waits out the rest of the current frame.
pub struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new() -> Self {
        Clock { last_tick: None }
    }

    /// Sleeps so that calls happen at most `rate` times per second.
    /// Returns the time since the previous tick, including the wait.
    pub fn tick(&mut self, rate: u32) -> Duration {
        let frame = Duration::from_secs(1) / rate.max(1);
        let now = Instant::now();

        let elapsed = match self.last_tick {
            Some(last) => {
                let busy = now.duration_since(last);
                if busy < frame {
                    sleep(frame - busy);
                }
                last.elapsed()
            }
            None => Duration::from_millis(0),
        };

        self.last_tick = Some(Instant::now());
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_does_not_wait() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(10), Duration::from_millis(0));
    }

    #[test]
    fn test_ticks_are_paced() {
        let mut clock = Clock::new();
        clock.tick(50);

        let start = Instant::now();
        let frame = clock.tick(50);

        assert!(frame >= Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_slow_frame_is_not_padded() {
        let mut clock = Clock::new();
        clock.tick(100);
        sleep(Duration::from_millis(30));

        let start = Instant::now();
        clock.tick(100);

        assert!(start.elapsed() < Duration::from_millis(10));
    }
}
