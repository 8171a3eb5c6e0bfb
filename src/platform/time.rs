//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps until the next frame deadline
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    /// Target frame length
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until at least one frame length has passed since the previous
    /// call, then return the elapsed milliseconds.
    pub fn tick(&mut self) -> u64 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let ms = now.duration_since(self.last).as_millis() as u64;
        self.last = now;
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(FrameLimiter::new(60).frame_duration(), Duration::from_secs(1) / 60);
        // Zero is treated as one frame per second
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_waits_for_deadline() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        let ms = limiter.tick();
        assert!(start.elapsed() >= Duration::from_millis(9));
        assert!(ms >= 10);
    }

    #[test]
    fn test_tick_does_not_wait_when_late() {
        let mut limiter = FrameLimiter::new(1000);
        thread::sleep(Duration::from_millis(5));
        let ms = limiter.tick();
        assert!(ms >= 5);
    }
}
