use std::time::{Duration, Instant};

/// Measures frame times and optionally sleeps to hold a frame cap.
pub struct Framepacer {
    frame_start: Instant,
    last_frame: Duration,
}

impl Framepacer {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            last_frame: Duration::ZERO,
        }
    }

    pub fn framerate(&self) -> f32 {
        let secs = self.last_frame.as_secs_f32();
        if secs > f32::EPSILON {
            1.0 / secs
        } else {
            0.0
        }
    }

    /// Starts a frame and returns the time since the previous one started.
    pub fn begin_frame(&mut self) -> Duration {
        let now = Instant::now();
        self.last_frame = now - self.frame_start;
        self.frame_start = now;

        self.last_frame
    }

    /// Forget time spent while no frames were wanted.
    pub fn reset(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end_frame(&self, framerate: Option<u32>) {
        let Some(framerate) = framerate.filter(|f| *f > 0) else {
            return;
        };

        const ACCURACY: Duration = Duration::from_micros(100);
        let limit = Duration::from_secs_f32(1.0 / framerate as f32);
        let spent = self.frame_start.elapsed();

        if let Some(sleep_time) = limit.checked_sub(spent + ACCURACY) {
            std::thread::sleep(sleep_time);

            while self.frame_start.elapsed() < limit {
                std::thread::yield_now();
            }
        }
    }
}
