use std::time::{Duration, Instant};

use crate::game::TickInfo;

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Times the snake ran into itself
    pub resets: u32,
    pub longest: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            resets: 0,
            longest: 1,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_tick(&mut self, info: TickInfo, target_length: usize) {
        if info.collided {
            self.resets += 1;
        }
        self.longest = self.longest.max(target_length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
