//! Frame timing for the viewer loop

use std::collections::VecDeque;
use std::time::Instant;

/// FPS counter with rolling average
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    /// Create a new FPS counter with specified sample window
    pub fn new(sample_count: usize) -> Self {
        let sample_count = sample_count.max(1);
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count,
        }
    }

    /// Call once per frame. Returns the frame's delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(dt);
        dt
    }

    /// Push one frame time into the rolling window
    pub fn record(&mut self, dt: f32) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
    }

    fn avg_dt(&self) -> f32 {
        self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32
    }

    pub fn avg_fps(&self) -> f32 {
        let avg = self.avg_dt();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }

    /// Get the average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_dt() * 1000.0
    }

    /// Get min/max FPS from sample window
    pub fn min_max_fps(&self) -> (f32, f32) {
        if self.frame_times.is_empty() {
            return (0.0, 0.0);
        }
        let min_dt = self.frame_times.iter().copied().fold(f32::INFINITY, f32::min);
        let max_dt = self.frame_times.iter().copied().fold(0.0, f32::max);
        let max_fps = if min_dt > 0.0 { 1.0 / min_dt } else { 0.0 };
        let min_fps = if max_dt > 0.0 { 1.0 / max_dt } else { 0.0 };
        (min_fps, max_fps)
    }

    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_window_drops_oldest() {
        let mut fps = FpsCounter::new(3);
        for dt in [1.0, 0.5, 0.5, 0.5] {
            fps.record(dt);
        }
        assert_eq!(fps.frame_count(), 3);
        assert!((fps.avg_fps() - 2.0).abs() < 1e-4);
        assert!((fps.avg_frame_time_ms() - 500.0).abs() < 1e-2);
    }

    #[test]
    fn test_min_max_fps() {
        let mut fps = FpsCounter::new(10);
        assert_eq!(fps.min_max_fps(), (0.0, 0.0));
        fps.record(0.25);
        fps.record(0.5);
        assert_eq!(fps.min_max_fps(), (2.0, 4.0));
    }

    #[test]
    fn test_tick_records_a_frame() {
        let mut fps = FpsCounter::new(4);
        let dt = fps.tick();
        assert!(dt >= 0.0);
        assert_eq!(fps.frame_count(), 1);
    }
}
