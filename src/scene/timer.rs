//! Periodic zoom pulse driven by elapsed time

/// Counts up frame deltas; every `interval` seconds it switches into a
/// zooming state that lasts `duration` seconds.
#[derive(Debug, Clone)]
pub struct ZoomPulse {
    interval: f32,
    duration: f32,
    strength: f32,
    timer: f32,
    zooming: bool,
    last_t: f32,
}

impl ZoomPulse {
    pub fn new(interval: f32, duration: f32, strength: f32) -> Self {
        Self {
            interval,
            duration,
            strength,
            timer: 0.0,
            zooming: false,
            last_t: 0.0,
        }
    }

    /// Feed the current elapsed time. The delta is taken from the previous
    /// call; time running backwards (or non-finite) counts as no time.
    pub fn advance(&mut self, t: f32) {
        if !t.is_finite() {
            return;
        }
        let dt = (t - self.last_t).max(0.0);
        self.last_t = t;
        self.step(dt);
    }

    fn step(&mut self, dt: f32) {
        self.timer += dt;

        if !self.zooming && self.timer >= self.interval {
            self.zooming = true;
            self.timer = 0.0;
        }

        if self.zooming && self.timer >= self.duration {
            self.zooming = false;
            self.timer = 0.0;
        }
    }

    #[inline]
    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// 0..1 through the current zoom, 0 when idle
    pub fn progress(&self) -> f32 {
        if self.zooming && self.duration > 0.0 {
            (self.timer / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Scale factor: swells to `1 + strength / 10` halfway through a zoom
    pub fn scale(&self) -> f32 {
        if self.zooming {
            1.0 + self.strength * 0.1 * (std::f32::consts::PI * self.progress()).sin()
        } else {
            1.0
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.zooming = false;
        self.last_t = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> ZoomPulse {
        ZoomPulse::new(8.0, 2.0, 3.0)
    }

    #[test]
    fn test_idle_until_interval() {
        let mut z = pulse();
        for i in 0..=79 {
            z.advance(i as f32 * 0.1);
        }
        assert!(!z.is_zooming());
        assert_eq!(z.scale(), 1.0);
        z.advance(8.05);
        assert!(z.is_zooming());
    }

    #[test]
    fn test_zoom_lasts_duration_then_repeats() {
        let mut z = pulse();
        z.advance(8.0);
        assert!(z.is_zooming());
        z.advance(9.0);
        assert!(z.is_zooming());
        assert!((z.scale() - 1.3).abs() < 1e-4);
        z.advance(10.0);
        assert!(!z.is_zooming());
        z.advance(17.5);
        assert!(!z.is_zooming());
        z.advance(18.5);
        assert!(z.is_zooming());
    }

    #[test]
    fn test_backwards_time_counts_as_zero() {
        let mut z = pulse();
        z.advance(7.0);
        z.advance(2.0);
        z.advance(f32::NAN);
        assert!(!z.is_zooming());
        // The jump back added nothing, so 7 s are still on the clock
        z.advance(2.5);
        assert!(!z.is_zooming());
        z.advance(3.0);
        assert!(z.is_zooming());
    }

    #[test]
    fn test_reset() {
        let mut z = pulse();
        z.advance(8.5);
        assert!(z.is_zooming());
        z.reset();
        assert!(!z.is_zooming());
        assert_eq!(z.progress(), 0.0);
    }
}
