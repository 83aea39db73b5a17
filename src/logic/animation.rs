use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Frame-stepped count-up from zero to a target.
///
/// The count runs for `round(duration / frame)` frames. After `k` frames the
/// displayed value is `floor(target * k / frames)`, so it lands on the target
/// exactly on the last frame and never passes it.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    total_frames: u64,
    frames_done: u64,
    frame: Duration,
    carry: Duration,
    started: bool,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration, frame: Duration) -> Self {
        let duration = if duration.is_zero() {
            DEFAULT_DURATION
        } else {
            duration
        };
        let frame = if frame.is_zero() { DEFAULT_FRAME } else { frame };
        let total_frames = (duration.as_secs_f64() / frame.as_secs_f64())
            .round()
            .max(1.0) as u64;

        Self {
            target,
            total_frames,
            frames_done: 0,
            frame,
            carry: Duration::ZERO,
            started: false,
            finished: false,
        }
    }

    /// Starts the count-up. Later calls are ignored, so a counter runs once.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Applies one frame.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.frames_done += 1;
        if self.frames_done >= self.total_frames || self.value() >= self.target {
            self.frames_done = self.total_frames;
            self.finished = true;
        }
    }

    /// Applies every whole frame that fits in `elapsed`, carrying the rest.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.is_running() {
            return;
        }
        self.carry += elapsed;
        while self.carry >= self.frame && !self.finished {
            self.carry -= self.frame;
            self.tick();
        }
    }

    pub fn value(&self) -> u64 {
        if self.finished {
            return self.target;
        }
        let scaled = self.target as u128 * self.frames_done as u128 / self.total_frames as u128;
        scaled.min(self.target as u128) as u64
    }
}

/// Formats an integer with comma thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_counter(target: u64) -> CounterAnimation {
        CounterAnimation::new(target, DEFAULT_DURATION, DEFAULT_FRAME)
    }

    #[test]
    fn does_not_move_until_started() {
        let mut c = default_counter(1000);
        c.advance(Duration::from_secs(5));
        assert_eq!(c.value(), 0);
        assert!(!c.is_running());
    }

    #[test]
    fn reaches_target_after_full_duration() {
        let mut c = default_counter(12_500);
        c.start();
        // 2000ms / 16ms = 125 frames
        for _ in 0..124 {
            c.tick();
            assert!(c.value() < 12_500);
        }
        c.tick();
        assert!(c.is_finished());
        assert_eq!(c.value(), 12_500);
    }

    #[test]
    fn uneven_targets_finish_on_the_last_frame() {
        for target in [1, 7, 35, 40, 78, 85, 92, 95, 97, 85_000, 99_999] {
            let mut c = default_counter(target);
            c.start();
            for frame in 1..125 {
                c.tick();
                assert!(!c.is_finished(), "target {} finished at frame {}", target, frame);
                assert!(c.value() < target);
            }
            c.tick();
            assert!(c.is_finished(), "target {} not finished at frame 125", target);
            assert_eq!(c.value(), target);
        }
    }

    #[test]
    fn frame_count_rounds_to_nearest() {
        // 1000ms / 30ms = 33.3, rounds to 33 frames
        let mut c =
            CounterAnimation::new(33, Duration::from_millis(1000), Duration::from_millis(30));
        c.start();
        for _ in 0..32 {
            c.tick();
        }
        assert_eq!(c.value(), 32);
        c.tick();
        assert!(c.is_finished());
        assert_eq!(c.value(), 33);
    }

    #[test]
    fn never_overshoots() {
        let mut c = default_counter(97);
        c.start();
        let mut last = 0;
        for _ in 0..200 {
            c.tick();
            assert!(c.value() <= 97);
            assert!(c.value() >= last);
            last = c.value();
        }
        assert_eq!(c.value(), 97);
    }

    #[test]
    fn advance_carries_partial_frames() {
        let mut c = default_counter(1250);
        c.start();
        // 10 per frame
        c.advance(Duration::from_millis(24));
        assert_eq!(c.value(), 10);
        c.advance(Duration::from_millis(8));
        assert_eq!(c.value(), 20);
    }

    #[test]
    fn advance_past_end_finishes() {
        let mut c = default_counter(500);
        c.start();
        c.advance(Duration::from_secs(10));
        assert!(c.is_finished());
        assert_eq!(c.value(), 500);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut c = default_counter(0);
        c.start();
        c.tick();
        assert!(c.is_finished());
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12_500), "12,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
