use std::time::Duration;

pub const COUNT_UP_STEPS: u32 = 50;
pub const COUNT_UP_TICK: Duration = Duration::from_millis(30);

/// Counter animating from 0 to `target` in fixed increments.
///
/// Finishes exactly on `target`: overshoot is clamped, and the last step
/// snaps to the target to absorb floating point drift.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    increment: f64,
    current: f64,
    ticks: u32,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            increment: target / COUNT_UP_STEPS as f64,
            current: 0.0,
            ticks: 0,
            done: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one step. Returns `true` while the animation is still running.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.ticks += 1;
        self.current += self.increment;
        if self.current >= self.target || self.ticks >= COUNT_UP_STEPS {
            self.current = self.target;
            self.done = true;
        }
        !self.done
    }

    /// Skip to the end.
    pub fn finish(&mut self) {
        self.current = self.target;
        self.done = true;
    }

    /// Rounded percentage, e.g. `"87%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.current.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: f64) -> (CountUp, u32) {
        let mut c = CountUp::new(target);
        let mut ticks = 0;
        while c.tick() {
            ticks += 1;
            assert!(c.current() <= target);
            assert!(ticks < 1000);
        }
        (c, ticks + 1)
    }

    #[test]
    fn converges_exactly() {
        for target in [0.0, 1.0, 33.3, 87.5, 99.99, 100.0, 7.0 / 3.0] {
            let (c, ticks) = run(target);
            assert_eq!(c.current(), target);
            assert!(ticks <= COUNT_UP_STEPS);
        }
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut c = CountUp::new(0.0);
        assert!(!c.tick());
        assert_eq!(c.label(), "0%");
    }

    #[test]
    fn label_rounds() {
        let mut c = CountUp::new(87.5);
        c.finish();
        assert_eq!(c.label(), "88%");
    }
}
