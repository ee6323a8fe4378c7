//! Count-up animation for the statistics strip.
//!
//! The target and the suffix are both recovered from the text the element
//! already shows, so `"1,250+"` counts from `0+` to `1,250+`.

use crate::config::COUNTER_STEPS;

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: u64,
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    suffix: String,
    done: bool,
}

impl CounterAnimation {
    /// Text without digits yields a target of 0, which finishes on the first tick.
    /// Returns `None` when the number is too large to count, and the element
    /// keeps its text.
    pub fn from_text(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = if digits.is_empty() { 0 } else { digits.parse::<u64>().ok()? };
        let suffix = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != ',')
            .collect();
        Some(Self {
            target,
            increment: target as f64 / COUNTER_STEPS,
            current: 0.0,
            suffix,
            done: false,
        })
    }

    /// Advances one timer tick and returns what the element should display.
    pub fn step(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
            }
        }
        let value = (self.current.floor() as u64).min(self.target);
        CounterFrame {
            value,
            text: format!("{}{}", format_thousands(value), self.suffix),
            done: self.done,
        }
    }
}

/// Groups digits in threes with commas, e.g. `1234567` → `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_to_end(animation: &mut CounterAnimation) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        // generous bound, float drift can cost one extra tick
        for _ in 0..200 {
            let frame = animation.step();
            let done = frame.done;
            frames.push(frame);
            if done {
                break;
            }
        }
        frames
    }

    #[test]
    fn parses_target_and_suffix() {
        let animation = CounterAnimation::from_text("1,250+").unwrap();
        assert_eq!(animation.target, 1250);
        assert_eq!(animation.suffix, "+");

        let animation = CounterAnimation::from_text("98%").unwrap();
        assert_eq!(animation.target, 98);
        assert_eq!(animation.suffix, "%");
    }

    #[test]
    fn ends_on_original_text() {
        let mut animation = CounterAnimation::from_text("1,250+").unwrap();
        let frames = run_to_end(&mut animation);
        let last = frames.last().unwrap();
        assert!(last.done);
        assert_eq!(last.text, "1,250+");
        assert!(frames.len() >= 50 && frames.len() <= 51);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::from_text("0").unwrap();
        let frame = animation.step();
        assert!(frame.done);
        assert_eq!(frame.text, "0");
    }

    #[test]
    fn text_without_digits_counts_to_zero() {
        let mut animation = CounterAnimation::from_text("many").unwrap();
        let frame = animation.step();
        assert!(frame.done);
        assert_eq!(frame.text, "0many");
    }

    #[test]
    fn oversized_number_is_left_alone() {
        assert!(CounterAnimation::from_text("99,999,999,999,999,999,999+").is_none());
        assert!(CounterAnimation::from_text("18,446,744,073,709,551,615").is_some());
    }

    #[test]
    fn finished_animation_stays_put() {
        let mut animation = CounterAnimation::from_text("10").unwrap();
        run_to_end(&mut animation);
        assert!(animation.done);
        assert_eq!(animation.step().text, "10");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    proptest! {
        #[test]
        fn frames_are_monotonic_and_bounded(target in 0u64..5_000_000, suffix in "[+%k]{0,2}") {
            let text = format!("{}{}", format_thousands(target), suffix);
            let mut animation = CounterAnimation::from_text(&text).unwrap();
            let frames = run_to_end(&mut animation);

            let mut previous = 0;
            for frame in &frames {
                prop_assert!(frame.value >= previous);
                prop_assert!(frame.value <= target);
                previous = frame.value;
            }
            let last = frames.last().unwrap();
            prop_assert!(last.done);
            prop_assert_eq!(&last.text, &text);
        }
    }
}
