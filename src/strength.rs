//! Strength scoring - maps a condition record to a level, label and meter.

use crate::conditions::ConditionStatus;

/// Highest reachable strength level.
pub const MAX_LEVEL: u8 = 4;

/// Number of segments in the strength meter.
pub const METER_SEGMENTS: usize = 4;

/// Discrete strength level in `0..=4`.
///
/// Only tracks how many conditions are met, not which ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthLevel(u8);

impl StrengthLevel {
    /// Builds a level, clamping into `0..=4`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, MAX_LEVEL as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        strength_label(self.0)
    }

    pub fn meter(&self) -> StrengthMeter {
        StrengthMeter::for_level(*self)
    }
}

/// Scores a condition record: `clamp(met - 1, 0, 4)`.
pub fn score(status: &ConditionStatus) -> StrengthLevel {
    StrengthLevel::new(status.met_count() as i64 - 1)
}

/// Returns the hint label for a raw level.
///
/// Levels outside `0..=4` fall back to "Weak password".
pub fn strength_label(level: u8) -> &'static str {
    match level {
        0 => "Must have at least 6 characters",
        1 => "Weak password",
        2 => "Medium password",
        3 => "Strong password",
        4 => "Very Strong password",
        _ => "Weak password",
    }
}

/// One meter segment. Active segments carry an intensity class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segment {
    pub intensity: Option<u8>,
}

impl Segment {
    pub fn is_active(&self) -> bool {
        self.intensity.is_some()
    }
}

/// Four-segment strength meter.
///
/// The first `level` segments are active and all of them share the same
/// intensity, equal to the level itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthMeter {
    pub segments: [Segment; METER_SEGMENTS],
}

impl StrengthMeter {
    pub fn for_level(level: StrengthLevel) -> Self {
        let level = level.value();
        let mut segments = [Segment::default(); METER_SEGMENTS];
        for (i, segment) in segments.iter_mut().enumerate() {
            if i < level as usize {
                segment.intensity = Some(level);
            }
        }
        Self { segments }
    }

    pub fn active_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_from_bits(bits: u8) -> ConditionStatus {
        ConditionStatus {
            has_upper: bits & 0b00001 != 0,
            has_lower: bits & 0b00010 != 0,
            has_number: bits & 0b00100 != 0,
            has_symbol: bits & 0b01000 != 0,
            has_min_length: bits & 0b10000 != 0,
        }
    }

    #[test]
    fn test_score_in_range_for_all_combinations() {
        for bits in 0..32u8 {
            let level = score(&status_from_bits(bits));
            assert!(level.value() <= MAX_LEVEL, "bits {bits:05b} gave {level:?}");
        }
    }

    #[test]
    fn test_score_monotonic_by_count() {
        for a in 0..32u8 {
            for b in 0..32u8 {
                let (sa, sb) = (status_from_bits(a), status_from_bits(b));
                if sa.met_count() > sb.met_count() {
                    assert!(score(&sa) >= score(&sb), "{a:05b} vs {b:05b}");
                }
            }
        }
    }

    #[test]
    fn test_score_is_lossy() {
        // Different subsets with the same count share a level
        assert_eq!(score(&status_from_bits(0b00011)), score(&status_from_bits(0b11000)));
        assert_eq!(score(&status_from_bits(0b00000)), score(&status_from_bits(0b00100)));
    }

    #[test]
    fn test_score_clamps_both_ends() {
        assert_eq!(score(&ConditionStatus::default()).value(), 0);
        assert_eq!(score(&status_from_bits(0b11111)).value(), 4);
        assert_eq!(StrengthLevel::new(-7).value(), 0);
        assert_eq!(StrengthLevel::new(99).value(), 4);
    }

    #[test]
    fn test_labels() {
        assert_eq!(strength_label(0), "Must have at least 6 characters");
        assert_eq!(strength_label(1), "Weak password");
        assert_eq!(strength_label(2), "Medium password");
        assert_eq!(strength_label(3), "Strong password");
        assert_eq!(strength_label(4), "Very Strong password");
    }

    #[test]
    fn test_label_default_branch() {
        assert_eq!(strength_label(5), "Weak password");
        assert_eq!(strength_label(u8::MAX), "Weak password");
    }

    #[test]
    fn test_meter_shares_one_intensity() {
        let meter = StrengthLevel::new(3).meter();
        assert_eq!(meter.active_count(), 3);
        assert_eq!(
            meter.segments.map(|s| s.intensity),
            [Some(3), Some(3), Some(3), None]
        );
    }

    #[test]
    fn test_meter_empty_and_full() {
        assert_eq!(StrengthLevel::new(0).meter().active_count(), 0);
        let full = StrengthLevel::new(4).meter();
        assert_eq!(full.active_count(), 4);
        assert!(full.segments.iter().all(|s| s.intensity == Some(4)));
    }
}
