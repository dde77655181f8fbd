use crate::{
    error::{HexError, Result},
    geometry::{about_equal, about_le, normalize_angle},
};
use std::fmt;

/// An arc `[from, to]` on the 0..360 degree circle, going clockwise from `from`.
///
/// When `from > to` the arc crosses 0. The full circle is a distinct value since it
/// cannot be described by two equal bounds.
#[derive(Debug, Clone, Copy)]
pub struct AngleInterval {
    from: f64,
    to: f64,
    full: bool,
}

const B_START_INSIDE_A: u8 = 1 << 0;
const B_END_INSIDE_A: u8 = 1 << 1;
const A_START_INSIDE_B: u8 = 1 << 2;
const A_END_INSIDE_B: u8 = 1 << 3;
const ALL_INSIDE: u8 = B_START_INSIDE_A | B_END_INSIDE_A | A_START_INSIDE_B | A_END_INSIDE_B;

/// Whether `angle` lies on the arc leaving `start` clockwise for `width` degrees.
fn on_arc(start: f64, width: f64, angle: f64) -> bool {
    let offset = normalize_angle(angle - start);
    about_le(offset, width) || about_equal(offset, 360.0)
}

fn has_flags(flags: u8, expected: u8) -> bool {
    flags & expected == expected
}

fn has_none(flags: u8, unexpected: u8) -> bool {
    flags & unexpected == 0
}

impl AngleInterval {
    pub fn new(from: f64, to: f64) -> Result<Self> {
        for angle in [from, to].iter() {
            if !angle.is_finite() {
                return Err(HexError::NonFiniteAngle(*angle));
            }
        }
        Ok(Self::normalized(from, to))
    }

    /// Callers guarantee finite bounds.
    pub(crate) fn normalized(from: f64, to: f64) -> Self {
        debug_assert!(from.is_finite() && to.is_finite());
        Self {
            from: normalize_angle(from),
            to: normalize_angle(to),
            full: false,
        }
    }

    pub fn full() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            full: true,
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn inside(&self, angle: f64) -> bool {
        if self.full {
            return true;
        }
        let (start, end) = self.unwrapped();
        on_arc(start, end - start, angle)
    }

    /// Bounds with `end >= start`, adding a turn to `end` when the arc crosses 0.
    fn unwrapped(&self) -> (f64, f64) {
        if self.from > self.to {
            (self.from, self.to + 360.0)
        } else {
            (self.from, self.to)
        }
    }

    /// Merges two arcs when they touch or overlap.
    ///
    /// Containment of each end in the other arc is measured as the clockwise offset
    /// from the other arc start, reduced into `[0, 360)`, so it does not matter which
    /// side of 0 the angles are on.
    ///
    /// # Panics
    ///
    /// Panics on a containment combination two arcs on a circle cannot produce.
    pub fn try_merge(&self, other: &AngleInterval) -> Option<AngleInterval> {
        if other.full {
            return Some(*other);
        }
        if self.full || self == other {
            return Some(*self);
        }

        let (a_start, a_end) = self.unwrapped();
        let (b_start, b_end) = other.unwrapped();
        let a_width = a_end - a_start;
        let b_width = b_end - b_start;

        let mut flags = 0;
        if on_arc(a_start, a_width, b_start) {
            flags |= B_START_INSIDE_A;
        }
        if on_arc(a_start, a_width, b_end) {
            flags |= B_END_INSIDE_A;
        }
        if on_arc(b_start, b_width, a_start) {
            flags |= A_START_INSIDE_B;
        }
        if on_arc(b_start, b_width, a_end) {
            flags |= A_END_INSIDE_B;
        }

        if flags == 0 {
            None
        } else if flags == ALL_INSIDE {
            Some(Self::full())
        } else if has_flags(flags, B_START_INSIDE_A | B_END_INSIDE_A) {
            Some(*self)
        } else if has_flags(flags, A_START_INSIDE_B | A_END_INSIDE_B) {
            Some(*other)
        } else if has_flags(flags, A_END_INSIDE_B | B_START_INSIDE_A)
            && has_none(flags, A_START_INSIDE_B | B_END_INSIDE_A)
        {
            Some(Self::normalized(a_start, b_end))
        } else if has_flags(flags, A_START_INSIDE_B | B_END_INSIDE_A)
            && has_none(flags, A_END_INSIDE_B | B_START_INSIDE_A)
        {
            Some(Self::normalized(b_start, a_end))
        } else {
            unreachable!(
                "Cannot merge {} into {}: containment flags {:#06b}",
                other, self, flags
            )
        }
    }
}

impl PartialEq for AngleInterval {
    fn eq(&self, other: &Self) -> bool {
        if self.full || other.full {
            return self.full == other.full;
        }
        about_equal(self.from, other.from) && about_equal(self.to, other.to)
    }
}

impl fmt::Display for AngleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.full {
            write!(f, "[full circle]")
        } else {
            write!(f, "[{}, {}]", self.from, self.to)
        }
    }
}

#[cfg(test)]
fn interval(from: f64, to: f64) -> AngleInterval {
    AngleInterval::new(from, to).unwrap()
}

#[test]
fn test_new_angle_interval_normalizes() {
    let shadow = interval(-15.0, 375.0);
    assert_eq!(shadow.from(), 345.0);
    assert_eq!(shadow.to(), 15.0);
    assert!(!shadow.is_full());
}

#[test]
fn test_new_angle_interval_rejects_non_finite() {
    assert_eq!(
        AngleInterval::new(0.0, std::f64::INFINITY),
        Err(HexError::NonFiniteAngle(std::f64::INFINITY))
    );
    assert!(matches!(
        AngleInterval::new(std::f64::NAN, 10.0),
        Err(HexError::NonFiniteAngle(_))
    ));
}

#[test]
fn test_angle_interval_inside() {
    let shadow = interval(0.0, 30.0);
    assert!(shadow.inside(15.0));
    assert!(shadow.inside(0.0));
    assert!(shadow.inside(30.0));
    assert!(!shadow.inside(45.0));
    assert!(!shadow.inside(359.0));
}

#[test]
fn test_angle_interval_inside_across_zero() {
    let shadow = interval(350.0, 10.0);
    assert!(shadow.inside(355.0));
    assert!(shadow.inside(5.0));
    assert!(shadow.inside(0.0));
    assert!(!shadow.inside(180.0));
    assert!(!shadow.inside(11.0));
    assert!(shadow.inside(-5.0));
    assert!(shadow.inside(370.0 - 1e-12));
}

#[test]
fn test_full_angle_interval_inside() {
    let full = AngleInterval::full();
    for angle in (0..360).step_by(15) {
        assert!(full.inside(angle as f64));
    }
}

#[test]
fn test_angle_interval_equality() {
    assert_eq!(interval(0.0, 30.0), interval(360.0, 30.0 + 1e-14));
    assert_ne!(interval(0.0, 30.0), interval(0.0, 31.0));
    assert_eq!(AngleInterval::full(), AngleInterval::full());
    assert_ne!(AngleInterval::full(), interval(0.0, 0.0));
}

#[test]
fn test_angle_interval_try_merge() {
    let shadow1 = interval(0.0, 30.0);
    let shadow2 = interval(0.0, 15.0);
    let shadow3 = interval(20.0, 45.0);
    let shadow4 = interval(30.0, 0.0);
    let shadow5 = interval(15.0, 5.0);

    assert_eq!(shadow1.try_merge(&shadow1), Some(shadow1));

    assert_eq!(shadow1.try_merge(&shadow2), Some(shadow1));
    assert_eq!(shadow2.try_merge(&shadow1), Some(shadow1));

    assert_eq!(shadow1.try_merge(&shadow3), Some(interval(0.0, 45.0)));
    assert_eq!(shadow3.try_merge(&shadow1), Some(interval(0.0, 45.0)));

    assert_eq!(shadow2.try_merge(&shadow3), None);
    assert_eq!(shadow3.try_merge(&shadow2), None);

    assert_eq!(shadow1.try_merge(&shadow4), Some(AngleInterval::full()));
    assert_eq!(shadow4.try_merge(&shadow1), Some(AngleInterval::full()));

    assert_eq!(shadow1.try_merge(&shadow5), Some(AngleInterval::full()));
    assert_eq!(shadow5.try_merge(&shadow1), Some(AngleInterval::full()));

    assert_eq!(shadow5.try_merge(&shadow4), Some(shadow5));
    assert_eq!(shadow4.try_merge(&shadow5), Some(shadow5));
}

#[test]
fn test_angle_interval_try_merge_touching() {
    assert_eq!(
        interval(0.0, 60.0).try_merge(&interval(60.0, 120.0)),
        Some(interval(0.0, 120.0))
    );
    assert_eq!(
        interval(300.0, 360.0).try_merge(&interval(0.0, 60.0)),
        Some(interval(300.0, 60.0))
    );
}

#[test]
fn test_angle_interval_try_merge_far_apart() {
    assert_eq!(interval(0.0, 30.0).try_merge(&interval(180.0, 200.0)), None);
    assert_eq!(interval(350.0, 10.0).try_merge(&interval(90.0, 100.0)), None);
}

#[test]
fn test_full_angle_interval_absorbs() {
    let full = AngleInterval::full();
    assert_eq!(full.try_merge(&interval(10.0, 20.0)), Some(full));
    assert_eq!(interval(10.0, 20.0).try_merge(&full), Some(full));
}

#[test]
fn test_angle_interval_try_merge_half_circles() {
    assert_eq!(
        interval(0.0, 180.0).try_merge(&interval(300.0, 360.0)),
        Some(interval(300.0, 180.0))
    );
    assert_eq!(
        interval(300.0, 120.0).try_merge(&interval(120.0, 140.0)),
        Some(interval(300.0, 140.0))
    );
    assert_eq!(
        interval(120.0, 140.0).try_merge(&interval(300.0, 120.0)),
        Some(interval(300.0, 140.0))
    );
    assert_eq!(
        interval(240.0, 60.0).try_merge(&interval(60.0, 80.0)),
        Some(interval(240.0, 80.0))
    );
    assert_eq!(
        interval(0.0, 180.0).try_merge(&interval(180.0, 360.0)),
        Some(AngleInterval::full())
    );
    assert_eq!(interval(0.0, 180.0).try_merge(&interval(200.0, 340.0)), None);
}

#[test]
fn test_angle_interval_try_merge_wide_arcs() {
    // Both ends of the narrow arc lie on the wide one, which also wraps past it.
    assert_eq!(
        interval(0.0, 200.0).try_merge(&interval(150.0, 5.0)),
        Some(AngleInterval::full())
    );
    assert_eq!(
        interval(10.0, 300.0).try_merge(&interval(20.0, 40.0)),
        Some(interval(10.0, 300.0))
    );
    assert_eq!(
        interval(0.0, 180.0).try_merge(&interval(180.0, 350.0)),
        Some(interval(0.0, 350.0))
    );
}

#[test]
fn test_angle_interval_try_merge_arc_grid() {
    // Every pair of arcs on a 15 degree grid, touching ones included.
    for a_from in (0..360).step_by(15) {
        for a_width in (15..360).step_by(15) {
            for b_from in (0..360).step_by(15) {
                for b_width in (15..360).step_by(15) {
                    let a = interval(a_from as f64, (a_from + a_width) as f64);
                    let b = interval(b_from as f64, (b_from + b_width) as f64);
                    if let Some(merged) = a.try_merge(&b) {
                        for angle in [a.from(), a.to(), b.from(), b.to()].iter() {
                            assert!(merged.inside(*angle), "{} + {} = {}", a, b, merged);
                        }
                    }
                }
            }
        }
    }
}
