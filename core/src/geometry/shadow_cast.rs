use crate::{error::Result, geometry::AngleInterval};
use log::debug;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

type ShadowKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Set of non-overlapping shadows accumulated during one field of view sweep.
#[derive(Default, Debug, Clone)]
pub struct ShadowCast {
    shadows: BTreeMap<ShadowKey, AngleInterval>,
}

fn key(shadow: &AngleInterval) -> ShadowKey {
    (OrderedFloat(shadow.from()), OrderedFloat(shadow.to()))
}

impl ShadowCast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shadow(&mut self, min_angle: f64, max_angle: f64) -> Result<()> {
        self.insert(AngleInterval::new(min_angle, max_angle)?);
        Ok(())
    }

    pub fn insert(&mut self, shadow: AngleInterval) {
        if self.is_full() {
            return;
        }
        self.shadows.insert(key(&shadow), shadow);
        self.merge_shadows();
    }

    pub fn hide(&self, angle: f64) -> bool {
        self.shadows.values().any(|shadow| shadow.inside(angle))
    }

    pub fn is_full(&self) -> bool {
        self.shadows.values().any(AngleInterval::is_full)
    }

    pub fn len(&self) -> usize {
        self.shadows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty()
    }

    /// Shadows sorted by start angle.
    pub fn iter(&self) -> impl Iterator<Item = &AngleInterval> {
        self.shadows.values()
    }

    fn merge_shadows(&mut self) {
        while let Some((first, second, merged)) = self.find_merge() {
            self.shadows.remove(&first);
            self.shadows.remove(&second);
            if merged.is_full() {
                debug!("Shadows cover the full circle");
                self.shadows.clear();
            }
            self.shadows.insert(key(&merged), merged);
        }
    }

    /// First pair of neighbouring shadows that can be merged, the last shadow being
    /// the neighbour of the first one across 0.
    fn find_merge(&self) -> Option<(ShadowKey, ShadowKey, AngleInterval)> {
        let entries = self.shadows.iter().collect::<Vec<_>>();
        let len = entries.len();
        if len < 2 {
            return None;
        }
        let pairs = if len > 2 { len } else { 1 };
        (0..pairs).find_map(|i| {
            let (first_key, first) = entries[i];
            let (second_key, second) = entries[(i + 1) % len];
            first
                .try_merge(second)
                .map(|merged| (*first_key, *second_key, merged))
        })
    }
}

#[cfg(test)]
fn interval(from: f64, to: f64) -> AngleInterval {
    AngleInterval::new(from, to).unwrap()
}

#[test]
fn test_empty_shadow_cast_hides_nothing() {
    let shadows = ShadowCast::new();
    assert!(shadows.is_empty());
    assert!(!shadows.hide(0.0));
    assert!(!shadows.hide(180.0));
}

#[test]
fn test_shadow_cast_hide() {
    let mut shadows = ShadowCast::new();
    shadows.add_shadow(60.0, 120.0).unwrap();
    assert!(shadows.hide(60.0));
    assert!(shadows.hide(90.0));
    assert!(shadows.hide(120.0));
    assert!(!shadows.hide(30.0));
    assert!(!shadows.hide(150.0));
}

#[test]
fn test_shadow_cast_keeps_disjoint_shadows() {
    let mut shadows = ShadowCast::new();
    shadows.add_shadow(200.0, 220.0).unwrap();
    shadows.add_shadow(10.0, 20.0).unwrap();
    assert_eq!(
        shadows.iter().cloned().collect::<Vec<_>>(),
        vec![interval(10.0, 20.0), interval(200.0, 220.0)]
    );
}

#[test]
fn test_shadow_cast_merges_touching_shadows() {
    let mut shadows = ShadowCast::new();
    shadows.add_shadow(0.0, 60.0).unwrap();
    shadows.add_shadow(120.0, 180.0).unwrap();
    assert_eq!(shadows.len(), 2);
    shadows.add_shadow(60.0, 120.0).unwrap();
    assert_eq!(
        shadows.iter().cloned().collect::<Vec<_>>(),
        vec![interval(0.0, 180.0)]
    );
}

#[test]
fn test_shadow_cast_merges_across_zero() {
    let mut shadows = ShadowCast::new();
    shadows.add_shadow(10.0, 30.0).unwrap();
    shadows.add_shadow(100.0, 120.0).unwrap();
    shadows.add_shadow(340.0, 10.0).unwrap();
    assert_eq!(
        shadows.iter().cloned().collect::<Vec<_>>(),
        vec![interval(100.0, 120.0), interval(340.0, 30.0)]
    );
    assert!(shadows.hide(0.0));
    assert!(shadows.hide(350.0));
    assert!(!shadows.hide(50.0));
}

#[test]
fn test_shadow_cast_same_start() {
    let mut shadows = ShadowCast::new();
    shadows.add_shadow(0.0, 10.0).unwrap();
    shadows.add_shadow(0.0, 40.0).unwrap();
    assert_eq!(
        shadows.iter().cloned().collect::<Vec<_>>(),
        vec![interval(0.0, 40.0)]
    );
}

#[test]
fn test_shadow_cast_full_circle() {
    let mut shadows = ShadowCast::new();
    for i in 0..6 {
        shadows.add_shadow(i as f64 * 60.0, (i + 1) as f64 * 60.0).unwrap();
    }
    assert!(shadows.is_full());
    assert_eq!(shadows.len(), 1);
    assert!(shadows.hide(123.0));
    shadows.add_shadow(10.0, 20.0).unwrap();
    assert_eq!(shadows.len(), 1);
}

#[test]
fn test_shadow_cast_rejects_non_finite() {
    let mut shadows = ShadowCast::new();
    assert!(shadows.add_shadow(std::f64::NAN, 10.0).is_err());
    assert!(shadows.is_empty());
}

#[test]
fn test_shadow_cast_merges_half_circles() {
    let mut shadows = ShadowCast::new();
    shadows.add_shadow(300.0, 120.0).unwrap();
    shadows.add_shadow(120.0, 140.0).unwrap();
    assert_eq!(
        shadows.iter().cloned().collect::<Vec<_>>(),
        vec![interval(300.0, 140.0)]
    );

    let mut shadows = ShadowCast::new();
    shadows.add_shadow(0.0, 180.0).unwrap();
    shadows.add_shadow(300.0, 360.0).unwrap();
    shadows.add_shadow(180.0, 200.0).unwrap();
    assert_eq!(
        shadows.iter().cloned().collect::<Vec<_>>(),
        vec![interval(300.0, 200.0)]
    );
    shadows.add_shadow(200.0, 300.0).unwrap();
    assert!(shadows.is_full());
}
