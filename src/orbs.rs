// Deterministic placement for the floating orbs drawn over the hero section.
// Each orb gets a position and a gentle sway derived from its index only, so the
// layout is identical on every render without storing anything.

use wasm_bindgen::prelude::*;

pub const DEFAULT_ORB_COUNT: u32 = 8;

// Golden angle in degrees
const GOLDEN_ANGLE: f64 = 137.508;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbPlacement {
    /// Horizontal position, percent of the container width
    pub left_percent: f64,
    /// Vertical position, percent of the container height
    pub top_percent: f64,
    /// Horizontal sway amplitude in pixels, in [-10, 10]
    pub x_offset: i32,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

#[wasm_bindgen(js_name = orbPlacement)]
pub fn orb_placement(index: u32) -> OrbPlacement {
    let seed = index as f64 * GOLDEN_ANGLE;
    let percent = ((seed * 9301.0 + 49297.0) % 233280.0) / 2332.8;
    let index = index as u64;
    OrbPlacement {
        left_percent: percent,
        top_percent: percent,
        x_offset: ((index * 17) % 21) as i32 - 10,
        duration_secs: 4.0 + ((index * 13) % 40) as f64 / 10.0,
        delay_secs: ((index * 7) % 20) as f64 / 10.0,
    }
}

pub fn orb_layout(count: u32) -> Vec<OrbPlacement> {
    (0..count).map(orb_placement).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_orbs_match_known_layout() {
        let expected = [
            (21.1321159122085, -10, 4.0, 0.0),
            (69.38396262002745, 7, 5.3, 0.7),
            (17.63580932784641, 3, 6.6, 1.4),
            (65.88765603566526, -1, 7.9, 0.1),
        ];
        for (i, (percent, x_offset, duration, delay)) in expected.iter().enumerate() {
            let orb = orb_placement(i as u32);
            assert!(close(orb.left_percent, *percent), "orb {} left", i);
            assert!(close(orb.top_percent, *percent), "orb {} top", i);
            assert_eq!(orb.x_offset, *x_offset);
            assert!(close(orb.duration_secs, *duration), "orb {} duration", i);
            assert!(close(orb.delay_secs, *delay), "orb {} delay", i);
        }
    }

    #[test]
    fn layout_stays_in_bounds() {
        let layout = orb_layout(DEFAULT_ORB_COUNT * 100);
        assert_eq!(layout.len(), 800);
        for orb in layout {
            assert!(orb.left_percent >= 0.0 && orb.left_percent < 100.0);
            assert!(orb.x_offset >= -10 && orb.x_offset <= 10);
            assert!(orb.duration_secs >= 4.0 && orb.duration_secs < 8.0);
            assert!(orb.delay_secs >= 0.0 && orb.delay_secs < 2.0);
        }
    }

    #[test]
    fn placement_is_deterministic() {
        assert_eq!(orb_layout(8), orb_layout(8));
    }
}
