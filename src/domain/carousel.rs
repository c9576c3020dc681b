// Circular 3D carousel state and card layout
use serde::Serialize;

const X_SPREAD_PERCENT: f64 = 60.0;
const DEPTH_STEP: f64 = -350.0;
const ROTATION_STEP_DEG: f64 = -35.0;
const INACTIVE_SCALE: f64 = 0.9;
const MIN_OPACITY: f64 = 0.2;
const OPACITY_STEP: f64 = 0.3;
const BLUR_STEP_PX: f64 = 4.0;
const MAX_BLUR_PX: f64 = 12.0;
const INACTIVE_BRIGHTNESS: f64 = 0.8;
const BRIGHTNESS_STEP: f64 = 0.2;
const MIN_BRIGHTNESS: f64 = 0.3;
const BASE_Z_INDEX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

/// Signed shortest distance from `active` to `index` on a ring of `len` items.
///
/// The result lies in `(-len/2, len/2]`. `len` must be non-zero.
pub fn circular_offset(index: usize, active: usize, len: usize) -> isize {
    let len = len as isize;
    let raw = (index as isize - active as isize).rem_euclid(len);
    if raw * 2 > len { raw - len } else { raw }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    len: usize,
}

impl CarouselState {
    /// Returns `None` for an empty carousel.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { active_index: 0, len })
    }

    /// Start at `active`, wrapped into range.
    pub fn with_active(len: usize, active: usize) -> Option<Self> {
        Self::new(len).map(|s| s.at(active))
    }

    /// Same ring positioned at `active`, wrapped into range.
    pub fn at(&self, active: usize) -> Self {
        Self {
            active_index: active % self.len,
            len: self.len,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.active_index = (self.active_index + self.len - 1) % self.len;
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Previous => self.previous(),
        }
    }

    pub fn offset_of(&self, index: usize) -> isize {
        circular_offset(index, self.active_index, self.len)
    }

    /// A click on a side card moves one step toward it, never jumps.
    pub fn click_action(&self, index: usize) -> Option<CarouselAction> {
        match self.offset_of(index) {
            0 => None,
            o if o > 0 => Some(CarouselAction::Next),
            _ => Some(CarouselAction::Previous),
        }
    }

    pub fn click(&mut self, index: usize) -> Option<CarouselAction> {
        let action = self.click_action(index);
        if let Some(action) = action {
            self.apply(action);
        }
        action
    }

    pub fn key_action(key: NavKey) -> Option<CarouselAction> {
        match key {
            NavKey::ArrowLeft => Some(CarouselAction::Previous),
            NavKey::ArrowRight => Some(CarouselAction::Next),
            NavKey::Other => None,
        }
    }

    pub fn handle_key(&mut self, key: NavKey) -> Option<CarouselAction> {
        let action = Self::key_action(key);
        if let Some(action) = action {
            self.apply(action);
        }
        action
    }

    /// Transform for every item, in item order
    pub fn layout(&self) -> Vec<CardTransform> {
        (0..self.len)
            .map(|i| CardTransform::for_offset(self.offset_of(i)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransform {
    pub offset: isize,
    pub active: bool,
    pub x_percent: f64,
    pub z: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
    pub brightness: f64,
    pub z_index: i32,
}

impl CardTransform {
    pub fn for_offset(offset: isize) -> Self {
        let distance = offset.unsigned_abs() as f64;
        let active = offset == 0;

        Self {
            offset,
            active,
            x_percent: offset as f64 * X_SPREAD_PERCENT,
            z: distance * DEPTH_STEP,
            rotate_y_deg: offset as f64 * ROTATION_STEP_DEG,
            scale: if active { 1.0 } else { INACTIVE_SCALE },
            opacity: if active {
                1.0
            } else {
                (1.0 - distance * OPACITY_STEP).max(MIN_OPACITY)
            },
            blur_px: (distance * BLUR_STEP_PX).min(MAX_BLUR_PX),
            brightness: if active {
                1.0
            } else {
                (INACTIVE_BRIGHTNESS - distance * BRIGHTNESS_STEP).max(MIN_BRIGHTNESS)
            },
            z_index: BASE_Z_INDEX - offset.unsigned_abs() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range_and_congruence() {
        for len in 1..=9usize {
            for active in 0..len {
                for index in 0..len {
                    let offset = circular_offset(index, active, len);
                    // (-len/2, len/2] expressed without fractions
                    assert!(offset * 2 > -(len as isize), "len={len} a={active} i={index}");
                    assert!(offset * 2 <= len as isize, "len={len} a={active} i={index}");
                    let diff = index as isize - active as isize - offset;
                    assert_eq!(diff.rem_euclid(len as isize), 0);
                }
            }
        }
    }

    #[test]
    fn test_even_ring_half_distance_is_positive() {
        assert_eq!(circular_offset(3, 0, 6), 3);
        assert_eq!(circular_offset(0, 3, 6), 3);
        assert_eq!(circular_offset(5, 0, 6), -1);
    }

    #[test]
    fn test_next_previous_are_inverses() {
        for len in 1..=7 {
            for k in 0..len {
                let mut state = CarouselState::with_active(len, k).unwrap();
                state.next();
                state.previous();
                assert_eq!(state.active_index(), k);

                state.previous();
                state.next();
                assert_eq!(state.active_index(), k);
            }
        }
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut state = CarouselState::new(6).unwrap();
        state.previous();
        assert_eq!(state.active_index(), 5);
        state.next();
        state.next();
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_click_moves_one_step() {
        let mut state = CarouselState::with_active(6, 2).unwrap();

        assert_eq!(state.click(3), Some(CarouselAction::Next));
        assert_eq!(state.active_index(), 3);

        assert_eq!(state.click(2), Some(CarouselAction::Previous));
        assert_eq!(state.active_index(), 2);

        // two to the right still advances by one only
        assert_eq!(state.click(4), Some(CarouselAction::Next));
        assert_eq!(state.active_index(), 3);

        assert_eq!(state.click(3), None);
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn test_click_across_the_seam() {
        let mut state = CarouselState::new(6).unwrap();
        // index 5 sits immediately left of 0
        state.click(5);
        assert_eq!(state.active_index(), 5);
    }

    #[test]
    fn test_arrow_keys() {
        let mut state = CarouselState::new(3).unwrap();
        state.handle_key(NavKey::from_key("ArrowRight"));
        assert_eq!(state.active_index(), 1);
        state.handle_key(NavKey::from_key("ArrowLeft"));
        state.handle_key(NavKey::from_key("ArrowLeft"));
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.handle_key(NavKey::from_key("Enter")), None);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        assert!(CarouselState::new(0).is_none());
        assert!(CarouselState::with_active(0, 3).is_none());
    }

    #[test]
    fn test_active_card_transform() {
        let t = CardTransform::for_offset(0);
        assert!(t.active);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.blur_px, 0.0);
        assert_eq!(t.brightness, 1.0);
        assert_eq!(t.z_index, 100);
    }

    #[test]
    fn test_side_cards_fade_with_floors() {
        let near = CardTransform::for_offset(-1);
        assert_eq!(near.x_percent, -60.0);
        assert_eq!(near.z, -350.0);
        assert_eq!(near.rotate_y_deg, 35.0);
        assert!((near.opacity - 0.7).abs() < 1e-9);
        assert!((near.brightness - 0.6).abs() < 1e-9);

        let far = CardTransform::for_offset(5);
        assert_eq!(far.opacity, MIN_OPACITY);
        assert_eq!(far.brightness, MIN_BRIGHTNESS);
        assert_eq!(far.blur_px, MAX_BLUR_PX);
        assert_eq!(far.z_index, 95);
    }

    #[test]
    fn test_layout_follows_item_order() {
        let state = CarouselState::with_active(6, 1).unwrap();
        let offsets: Vec<isize> = state.layout().iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![-1, 0, 1, 2, 3, -2]);
    }
}
