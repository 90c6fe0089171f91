use glam::Vec2;

/// Pointer position normalized to [-1, 1] on both axes, +Y up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// True when the pointer sits outside the centered dead zone on either axis.
    #[inline]
    pub fn outside_deadzone(self, deadzone: f32) -> bool {
        self.x.abs() > deadzone || self.y.abs() > deadzone
    }
}

/// Map raw viewport pixel coordinates to a [`PointerState`].
///
/// Y is inverted so that the top edge maps to +1. Returns `None` for a
/// degenerate viewport.
#[inline]
pub fn normalize_pointer(raw_x: f64, raw_y: f64, width: f64, height: f64) -> Option<PointerState> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x = (raw_x / width) * 2.0 - 1.0;
    let y = -(raw_y / height) * 2.0 + 1.0;
    (x.is_finite() && y.is_finite()).then_some(PointerState {
        x: x as f32,
        y: y as f32,
    })
}
