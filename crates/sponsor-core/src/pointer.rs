//! Cosmetic pointer feedback: card tilt and magnetic buttons.
//!
//! Each event fully determines the resulting transform; nothing accumulates.

use crate::constants::{MAGNETIC_FACTOR, TILT_DIVISOR, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use crate::surface::{Rect, Surface};
use glam::Vec2;

/// Cursor offset from the centre of `rect`, in CSS pixels.
#[inline]
pub fn offset_from_center(rect: &Rect, client: Vec2) -> Vec2 {
    let local = client - Vec2::new(rect.left as f32, rect.top as f32);
    let center = Vec2::new(rect.width as f32, rect.height as f32) * 0.5;
    local - center
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    /// Cursor below centre tips the top edge away; right of centre turns left.
    pub fn from_offset(offset: Vec2, divisor: f32) -> Self {
        Self {
            rotate_x_deg: offset.y / divisor,
            rotate_y_deg: -offset.x / divisor,
        }
    }

    pub fn css(&self, lift_px: f32) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            self.rotate_x_deg, self.rotate_y_deg, lift_px
        )
    }
}

pub fn tilt_transform(rect: &Rect, client: Vec2) -> String {
    Tilt::from_offset(offset_from_center(rect, client), TILT_DIVISOR).css(TILT_LIFT_PX)
}

pub fn tilt_neutral() -> String {
    Tilt::NEUTRAL.css(0.0)
}

pub fn magnetic_transform(rect: &Rect, client: Vec2) -> String {
    let pull = offset_from_center(rect, client) * MAGNETIC_FACTOR;
    format!("translate({}px, {}px)", pull.x, pull.y)
}

pub fn magnetic_neutral() -> String {
    "translate(0px, 0px)".to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEffect {
    Tilt,
    Magnetic,
}

impl PointerEffect {
    pub fn on_move<E: Surface>(self, element: &E, client: Vec2) {
        let rect = element.bounding_rect();
        let transform = match self {
            PointerEffect::Tilt => tilt_transform(&rect, client),
            PointerEffect::Magnetic => magnetic_transform(&rect, client),
        };
        element.set_style("transform", &transform);
    }

    pub fn on_leave<E: Surface>(self, element: &E) {
        let neutral = match self {
            PointerEffect::Tilt => tilt_neutral(),
            PointerEffect::Magnetic => magnetic_neutral(),
        };
        element.set_style("transform", &neutral);
    }
}
