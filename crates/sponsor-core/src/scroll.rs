//! Scroll-driven visual state: navbar, section reveal, back-to-top, parallax.

use crate::constants::{
    BACK_TO_TOP_THRESHOLD_PX, NAVBAR_SCROLLED_THRESHOLD_PX, PARALLAX_BASE_SPEED,
    PARALLAX_SPEED_STEP, REVEAL_VIEWPORT_RATIO,
};
use crate::surface::Surface;

pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const SHOW_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub navbar_threshold: f64,
    pub back_to_top_threshold: f64,
    pub reveal_ratio: f64,
    pub parallax_base: f64,
    pub parallax_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: NAVBAR_SCROLLED_THRESHOLD_PX,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD_PX,
            reveal_ratio: REVEAL_VIEWPORT_RATIO,
            parallax_base: PARALLAX_BASE_SPEED,
            parallax_step: PARALLAX_SPEED_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl ScrollConfig {
    /// Strictly above the threshold.
    #[inline]
    pub fn navbar_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.navbar_threshold
    }

    #[inline]
    pub fn back_to_top_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.back_to_top_threshold
    }

    #[inline]
    pub fn section_revealed(&self, section_top: f64, viewport_height: f64) -> bool {
        section_top < viewport_height * self.reveal_ratio
    }

    #[inline]
    pub fn parallax_speed(&self, index: usize) -> f64 {
        self.parallax_base + index as f64 * self.parallax_step
    }

    /// Vertical offset for the `index`-th hero decoration, or `None` once the
    /// hero has scrolled out (the last applied offset is then left in place).
    pub fn parallax_offset(&self, index: usize, scroll_y: f64, hero_height: f64) -> Option<f64> {
        (scroll_y < hero_height).then(|| scroll_y * self.parallax_speed(index))
    }
}

pub struct Hero<E> {
    pub container: E,
    pub badges: Vec<E>,
}

pub struct ScrollReactor<E> {
    pub config: ScrollConfig,
    pub navbar: Option<E>,
    pub sections: Vec<E>,
    pub back_to_top: Option<E>,
    pub hero: Option<Hero<E>>,
}

impl<E: Surface> ScrollReactor<E> {
    /// Recompute all four effects from one viewport snapshot.
    pub fn apply(&self, viewport: Viewport) {
        self.update_navbar(viewport.scroll_y);
        self.reveal_sections(viewport.height);
        self.update_back_to_top(viewport.scroll_y);
        self.update_parallax(viewport.scroll_y);
    }

    pub fn update_navbar(&self, scroll_y: f64) {
        if let Some(nav) = &self.navbar {
            nav.set_class(SCROLLED_CLASS, self.config.navbar_scrolled(scroll_y));
        }
    }

    /// Reveal is one-way: sections scrolled back below the line stay visible.
    pub fn reveal_sections(&self, viewport_height: f64) {
        for section in &self.sections {
            if section.has_class(VISIBLE_CLASS) {
                continue;
            }
            let top = section.bounding_rect().top;
            if self.config.section_revealed(top, viewport_height) {
                section.add_class(VISIBLE_CLASS);
            }
        }
    }

    pub fn update_back_to_top(&self, scroll_y: f64) {
        if let Some(btn) = &self.back_to_top {
            btn.set_class(SHOW_CLASS, self.config.back_to_top_visible(scroll_y));
        }
    }

    pub fn update_parallax(&self, scroll_y: f64) {
        let Some(hero) = &self.hero else {
            return;
        };
        let hero_height = hero.container.bounding_rect().height;
        for (i, badge) in hero.badges.iter().enumerate() {
            if let Some(dy) = self.config.parallax_offset(i, scroll_y, hero_height) {
                let dy = (dy * 100.0).round() / 100.0; // hundredths of a pixel
                badge.set_style("transform", &format!("translateY({dy}px)"));
            }
        }
    }
}
