// Tuning constants shared by the controllers. Markup binding names live with
// the web frontend; these are the numbers that shape behavior.

// Scroll reactor
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 40.0; // navbar turns solid strictly above this
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.85; // section top must cross 85% of viewport height
pub const SCROLL_COALESCE_DELAY_MS: u32 = 10;
pub const REVEAL_SETTLE_DELAY_MS: u32 = 100; // second pass after stylesheets settle

// Staggered parallax for hero decorations: speed(i) = BASE + i * STEP
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

// Counter animator
pub const COUNTER_DURATION_MS: u64 = 1500;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const FRENCH_GROUP_SEPARATOR: char = '\u{202f}'; // narrow no-break space, as emitted for fr-FR

// Pointer effects
pub const TILT_DIVISOR: f32 = 20.0; // larger = subtler tilt
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_LIFT_PX: f32 = -5.0;
pub const MAGNETIC_FACTOR: f32 = 0.2;

// Disclosure
pub const ACTIVE_CLASS: &str = "active";

// Modal
pub const MODAL_OPEN_CLASS: &str = "open";
