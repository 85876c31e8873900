//! Page-behavior policy constants.

/// Lead added to the raw scroll offset when deciding which section is
/// current, so a section counts as reached once its top passes just under
/// the fixed header. Deliberately a standalone constant rather than derived
/// from the measured header height; tune the two independently.
pub const SCROLL_LEAD_PX: f64 = 150.0;

/// Used for scroll targets when the header element cannot be measured.
pub const HEADER_FALLBACK_PX: f64 = 74.0;

// Vanta NET effect parameters for the hero background.
pub const VANTA_COLOR: u32 = 0x2563eb;
pub const VANTA_BACKGROUND_COLOR: u32 = 0x0f1d40;
pub const VANTA_POINTS: f64 = 15.0;
pub const VANTA_MAX_DISTANCE: f64 = 25.0;
pub const VANTA_SPACING: f64 = 16.0;
