//! Site-wide constants shared across components.

/// Hosted form service the contact form hands off to. No response is read
/// back; the form opens in a new browsing context.
pub const CONTACT_FORM_URL: &str = "https://forms.gle/mbuk9fu35Hn8gRtMA";

/// Scroll offset below which the fixed header never hides.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Gap kept between the fixed header (or a modal header) and scrolled-to
/// content.
pub const SCROLL_GAP_PX: f64 = 20.0;

/// Settle delay before moving focus into a freshly opened modal.
pub const FOCUS_DELAY_MS: u32 = 100;

/// Delay between closing the FAQ modal and opening the contact modal so the
/// two overlay animations do not collide.
pub const MODAL_SWAP_DELAY_MS: u32 = 300;

/// Delay before closing an application modal whose close trigger is a link
/// that is allowed to navigate.
pub const LINK_CLOSE_DELAY_MS: u32 = 100;

/// Delay before scrolling a freshly opened accordion item below the header.
pub const ACCORDION_SCROLL_DELAY_MS: u32 = 150;

/// Settle delay before scrolling the FAQ modal content to a category.
pub const CATEGORY_SETTLE_DELAY_MS: u32 = 100;

/// How long the category highlight cue stays visible.
pub const CATEGORY_HIGHLIGHT_MS: u32 = 2000;

/// Lifetime of the screen-reader load announcement element.
pub const LOAD_ANNOUNCE_MS: u32 = 1000;
