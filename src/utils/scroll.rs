//! Window scrolling helpers and scroll-depth bookkeeping.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::utils::dom;

/// Smooth-scrolls the window to an absolute vertical offset.
pub fn scroll_window_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Current fixed-header height, for offsetting scroll targets.
pub fn header_height() -> Option<f64> {
    dom::html_element_by_id("header").map(|h| h.offset_height() as f64)
}

/// Smooth-scrolls an in-page anchor target below the fixed header. Missing
/// targets are ignored.
pub fn scroll_to_anchor(target_id: &str) {
    let Some(target) = dom::element_by_id(target_id) else {
        return;
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    scroll_window_to(target.offset_top() as f64 - header_height().unwrap_or(0.0));
}

pub const SCROLL_DEPTH_STEPS: [u32; 4] = [25, 50, 75, 100];

/// Which analytics thresholds the page scroll has already crossed. Each
/// step reports at most once per page load.
#[derive(Default)]
pub struct ScrollDepthTracker {
    fired: [bool; 4],
}

impl ScrollDepthTracker {
    /// Marks every threshold at or below `percent` and returns the ones
    /// that fired for the first time.
    pub fn crossed(&mut self, percent: u32) -> Vec<u32> {
        let mut newly = Vec::new();
        for (fired, step) in self.fired.iter_mut().zip(SCROLL_DEPTH_STEPS) {
            if percent >= step && !*fired {
                *fired = true;
                newly.push(step);
            }
        }
        newly
    }
}

/// Scroll progress as a rounded percentage of the scrollable height, or
/// `None` when the document does not scroll at all.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Option<u32> {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return None;
    }
    Some(((scroll_top / scrollable) * 100.0).round() as u32)
}

/// Header visibility after one scroll sample: hidden only when scrolling
/// down while past the threshold.
pub fn header_hidden_after_scroll(current: f64, last: f64) -> bool {
    current > config::HEADER_SCROLL_THRESHOLD && current > last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_steps_fire_exactly_once() {
        let mut tracker = ScrollDepthTracker::default();
        assert_eq!(tracker.crossed(10), Vec::<u32>::new());
        assert_eq!(tracker.crossed(30), vec![25]);
        // Re-crossing the same threshold stays quiet.
        assert_eq!(tracker.crossed(30), Vec::<u32>::new());
        // Jumping to the bottom fires the remaining steps together.
        assert_eq!(tracker.crossed(100), vec![50, 75, 100]);
        assert_eq!(tracker.crossed(100), Vec::<u32>::new());
    }

    #[test]
    fn unscrollable_document_reports_nothing() {
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), None);
        assert_eq!(scroll_percent(0.0, 600.0, 800.0), None);
    }

    #[test]
    fn percent_is_relative_to_scrollable_height() {
        assert_eq!(scroll_percent(0.0, 2800.0, 800.0), Some(0));
        assert_eq!(scroll_percent(1000.0, 2800.0, 800.0), Some(50));
        assert_eq!(scroll_percent(2000.0, 2800.0, 800.0), Some(100));
    }

    #[test]
    fn header_hides_only_scrolling_down_past_threshold() {
        // Above the threshold the header always shows.
        assert!(!header_hidden_after_scroll(50.0, 20.0));
        // Scrolling down past the threshold hides it.
        assert!(header_hidden_after_scroll(300.0, 200.0));
        // Scrolling up shows it again.
        assert!(!header_hidden_after_scroll(250.0, 300.0));
        // A repeated sample at the same offset keeps it visible.
        assert!(!header_hidden_after_scroll(300.0, 300.0));
    }
}
