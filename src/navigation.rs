use log::debug;
use web_sys::window;

use crate::content::Anchor;

/// Jump to an in-page section the same way clicking `<a href="#id">` would.
pub fn jump_to(anchor: Anchor) {
    debug!("jumping to {}", anchor.href());
    if let Some(window) = window() {
        let _ = window.location().set_hash(anchor.id());
    }
}
