use log::Level;

/// How long the "Message sent" banner stays up before the contact form resets.
pub const FORM_RESET_DELAY_MS: u32 = 5_000;

/// Vertical scroll offset (px) after which the header switches to its raised look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 80.0;

pub const LOGO_FALLBACK: &str = "https://placehold.co/240x80/0f172a/eab308?text=Muchemi+Law";
pub const HERO_FALLBACK: &str = "https://placehold.co/1920x1080/0f172a/eab308?text=Image+Not+Found";
pub const PORTRAIT_FALLBACK: &str = "https://placehold.co/400x400/1e293b/eab308?text=Image+Not+Found";
pub const INSIGHT_FALLBACK: &str = "https://placehold.co/600x400/1e293b/eab308?text=Image+Not+Found";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_resets_after_five_seconds() {
        assert_eq!(FORM_RESET_DELAY_MS, 5_000);
    }
}
