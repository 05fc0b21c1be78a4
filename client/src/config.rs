//! Build-time client configuration.

/// Form endpoint receiving contact messages. Override at build time with
/// `PORTFOLIO_CONTACT_ACTION`.
pub const CONTACT_ACTION: &str = match option_env!("PORTFOLIO_CONTACT_ACTION") {
    Some(url) => url,
    None => "https://formspree.io/f/YOUR_FORM_ID",
};
