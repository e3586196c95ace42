//! Cookie-consent gate. The flag is a plain browser cookie so it survives
//! reloads until it expires; the browser enforces the expiry for us.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const CONSENT_COOKIE: &str = "cookie_consent";
const ACCEPTED_VALUE: &str = "accepted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStatus {
    /// No valid flag found; the banner is shown.
    Pending,
    /// Flag persisted; the banner stays hidden across reloads until expiry.
    Accepted,
    /// Banner closed without accepting. Session only, nothing persisted, so
    /// the banner comes back on the next load.
    Dismissed,
}

impl ConsentStatus {
    pub fn banner_visible(self) -> bool {
        matches!(self, ConsentStatus::Pending)
    }
}

/// Parses a raw `document.cookie` string. Anything short of an explicit
/// accepted flag means we ask again.
pub fn status_from_cookies(cookies: &str) -> ConsentStatus {
    let accepted = cookies.split(';').any(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        parts.next() == Some(CONSENT_COOKIE) && parts.next() == Some(ACCEPTED_VALUE)
    });
    if accepted {
        ConsentStatus::Accepted
    } else {
        ConsentStatus::Pending
    }
}

pub fn acceptance_cookie(expires_utc: &str) -> String {
    format!("{CONSENT_COOKIE}={ACCEPTED_VALUE}; expires={expires_utc}; path=/")
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Read once at page load.
pub fn load_status() -> ConsentStatus {
    match html_document().and_then(|doc| doc.cookie().ok()) {
        Some(cookies) => status_from_cookies(&cookies),
        None => ConsentStatus::Pending,
    }
}

/// Persists the accepted flag with a one year expiry. Fire and forget: a
/// failed write just means the banner asks again on the next visit.
pub fn persist_acceptance() {
    let expiry = js_sys::Date::new_0();
    expiry.set_full_year(expiry.get_full_year() + 1);
    let expires = String::from(expiry.to_utc_string());
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&acceptance_cookie(&expires));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_cookie_means_pending() {
        assert_eq!(status_from_cookies(""), ConsentStatus::Pending);
        assert_eq!(status_from_cookies("theme=dark; session=abc"), ConsentStatus::Pending);
    }

    #[test]
    fn accepted_flag_is_recognized() {
        assert_eq!(
            status_from_cookies("cookie_consent=accepted"),
            ConsentStatus::Accepted
        );
        assert_eq!(
            status_from_cookies("theme=dark; cookie_consent=accepted; session=abc"),
            ConsentStatus::Accepted
        );
    }

    #[test]
    fn other_values_do_not_count_as_acceptance() {
        assert_eq!(
            status_from_cookies("cookie_consent=denied"),
            ConsentStatus::Pending
        );
        // Prefix of the key must not match.
        assert_eq!(
            status_from_cookies("cookie_consent_v2=accepted"),
            ConsentStatus::Pending
        );
    }

    #[test]
    fn acceptance_cookie_carries_expiry_and_path() {
        let cookie = acceptance_cookie("Tue, 25 Aug 2026 00:00:00 GMT");
        assert!(cookie.starts_with("cookie_consent=accepted"));
        assert!(cookie.contains("expires=Tue, 25 Aug 2026 00:00:00 GMT"));
        assert!(cookie.ends_with("path=/"));
    }

    #[test]
    fn only_pending_shows_the_banner() {
        assert!(ConsentStatus::Pending.banner_visible());
        assert!(!ConsentStatus::Accepted.banner_visible());
        assert!(!ConsentStatus::Dismissed.banner_visible());
    }
}
