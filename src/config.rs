// Affiliate checkout destination. Kept out of the markup so swapping the
// tracking link is a one line change.
#[cfg(debug_assertions)]
pub fn checkout_url() -> &'static str {
    "#offer-box"  // Dev builds stay on the page instead of hitting the affiliate redirect
}

#[cfg(not(debug_assertions))]
pub fn checkout_url() -> &'static str {
    "https://go.disruptybr.com.br/q1yutawwn5"
}

/// Wistia media id of the hero VSL embed.
pub const WISTIA_MEDIA_ID: &str = "gc9ywrd50y";
