//! `window.location` adapter carrying the session id in the URL fragment.

#[cfg(test)]
#[path = "browser_location_test.rs"]
mod browser_location_test;

use lobby::location::{Location, parse_fragment};

/// Path the lobby page is served from; used when no browser is present.
pub const LOBBY_PATH: &str = "/cameleon";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn fragment(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let hash = web_sys::window()?.location().hash().ok()?;
            // `location.hash` is percent-encoded; ids typed by users may not be ASCII.
            let decoded = js_sys::decode_uri_component(&hash).map(String::from).unwrap_or(hash);
            parse_fragment(&decoded)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            parse_fragment("")
        }
    }

    fn set_fragment(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let result = web_sys::window()
                .ok_or_else(|| "no window".to_owned())
                .and_then(|window| window.location().set_hash(value).map_err(|e| format!("{e:?}")));
            log_fragment_write(value, result);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn clear_fragment(&mut self) {
        self.set_fragment("");
    }

    fn base_url(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if let (Ok(origin), Ok(path)) = (location.origin(), location.pathname()) {
                    return format!("{origin}{path}");
                }
            }
        }
        LOBBY_PATH.to_owned()
    }
}

/// Report a fragment write the browser refused.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn log_fragment_write(value: &str, result: Result<(), String>) -> bool {
    match result {
        Ok(()) => true,
        Err(reason) => {
            leptos::logging::warn!("could not set location fragment to {value:?}: {reason}");
            false
        }
    }
}
