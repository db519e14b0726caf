//! The addressable page location and its `#fragment`.
//!
//! The fragment is the only channel that shares a session between users: a
//! link of the form `<origin><path>#<id>` opens the lobby pre-joined to `id`.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Read/write access to the current page location.
pub trait Location {
    /// The fragment without its leading `#`, or `None` when empty.
    fn fragment(&self) -> Option<String>;
    fn set_fragment(&mut self, value: &str);
    fn clear_fragment(&mut self);
    /// Origin plus path, without query or fragment.
    fn base_url(&self) -> String;
}

/// Normalize a raw `location.hash` value.
#[must_use]
pub fn parse_fragment(raw: &str) -> Option<String> {
    let value = raw.strip_prefix('#').unwrap_or(raw).trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Shareable URL that opens the lobby for `session_id`.
#[must_use]
pub fn share_link(base_url: &str, session_id: &str) -> String {
    let base = base_url.split('#').next().unwrap_or(base_url);
    format!("{base}#{session_id}")
}

/// In-memory location used by tests and non-browser builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryLocation {
    base_url: String,
    fragment: Option<String>,
}

impl MemoryLocation {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), fragment: None }
    }

    /// Start with `fragment` already present, as when opening a shared link.
    #[must_use]
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = parse_fragment(fragment);
        self
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("http://localhost:3000/cameleon")
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, value: &str) {
        self.fragment = parse_fragment(value);
    }

    fn clear_fragment(&mut self) {
        self.fragment = None;
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
