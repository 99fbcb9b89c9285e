//! Page chrome switches driven by the `embed` query parameter.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

/// How much decoration to render around the simulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    pub embed: bool,
}

impl Presentation {
    /// Embed mode only for the exact value `true`.
    #[must_use]
    pub fn from_embed_param(value: Option<&str>) -> Self {
        Self { embed: value == Some("true") }
    }

    /// Ambient background, header bar, and hero copy.
    #[must_use]
    pub fn show_chrome(self) -> bool {
        !self.embed
    }

    #[must_use]
    pub fn show_terminal(self) -> bool {
        !self.embed
    }

    #[must_use]
    pub fn page_class(self) -> &'static str {
        if self.embed { "page page-embed" } else { "page" }
    }

    #[must_use]
    pub fn main_class(self) -> &'static str {
        if self.embed { "main main-compact" } else { "main" }
    }
}
