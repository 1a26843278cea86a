//! Global busy indicator with an optional label.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Label shown when a caller starts loading without one.
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// Whether a blocking operation is in flight, and what to say about it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub text: String,
}

impl LoadingState {
    pub fn start(&mut self, text: Option<&str>) {
        self.is_loading = true;
        self.text = text.unwrap_or(DEFAULT_LOADING_TEXT).to_owned();
    }

    pub fn stop(&mut self) {
        self.is_loading = false;
        self.text.clear();
    }
}
