use super::*;

#[test]
fn loading_state_default_idle() {
    let state = LoadingState::default();
    assert!(!state.is_loading);
    assert!(state.text.is_empty());
}

#[test]
fn start_without_text_uses_default_label() {
    let mut state = LoadingState::default();
    state.start(None);
    assert!(state.is_loading);
    assert_eq!(state.text, DEFAULT_LOADING_TEXT);
}

#[test]
fn start_with_text_overrides_label() {
    let mut state = LoadingState::default();
    state.start(Some("Saving settings..."));
    assert_eq!(state.text, "Saving settings...");
}

#[test]
fn stop_clears_flag_and_label() {
    let mut state = LoadingState::default();
    state.start(Some("Working"));
    state.stop();
    assert_eq!(state, LoadingState::default());
}
