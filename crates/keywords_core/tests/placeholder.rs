use keywords_core::{
    derive_placeholder, update, ControlConfig, ControlState, LimitPolicy, Msg, Styling,
    DEFAULT_GUIDANCE_TEXT, DEFAULT_LABEL, LIMIT_REACHED_TEXT,
};

fn confirm(state: ControlState, text: &str) -> ControlState {
    let (state, _) = update(state, Msg::DraftChanged(text.to_string()));
    update(state, Msg::KeyPressed("Enter".to_string())).0
}

#[test]
fn placeholder_switches_when_limit_is_reached() {
    let state = ControlState::new(ControlConfig {
        guidance_text: "Add a tag".to_string(),
        max_tokens: Some(1),
        ..ControlConfig::default()
    });
    assert_eq!(state.placeholder(), "Add a tag");

    let state = confirm(state, "first");
    assert_eq!(state.placeholder(), LIMIT_REACHED_TEXT);
    assert!(state.view().at_limit);

    let (state, _) = update(state, Msg::DeleteToken("first".to_string()));
    assert_eq!(state.placeholder(), "Add a tag");
}

#[test]
fn unbounded_control_never_shows_limit_text() {
    for max in [None, Some(0), Some(-5)] {
        let limit = LimitPolicy::from_config(max);
        assert_eq!(derive_placeholder(1_000, limit, "guide"), "guide");
    }
}

#[test]
fn placeholder_uses_limit_text_when_over_maximum() {
    let limit = LimitPolicy::from_config(Some(2));
    assert_eq!(derive_placeholder(1, limit, "guide"), "guide");
    assert_eq!(derive_placeholder(2, limit, "guide"), LIMIT_REACHED_TEXT);
    assert_eq!(derive_placeholder(3, limit, "guide"), LIMIT_REACHED_TEXT);
}

#[test]
fn view_carries_configuration_through() {
    let styling: Styling = [("primaryColor", "#ff4b4b")].into_iter().collect();
    let state = ControlState::new(ControlConfig {
        initial_tokens: vec!["Python".to_string()],
        max_tokens: Some(5),
        styling: styling.clone(),
        ..ControlConfig::default()
    });

    let view = state.view();
    assert_eq!(view.label, DEFAULT_LABEL);
    assert_eq!(view.placeholder, DEFAULT_GUIDANCE_TEXT);
    assert_eq!(view.tokens, vec!["Python"]);
    assert_eq!(view.max_tokens, Some(5));
    assert_eq!(view.styling, styling);
    assert_eq!(view.styling.get("primaryColor"), Some("#ff4b4b"));
}
