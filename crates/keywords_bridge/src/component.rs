use keywords_core::{update, ControlConfig, ControlState, Effect, KeywordsViewModel, Msg};
use keywords_logging::kw_debug;

use crate::protocol::{decode_inbound, InboundMessage};
use crate::{BridgeError, HostBridge};

/// The rendering widget (chips plus text field) driven by the component.
pub trait InputControl {
    /// Draws `view` and returns the resulting pixel height.
    fn render(&mut self, view: &KeywordsViewModel) -> u32;
}

/// One mounted keywords control: state, host bridge and input control.
///
/// Events are handled one at a time and run to completion.
pub struct KeywordsComponent<B: HostBridge, C: InputControl> {
    state: ControlState,
    bridge: B,
    control: C,
}

impl<B: HostBridge, C: InputControl> KeywordsComponent<B, C> {
    /// Seeds state from `config`, announces readiness, and runs the first render pass.
    pub fn mount(config: ControlConfig, mut bridge: B, control: C) -> Self {
        bridge.announce_ready();
        let mut component = Self {
            state: ControlState::new(config),
            bridge,
            control,
        };
        component.render_if_dirty();
        component
    }

    /// Mounts from a raw `streamlit:render` message.
    pub fn from_render_message(raw: &str, bridge: B, control: C) -> Result<Self, BridgeError> {
        let InboundMessage::Render(payload) = decode_inbound(raw)?;
        if payload.disabled {
            kw_debug!("Host requested a disabled control; rendering anyway");
        }
        let config = payload.args.into_config(payload.theme);
        Ok(Self::mount(config, bridge, control))
    }

    /// Applies one input-control event.
    ///
    /// Returns `true` when the control must skip its default handling of the key.
    pub fn handle(&mut self, msg: Msg) -> bool {
        let suppress = self.dispatch(msg);
        self.render_if_dirty();
        suppress
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut suppress = false;
        for effect in effects {
            match effect {
                Effect::ReportValue(tokens) => self.bridge.report_value(&tokens),
                Effect::ReportRenderedHeight { height } => {
                    self.bridge.report_rendered_height(height)
                }
                Effect::SuppressDefaultKey => suppress = true,
            }
        }
        suppress
    }

    fn render_if_dirty(&mut self) {
        if !self.state.consume_dirty() {
            return;
        }
        let height = self.control.render(&self.state.view());
        self.dispatch(Msg::Rendered { height });
    }
}
