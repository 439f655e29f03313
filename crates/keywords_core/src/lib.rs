//! Keywords core: pure token-list state machine and view-model helpers.
mod config;
mod effect;
mod limit;
mod msg;
mod state;
mod update;
mod view_model;

pub use config::{ControlConfig, Styling, DEFAULT_GUIDANCE_TEXT, DEFAULT_LABEL};
pub use effect::Effect;
pub use limit::LimitPolicy;
pub use msg::{Msg, CONFIRM_KEY};
pub use state::{Admission, ControlState, TokenSet};
pub use update::update;
pub use view_model::{derive_placeholder, KeywordsViewModel, LIMIT_REACHED_TEXT};
