//! Keywords bridge: host notification contract, wire protocol and the
//! component driver that connects an input control to the core.
mod args;
mod bridge;
mod component;
mod error;
mod protocol;

pub use args::RenderArgs;
pub use bridge::{HostBridge, JsonLinesBridge};
pub use component::{InputControl, KeywordsComponent};
pub use error::BridgeError;
pub use protocol::{
    decode_inbound, encode_outbound, DataType, InboundMessage, OutboundMessage, RenderPayload,
    API_VERSION,
};
