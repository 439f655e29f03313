use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BridgeError, RenderArgs};

/// Component API version announced in the ready handshake.
pub const API_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Json,
}

/// Messages the component posts to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady { api_version: u32 },
    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue {
        value: Vec<String>,
        data_type: DataType,
    },
    #[serde(rename = "streamlit:setFrameHeight")]
    SetFrameHeight { height: u32 },
}

impl OutboundMessage {
    pub fn value(tokens: &[String]) -> Self {
        Self::SetComponentValue {
            value: tokens.to_vec(),
            data_type: DataType::Json,
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "isStreamlitMessage")]
    is_streamlit_message: bool,
    #[serde(flatten)]
    message: &'a OutboundMessage,
}

/// Messages the host sends to the component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    #[serde(rename = "streamlit:render")]
    Render(RenderPayload),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RenderPayload {
    #[serde(default)]
    pub args: RenderArgs,
    #[serde(default)]
    pub theme: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub disabled: bool,
}

/// Serializes one outbound message as a single JSON object.
pub fn encode_outbound(message: &OutboundMessage) -> Result<String, BridgeError> {
    serde_json::to_string(&Envelope {
        is_streamlit_message: true,
        message,
    })
    .map_err(BridgeError::Encode)
}

pub fn decode_inbound(raw: &str) -> Result<InboundMessage, BridgeError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(BridgeError::Decode)?;
    let kind = value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    if kind != "streamlit:render" {
        return Err(BridgeError::UnexpectedMessage(if kind.is_empty() {
            "<missing type>".to_string()
        } else {
            kind.to_string()
        }));
    }
    serde_json::from_value(value).map_err(BridgeError::Decode)
}
