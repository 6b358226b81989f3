// Parsing of LLM replies into raw items.

use openai_client::{strip_code_blocks, truncate_to_char_boundary};
use serde_json::Value;

use crate::domains::recommendations::models::{RawUpstreamItem, UpstreamError};

/// Accepts a bare JSON array, or an object with a `recommendations` (or
/// `results`) array, optionally wrapped in a markdown code fence.
pub fn parse_llm_reply(reply: &str) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
    let body = strip_code_blocks(reply);

    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(
            error = %e,
            reply_preview = %truncate_to_char_boundary(body, 200),
            "Could not parse LLM reply as JSON"
        );
        UpstreamError::Parse(e.to_string())
    })?;

    let items = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("recommendations").or_else(|| map.get("results")) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(UpstreamError::Parse(
                    "reply object has no recommendations array".to_string(),
                ))
            }
        },
        _ => {
            return Err(UpstreamError::Parse(
                "reply is neither an array nor an object".to_string(),
            ))
        }
    };

    Ok(items.iter().map(RawUpstreamItem::from_json).collect())
}
