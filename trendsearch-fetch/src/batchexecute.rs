//! Parsing for Google's `batchexecute` envelope.
//!
//! A batchexecute response is the security prefix followed by
//! newline-delimited chunks. Payload-bearing chunks are JSON arrays of at
//! least three elements whose third element is a string containing the
//! actual payload, itself JSON. Interleaved chunk-length lines and bookkeeping
//! frames (`di`, `af.httprm`, ...) are skipped.

use serde_json::Value;
use trendsearch_core::TrendsError;

use crate::prefix::strip_google_prefix;

/// One payload-bearing frame of a batchexecute response.
#[derive(Debug, Clone)]
pub struct BatchexecuteFrame {
    /// The RPC id this frame answers, when present.
    pub rpc_id: Option<String>,
    /// The raw payload string (the frame's third element).
    pub payload_text: String,
    /// The payload parsed as JSON, when it is valid JSON.
    pub payload: Option<Value>,
    /// The whole frame, for callers that need the envelope itself.
    pub raw: Value,
}

/// Extracts the payload-bearing frames from a batchexecute response body.
///
/// Lines that are not JSON arrays, or arrays without a string third element,
/// are ignored. Nothing here fails: an unrecognizable body simply yields no
/// frames, and the caller decides whether that is an error.
pub fn parse_batchexecute(body: &str) -> Vec<BatchexecuteFrame> {
    let mut frames = Vec::new();
    for line in strip_google_prefix(body).lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(line) else {
            continue;
        };
        // Chunks can themselves be arrays of frames or a single frame.
        let Some(items) = value.as_array() else {
            continue;
        };
        if items.first().is_some_and(Value::is_array) {
            for item in items {
                if let Some(frame) = frame_from_value(item) {
                    frames.push(frame);
                }
            }
        } else if let Some(frame) = frame_from_value(&value) {
            frames.push(frame);
        }
    }
    frames
}

fn frame_from_value(value: &Value) -> Option<BatchexecuteFrame> {
    let items = value.as_array()?;
    if items.len() < 3 {
        return None;
    }
    let payload_text = items[2].as_str()?.to_string();
    let rpc_id = items[1]
        .as_str()
        .or_else(|| items[0].as_str())
        .map(str::to_string);
    let payload = serde_json::from_str(&payload_text).ok();
    Some(BatchexecuteFrame {
        rpc_id,
        payload_text,
        payload,
        raw: value.clone(),
    })
}

/// Finds the decoded payload for `rpc_id` in a batchexecute response body.
///
/// Fails with [`TrendsError::UnexpectedResponse`] when no frame matches the
/// id. A matching frame whose embedded payload is not itself valid JSON
/// decodes to the raw payload string.
pub fn extract_batchexecute_payload(
    endpoint: &str,
    body: &str,
    rpc_id: &str,
) -> Result<Value, TrendsError> {
    let frames = parse_batchexecute(body);
    let frame = frames
        .into_iter()
        .find(|frame| frame.rpc_id.as_deref() == Some(rpc_id))
        .ok_or_else(|| {
            TrendsError::unexpected(
                endpoint,
                format!("no batchexecute frame carries rpc id {rpc_id:?}"),
            )
        })?;
    Ok(frame
        .payload
        .unwrap_or_else(|| Value::String(frame.payload_text)))
}
