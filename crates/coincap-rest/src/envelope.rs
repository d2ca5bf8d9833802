//! The `{data, timestamp}` response envelope
//!
//! Every CoinCap response wraps its payload in the same envelope: the
//! endpoint-specific value under `data`, and the capture time as epoch
//! milliseconds under `timestamp`. [`decode`] validates the envelope and
//! hands back the payload still unparsed, so each endpoint deserializes it
//! into its own shape in a second pass.

use coincap_types::Timestamp;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::RestError;

/// The envelope with both fields left as raw JSON.
///
/// Both keys are optional at this stage so absence can be reported as its
/// own error rather than a generic parse failure.
#[derive(Debug, Deserialize)]
struct RawEnvelope<'a> {
    #[serde(default, borrow)]
    data: Option<&'a RawValue>,
    #[serde(default, borrow)]
    timestamp: Option<&'a RawValue>,
}

/// Validate one complete response and unwrap its envelope.
///
/// Pure function of the status code and body bytes. On success returns the
/// still-unparsed payload and the decoded capture time; each failure mode
/// maps to a distinct [`RestError`] so callers can tell a missing payload
/// from a missing timestamp.
pub(crate) fn decode(status: u16, body: &[u8]) -> Result<(&RawValue, Timestamp), RestError> {
    // A non-200 status wins over whatever the body contains.
    if status != 200 {
        return Err(RestError::Remote {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let text = std::str::from_utf8(body)
        .map_err(|e| RestError::MalformedResponse(e.to_string()))?;
    let envelope: RawEnvelope<'_> = serde_json::from_str(text)
        .map_err(|e| RestError::MalformedResponse(e.to_string()))?;

    let payload = match envelope.data {
        Some(raw) if raw.get() != "null" => raw,
        _ => return Err(RestError::MissingPayload),
    };

    let raw_timestamp = envelope.timestamp.ok_or(RestError::MissingTimestamp)?;
    let millis: i64 = raw_timestamp
        .get()
        .parse()
        .map_err(|_| RestError::InvalidTimestamp(raw_timestamp.get().to_string()))?;
    let captured_at = Timestamp::from_unix_millis(millis)
        .ok_or_else(|| RestError::InvalidTimestamp(raw_timestamp.get().to_string()))?;

    Ok((payload, captured_at))
}
