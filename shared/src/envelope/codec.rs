//! Text codec for [`Envelope`]s.
//!
//! The wire format is a JSON object whose `type` field selects the variant:
//!
//! | Variant        | Wire form                                        |
//! |----------------|--------------------------------------------------|
//! | `FilterUpdate` | `{"type":"object","payload":{"filter":"manager"}}` |
//! | `TextUpdate`   | `{"type":"string","text":"hello"}`                 |
//!
//! Decoding happens in two steps. The string is first parsed into a generic
//! JSON value so that the tag can be inspected on its own; only once the tag
//! names a known variant is the remaining body checked against that
//! variant's strict shape. This is what lets an unknown tag be told apart
//! from a broken payload.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{
    envelope::{Envelope, EnvelopeKind},
    error::DecodeError,
};
use crate::role::Filter;

pub const TAG_FIELD: &str = "type";
const PAYLOAD_FIELD: &str = "payload";
const FILTER_FIELD: &str = "filter";
const TEXT_FIELD: &str = "text";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FilterPayload {
    filter: Filter,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FilterBody {
    payload: FilterPayload,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TextBody {
    text: String,
}

/// Serialize an envelope into its transport string
pub fn encode(envelope: &Envelope) -> String {
    let mut object = Map::new();
    object.insert(TAG_FIELD.to_string(), Value::from(envelope.kind().tag()));

    match envelope {
        Envelope::FilterUpdate { filter } => {
            let mut payload = Map::new();
            payload.insert(FILTER_FIELD.to_string(), Value::from(filter.as_str()));
            object.insert(PAYLOAD_FIELD.to_string(), Value::Object(payload));
        }
        Envelope::TextUpdate { text } => {
            object.insert(TEXT_FIELD.to_string(), Value::from(text.as_str()));
        }
    }

    Value::Object(object).to_string()
}

/// Parse a transport string back into an envelope.
///
/// SECURITY: the input comes from another document. Any shape other than
/// exactly one known variant is rejected; nothing here panics.
pub fn decode(transport: &str) -> Result<Envelope, DecodeError> {
    let value: Value = serde_json::from_str(transport).map_err(DecodeError::malformed)?;

    let Value::Object(mut object) = value else {
        return Err(DecodeError::malformed("expected a JSON object"));
    };

    let tag = match object.remove(TAG_FIELD) {
        Some(Value::String(tag)) => tag,
        Some(_) => return Err(DecodeError::malformed("the `type` tag is not a string")),
        None => return Err(DecodeError::malformed("missing `type` tag")),
    };

    let Some(kind) = EnvelopeKind::from_tag(&tag) else {
        return Err(DecodeError::UnknownVariant { tag });
    };

    let body = Value::Object(object);
    match kind {
        EnvelopeKind::FilterUpdate => {
            let FilterBody { payload } =
                serde_json::from_value(body).map_err(DecodeError::malformed)?;
            Ok(Envelope::FilterUpdate {
                filter: payload.filter,
            })
        }
        EnvelopeKind::TextUpdate => {
            let TextBody { text } = serde_json::from_value(body).map_err(DecodeError::malformed)?;
            Ok(Envelope::TextUpdate { text })
        }
    }
}
