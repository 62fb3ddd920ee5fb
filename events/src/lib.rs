//! Shared event model and protobuf codec for the realtime room transport.
//!
//! This crate owns the wire representation used by both the browser `client`
//! and the headless `cli`. Unlike a free-form payload protocol, the room wire
//! carries exactly four event shapes: one chat message and three stroke
//! lifecycle events, so payloads are typed end to end.

use prost::Message;
use serde::{Deserialize, Serialize};

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw bytes could not be decoded as a protobuf `WireEvent`.
    #[error("failed to decode protobuf event: {0}")]
    Decode(#[from] prost::DecodeError),
    /// The `kind` integer on the wire does not map to a known payload kind.
    #[error("invalid event kind: {0}")]
    InvalidKind(i32),
    /// A field required by the event kind was absent on the wire.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// A single message on the realtime room wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Client-generated identifier (UUID string). A sender deduplicates the
    /// broadcast echo of its own event against this id.
    pub id: String,
    /// Milliseconds since the Unix epoch when the event was created.
    pub ts: i64,
    /// Room this event belongs to.
    pub room_id: String,
    /// Sender display name, when the event kind carries one.
    pub from: Option<String>,
    /// Typed event payload.
    pub payload: Payload,
}

/// Typed payload of an [`Event`].
///
/// Stroke events carry a client-generated `stroke_id` so interleaved strokes
/// from multiple users on one canvas stay distinguishable at the receiver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Payload {
    /// One chat message. The same shape travels in both directions; the
    /// server broadcasts it back to every room member, sender included.
    Chat {
        message: String,
    },
    /// A pointer-down opened a new stroke at the given canvas coordinates.
    DrawingStart {
        stroke_id: String,
        x: f64,
        y: f64,
    },
    /// The pointer moved while the stroke is held open.
    Drawing {
        stroke_id: String,
        x: f64,
        y: f64,
    },
    /// The pointer was released; the stroke is complete.
    DrawingEnd {
        stroke_id: String,
    },
}

impl Payload {
    /// Stable name of this payload kind, matching its JSON `kind` tag.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Chat { .. } => "chat",
            Self::DrawingStart { .. } => "drawing-start",
            Self::Drawing { .. } => "drawing",
            Self::DrawingEnd { .. } => "drawing-end",
        }
    }

    fn wire_kind(&self) -> i32 {
        match self {
            Self::Chat { .. } => WireEventKind::Chat as i32,
            Self::DrawingStart { .. } => WireEventKind::DrawingStart as i32,
            Self::Drawing { .. } => WireEventKind::Drawing as i32,
            Self::DrawingEnd { .. } => WireEventKind::DrawingEnd as i32,
        }
    }
}

/// Encode an event into protobuf bytes.
///
/// # Panics
///
/// Never panics in practice; writing to `Vec<u8>` is infallible.
#[must_use]
pub fn encode_event(event: &Event) -> Vec<u8> {
    let wire = event_to_wire(event);

    let mut out = Vec::with_capacity(wire.encoded_len());
    // Encoding into a Vec<u8> is infallible; the only error prost returns
    // here is `BufferTooSmall`, which cannot occur with a growable Vec.
    wire.encode(&mut out).unwrap_or_default();
    out
}

/// Decode protobuf bytes into an event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes,
/// [`CodecError::InvalidKind`] for out-of-range kind values, and
/// [`CodecError::MissingField`] when a field the kind requires is absent.
pub fn decode_event(bytes: &[u8]) -> Result<Event, CodecError> {
    let wire = WireEvent::decode(bytes)?;
    wire_to_event(wire)
}

fn event_to_wire(event: &Event) -> WireEvent {
    let (stroke_id, x, y, message) = match &event.payload {
        Payload::Chat { message } => (None, None, None, Some(message.clone())),
        Payload::DrawingStart { stroke_id, x, y } | Payload::Drawing { stroke_id, x, y } => {
            (Some(stroke_id.clone()), Some(*x), Some(*y), None)
        }
        Payload::DrawingEnd { stroke_id } => (Some(stroke_id.clone()), None, None, None),
    };

    WireEvent {
        id: event.id.clone(),
        ts: event.ts,
        room_id: event.room_id.clone(),
        from: event.from.clone(),
        kind: event.payload.wire_kind(),
        stroke_id,
        x,
        y,
        message,
    }
}

fn wire_to_event(wire: WireEvent) -> Result<Event, CodecError> {
    let kind =
        WireEventKind::try_from(wire.kind).map_err(|_| CodecError::InvalidKind(wire.kind))?;

    let payload = match kind {
        WireEventKind::Chat => Payload::Chat {
            message: wire.message.ok_or(CodecError::MissingField("message"))?,
        },
        WireEventKind::DrawingStart => Payload::DrawingStart {
            stroke_id: wire.stroke_id.ok_or(CodecError::MissingField("stroke_id"))?,
            x: wire.x.ok_or(CodecError::MissingField("x"))?,
            y: wire.y.ok_or(CodecError::MissingField("y"))?,
        },
        WireEventKind::Drawing => Payload::Drawing {
            stroke_id: wire.stroke_id.ok_or(CodecError::MissingField("stroke_id"))?,
            x: wire.x.ok_or(CodecError::MissingField("x"))?,
            y: wire.y.ok_or(CodecError::MissingField("y"))?,
        },
        WireEventKind::DrawingEnd => Payload::DrawingEnd {
            stroke_id: wire.stroke_id.ok_or(CodecError::MissingField("stroke_id"))?,
        },
    };

    Ok(Event {
        id: wire.id,
        ts: wire.ts,
        room_id: wire.room_id,
        from: wire.from,
        payload,
    })
}

#[derive(Clone, PartialEq, Message)]
struct WireEvent {
    #[prost(string, tag = "1")]
    id: String,
    #[prost(int64, tag = "2")]
    ts: i64,
    #[prost(string, tag = "3")]
    room_id: String,
    #[prost(string, optional, tag = "4")]
    from: Option<String>,
    #[prost(enumeration = "WireEventKind", tag = "5")]
    kind: i32,
    #[prost(string, optional, tag = "6")]
    stroke_id: Option<String>,
    #[prost(double, optional, tag = "7")]
    x: Option<f64>,
    #[prost(double, optional, tag = "8")]
    y: Option<f64>,
    #[prost(string, optional, tag = "9")]
    message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, prost::Enumeration)]
#[repr(i32)]
enum WireEventKind {
    Chat = 0,
    DrawingStart = 1,
    Drawing = 2,
    DrawingEnd = 3,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
