//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod envelope;

pub use envelope::{decode_envelope, normalize_error_body};

#[cfg(test)]
pub use envelope::TransportError;
