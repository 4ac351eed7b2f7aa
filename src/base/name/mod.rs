//! Domain names.
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. In their wire-format representation labels are prefixed
//! with an octet containing the number of octets in the label. The last
//! label of a name in a message is always the empty *root label,* i.e., a
//! single zero octet.
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored elsewhere in the message. Such *compressed* names
//! are only decoded if asked for via [`Compression::Resolve`]. Otherwise
//! they are rejected like the other, reserved kinds of labels.
//!
//! Decoded names are plain strings with the labels joined by dots in their
//! presentation format, e.g., `_http._tcp.local`. The root label does not
//! produce a trailing dot.

pub use self::label::LabelType;
pub use self::parsed::{parse_name, Compression};

mod label;
mod parsed;
