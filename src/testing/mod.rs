//! Test doubles for the transport seam.

mod mock;

pub use mock::{MockReply, MockTransport, RecordedCall};
