//! Test doubles for the transport and auth seams.

mod mock_transport;

pub use mock_transport::{MockAuthManager, MockTransport, RecordedRequest};
