//! In-memory fakes for the ports plus a harness that wires them together.

mod fakes;
mod harness;

pub use fakes::zip_bytes;
pub use harness::TestHarness;
