//! Document processing.
//!
//! - [`head`]: inject rendered head tags into existing HTML documents

pub mod head;
