//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain snapshot structs wrapped in signals so components
//! can subscribe to small focused models through context.

pub mod session;
