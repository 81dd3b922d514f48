//! Appointment lifecycle: the per-session store and the flows that drive it.

pub mod cancel;
pub mod error;
pub mod flow;
pub mod reschedule;
pub mod selection;
pub mod session;
pub mod store;
