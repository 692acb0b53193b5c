pub mod config;
pub mod constants;
pub mod conversion;
pub mod display;
pub mod session;
pub mod travel_time;
pub mod ttim_errors;

pub use display::{ArrivalsDisplay, ArrivalsDisplayExt};
pub use session::{QuerySession, SessionSummary};
pub use travel_time::{Arrival, TravelTimeModel};
pub use ttim_errors::TtimError;
