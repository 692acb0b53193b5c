//! # Constants and type definitions for ttim
//!
//! This module centralizes the **bounds**, **unit conversions** and **type aliases**
//! shared by the travel-time collaborator, the report formatter and the interactive session.
//!
//! ## Overview
//!
//! - Result bounds imposed on the travel-time lookup
//! - Unit conversions used by the minutes/seconds split
//! - Type aliases documenting the physical unit carried by a plain `f64`

// -------------------------------------------------------------------------------------------------
// Bounds
// -------------------------------------------------------------------------------------------------

/// Maximum number of phase arrivals a single lookup may return
pub const MAX_ARRIVALS: usize = 500;

/// Size of one phase-code buffer handed to the tau library (NUL included)
pub const PHASE_CODE_LEN: usize = 10;

/// Display width of a phase code in the fixed-width report
pub const PHASE_CODE_WIDTH: usize = 8;

/// Earth model loaded when nothing else is configured
pub const DEFAULT_MODEL: &str = "iasp91";

/// Extension of the table header file
pub const HEADER_EXTENSION: &str = "hed";

/// Extension of the travel-time table file
pub const TABLE_EXTENSION: &str = "tbl";

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Number of display increments (hundredths) in one second
pub const HUNDREDTHS_PER_SECOND: f64 = 100.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Epicentral distance in degrees
pub type Degree = f64;
/// Source depth in kilometers
pub type Kilometer = f64;
/// Elapsed time in seconds
pub type Second = f64;
