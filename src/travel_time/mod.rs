//! # Travel-time model seam
//!
//! The travel-time tables themselves (reading `<model>.hed`/`<model>.tbl`, selecting
//! branches, interpolating ray parameters) live in an external library. This module
//! defines the **contract** the interactive session relies on, so that the production
//! backend and test doubles are interchangeable.
//!
//! - [`TravelTimeModel`] – branch selection, depth context and lookup.
//! - [`Arrival`] – one phase arriving at the queried distance.
//! - [`clamp_arrivals`] – enforces the result-count bound on a raw backend answer.
//! - [`model_source`] – resolves a model name to its two table files.
//! - [`libtau`] – the production backend bound to the external tau library.
//!
//! ## Call sequence
//!
//! ```text
//! TauTables::load(source)        once per process
//! loop {
//!     select_branches()          every iteration, unconditionally
//!     set_depth(depth_km)
//!     lookup(delta_deg)          -> Vec<Arrival>, at most MAX_ARRIVALS
//! }
//! ```
use tracing::warn;

use crate::constants::{Degree, Kilometer, Second, MAX_ARRIVALS};
use crate::ttim_errors::TtimError;

pub mod libtau;
pub mod model_source;

/// One seismic phase arriving at the queried distance.
///
/// Fields
/// -----------------
/// * `phase` – phase code (e.g. `"P"`, `"PKiKP"`).
/// * `travel_time` – travel time in seconds.
/// * `ray_parameter` – ray parameter (s/deg).
/// * `dtdd` – derivative of the travel time with respect to distance.
/// * `dtdh` – derivative of the travel time with respect to source depth.
/// * `dddp` – derivative of distance with respect to the ray parameter (curvature term).
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub phase: String,
    pub travel_time: Second,
    pub ray_parameter: f64,
    pub dtdd: f64,
    pub dtdh: f64,
    pub dddp: f64,
}

/// Contract of a loaded travel-time model.
///
/// Implementors own their table state; the session holds the model exclusively
/// and drives it with `select_branches → set_depth → lookup` on every query.
pub trait TravelTimeModel {
    /// Recompute which phase branches are queryable for the current depth context.
    fn select_branches(&mut self);

    /// Establish the source depth (km) used by subsequent lookups.
    fn set_depth(&mut self, depth: Kilometer);

    /// Return every phase arriving at `delta` degrees for the depth last set.
    ///
    /// The returned vector never holds more than [`MAX_ARRIVALS`] entries when the
    /// implementor goes through [`clamp_arrivals`].
    fn lookup(&mut self, delta: Degree) -> Result<Vec<Arrival>, TtimError>;
}

impl<M: TravelTimeModel + ?Sized> TravelTimeModel for Box<M> {
    fn select_branches(&mut self) {
        (**self).select_branches()
    }

    fn set_depth(&mut self, depth: Kilometer) {
        (**self).set_depth(depth)
    }

    fn lookup(&mut self, delta: Degree) -> Result<Vec<Arrival>, TtimError> {
        (**self).lookup(delta)
    }
}

/// Turn a raw backend result count into the number of meaningful entries.
///
/// A non-positive count means no phase arrives. A count above [`MAX_ARRIVALS`]
/// violates the backend contract: it is logged and truncated to the bound.
/// The count is also capped by `available`, the number of slots actually filled.
///
/// Arguments
/// -----------------
/// * `raw_count` – count reported by the backend.
/// * `available` – length of the shortest result buffer.
///
/// Return
/// ----------
/// * The number of rows that may be read, in `0..=MAX_ARRIVALS.min(available)`.
pub fn clamp_arrivals(raw_count: i64, available: usize) -> usize {
    if raw_count <= 0 {
        return 0;
    }

    let bound = MAX_ARRIVALS.min(available);
    let count = usize::try_from(raw_count).unwrap_or(usize::MAX);
    if count > bound {
        warn!(
            raw_count,
            bound, "travel-time lookup exceeded its result bound, truncating"
        );
        return bound;
    }
    count
}
