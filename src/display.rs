//! # Tabular display for travel-time query results
//!
//! Zero-copy renderers printing the phases returned by one travel-time lookup as a
//! **report**: a header line echoing the query, followed by one row per arrival.
//!
//! ## Overview
//!
//! The entry point is the display adaptor [`ArrivalsDisplay`]. It **borrows** the
//! arrivals and renders the report when used with Rust formatting (`{}`), without
//! cloning or moving data.
//!
//! Two layouts are available:
//!
//! - **Default** (fixed-width, reproducible):
//!   `%4d %-8s %16.6e%9.2f%5d%7.2f%11.2e%11.2e%11.2e` in C `printf` notation, i.e.
//!   `# | phase | p | T [s] | min | sec | dT/dΔ | dT/dh | d²T/dΔ²`
//! - **Wide** (labeled columns, uses `comfy-table`)
//!
//! Both layouts start with `delta = %6.2f  depth = %6.2f  n = %d`.
//!
//! ## Units & Conventions
//!
//! - **Travel time** is printed twice: raw seconds, then split into whole minutes and
//!   seconds rounded to the hundredth with carry (see [`crate::conversion::minutes_seconds`]).
//! - **Scientific columns** follow the C exponent form `1.23e-03`
//!   (see [`crate::conversion::fmt_sci`]).
//!
//! ## Quick examples
//!
//! ```rust
//! use ttim::display::ArrivalsDisplayExt;
//! use ttim::travel_time::Arrival;
//!
//! let arrivals = vec![Arrival {
//!     phase: "P".into(),
//!     travel_time: 725.999,
//!     ray_parameter: 6.856,
//!     dtdd: 6.856,
//!     dtdh: -0.1234,
//!     dddp: -0.00123,
//! }];
//!
//! let report = arrivals.report(0.0, 45.0).to_string();
//! assert!(report.starts_with("delta =  45.00  depth =   0.00  n = 1\n"));
//! ```
//!
//! [`comfy-table`]: https://crates.io/crates/comfy-table
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::constants::{Degree, Kilometer, PHASE_CODE_WIDTH};
use crate::conversion::{fmt_sci, minutes_seconds};
use crate::travel_time::Arrival;

/// Internal layout selector for the report renderer.
enum TableMode {
    Default, // fixed-width rows
    Wide,    // comfy-table with labeled columns
}

/// Display adaptor to render the arrivals of one query as a **report**.
///
/// Render modes
/// -----------------
/// * **Default** (via [`ArrivalsDisplayExt::report`]): fixed-width rows.
/// * **Wide** (via [`ArrivalsDisplayExt::report_wide`]): labeled `comfy-table` columns.
///
/// See also
/// ------------
/// * [`format_row`] – the fixed-width row used by the default layout.
pub struct ArrivalsDisplay<'a> {
    /// Borrowed arrivals to render. No allocation or copying occurs.
    arrivals: &'a [Arrival],
    /// Source depth of the query (km).
    depth: Kilometer,
    /// Epicentral distance of the query (deg).
    delta: Degree,
    mode: TableMode,
}

impl<'a> ArrivalsDisplay<'a> {
    /// Build a new report adaptor (default: **fixed-width** rows).
    ///
    /// Arguments
    /// -----------------
    /// * `arrivals` – phases returned by the lookup, in model order.
    /// * `depth` – source depth of the query (km).
    /// * `delta` – epicentral distance of the query (deg).
    pub fn new(arrivals: &'a [Arrival], depth: Kilometer, delta: Degree) -> Self {
        Self {
            arrivals,
            depth,
            delta,
            mode: TableMode::Default,
        }
    }

    /// Switch to **wide** mode; `false` resets to the fixed-width layout.
    pub fn wide(mut self, yes: bool) -> Self {
        self.mode = if yes {
            TableMode::Wide
        } else {
            TableMode::Default
        };
        self
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "delta = {:6.2}  depth = {:6.2}  n = {}",
            self.delta,
            self.depth,
            self.arrivals.len()
        )
    }

    /// Render the WIDE table using comfy-table.
    fn render_wide_comfy(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("#"),
            Cell::new("Phase"),
            Cell::new("p [s/deg]"),
            Cell::new("T [s]"),
            Cell::new("min"),
            Cell::new("sec"),
            Cell::new("dT/dΔ"),
            Cell::new("dT/dh"),
            Cell::new("d²T/dΔ²"),
        ]);

        for (i, a) in self.arrivals.iter().enumerate() {
            let (minutes, seconds) = minutes_seconds(a.travel_time);

            table.add_row(Row::from(vec![
                Cell::new(i).set_alignment(CellAlignment::Right),
                Cell::new(&a.phase),
                Cell::new(fmt_sci(a.ray_parameter, 0, 6)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", a.travel_time)).set_alignment(CellAlignment::Right),
                Cell::new(minutes).set_alignment(CellAlignment::Right),
                Cell::new(format!("{seconds:.2}")).set_alignment(CellAlignment::Right),
                Cell::new(fmt_sci(a.dtdd, 0, 2)).set_alignment(CellAlignment::Right),
                Cell::new(fmt_sci(a.dtdh, 0, 2)).set_alignment(CellAlignment::Right),
                Cell::new(fmt_sci(a.dddp, 0, 2)).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}

impl fmt::Display for ArrivalsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        match self.mode {
            TableMode::Default => {
                for (i, a) in self.arrivals.iter().enumerate() {
                    writeln!(f, "{}", format_row(i, a))?;
                }
                Ok(())
            }
            TableMode::Wide => {
                if self.arrivals.is_empty() {
                    return Ok(());
                }
                writeln!(f, "{}", self.render_wide_comfy())
            }
        }
    }
}

/// Format one arrival as a fixed-width report row.
///
/// Columns: index (4), phase code (left-aligned, 8), ray parameter (`%16.6e`),
/// travel time (`%9.2f`), minutes (`%5d`), seconds (`%7.2f`), then `dT/dΔ`, `dT/dh`
/// and `d²T/dΔ²` (`%11.2e` each).
///
/// Arguments
/// -----------------
/// * `index` – position of the arrival in the lookup result.
/// * `arrival` – the arrival to render.
///
/// Return
/// ----------
/// * The row, without trailing newline.
pub fn format_row(index: usize, arrival: &Arrival) -> String {
    let (minutes, seconds) = minutes_seconds(arrival.travel_time);
    format!(
        "{index:4} {phase:<width$} {p}{tt:9.2}{minutes:5}{seconds:7.2}{dtdd}{dtdh}{dddp}",
        phase = arrival.phase,
        width = PHASE_CODE_WIDTH,
        p = fmt_sci(arrival.ray_parameter, 16, 6),
        tt = arrival.travel_time,
        dtdd = fmt_sci(arrival.dtdd, 11, 2),
        dtdh = fmt_sci(arrival.dtdh, 11, 2),
        dddp = fmt_sci(arrival.dddp, 11, 2),
    )
}

/// Ergonomic builders for [`ArrivalsDisplay`].
pub trait ArrivalsDisplayExt {
    /// Fixed-width report of the arrivals for the query `(depth, delta)`.
    fn report(&self, depth: Kilometer, delta: Degree) -> ArrivalsDisplay<'_>;

    /// Labeled-column report of the arrivals for the query `(depth, delta)`.
    fn report_wide(&self, depth: Kilometer, delta: Degree) -> ArrivalsDisplay<'_> {
        self.report(depth, delta).wide(true)
    }
}

impl ArrivalsDisplayExt for [Arrival] {
    fn report(&self, depth: Kilometer, delta: Degree) -> ArrivalsDisplay<'_> {
        ArrivalsDisplay::new(self, depth, delta)
    }
}

#[cfg(test)]
mod display_test {
    use super::*;

    fn p_arrival() -> Arrival {
        Arrival {
            phase: "P".into(),
            travel_time: 725.999,
            ray_parameter: 6.856,
            dtdd: -0.00123,
            dtdh: -0.1234,
            dddp: 8.6,
        }
    }

    #[test]
    fn test_format_row() {
        assert_eq!(
            format_row(0, &p_arrival()),
            "   0 P            6.856000e+00   726.00   12   6.00  -1.23e-03  -1.23e-01   8.60e+00"
        );
    }

    #[test]
    fn test_format_row_carry() {
        let arrival = Arrival {
            phase: "PKiKP".into(),
            travel_time: 599.996,
            ..p_arrival()
        };
        let row = format_row(12, &arrival);
        assert!(row.starts_with("  12 PKiKP   "));
        assert_eq!(&row[30..51], "   600.00   10   0.00");
    }

    #[test]
    fn test_report_header_and_rows() {
        let arrivals = vec![p_arrival(), p_arrival()];
        let report = arrivals.report(0.0, 45.0).to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "delta =  45.00  depth =   0.00  n = 2");
        assert!(lines[2].starts_with("   1 P "));
    }

    #[test]
    fn test_report_empty() {
        let arrivals: Vec<Arrival> = Vec::new();
        assert_eq!(
            arrivals.report(600.0, 170.5).to_string(),
            "delta = 170.50  depth = 600.00  n = 0\n"
        );
        assert_eq!(
            arrivals.report_wide(600.0, 170.5).to_string(),
            "delta = 170.50  depth = 600.00  n = 0\n"
        );
    }

    #[test]
    fn test_report_wide() {
        let arrivals = vec![p_arrival()];
        let report = arrivals.report_wide(10.0, 45.0).to_string();

        assert!(report.starts_with("delta =  45.00  depth =  10.00  n = 1\n"));
        assert!(report.contains("Phase"));
        assert!(report.contains("6.856000e+00"));
        assert!(report.contains("726.00"));
    }
}
