//! Production backend: the external **tau** travel-time library.
//!
//! The tau library reads `<model>.hed` and `<model>.tbl`, keeps the decoded tables in
//! library-global state and answers queries through four C entry points:
//!
//! | entry point                               | role                                  |
//! |-------------------------------------------|---------------------------------------|
//! | `int tabin(char *modnam)`                 | open and decode the model tables      |
//! | `void brnset(void)`                       | select the active phase branches      |
//! | `void depset(float zs)`                   | set the source depth (km)             |
//! | `void trtm(float delta, int *n, ...)`     | travel times and derivatives at delta |
//!
//! The binding is compiled only with the `libtau` cargo feature; link it with
//! `RUSTFLAGS="-L <dir containing libtau>" cargo build --features libtau`.
//! Without the feature, [`open_model`] still validates the table files and then reports
//! [`TtimError::BackendUnavailable`].
//!
//! Because the library state is global, [`TauTables`] enforces a single live handle per
//! process and owns every buffer `trtm` writes into.
use tracing::debug;

use crate::travel_time::model_source::ModelSource;
use crate::travel_time::TravelTimeModel;
use crate::ttim_errors::TtimError;

#[cfg(feature = "libtau")]
pub use tau_tables::TauTables;

/// Open the tables of `source` with the compiled-in backend.
///
/// Arguments
/// -----------------
/// * `source`: model name and table directory.
///
/// Return
/// ----------
/// * A boxed [`TravelTimeModel`] ready for queries, or
///   [`TtimError::TableFileNotFound`] if a table file is missing,
///   [`TtimError::ModelLoad`] if the library rejects the tables,
///   [`TtimError::BackendUnavailable`] when built without the `libtau` feature.
pub fn open_model(source: &ModelSource) -> Result<Box<dyn TravelTimeModel>, TtimError> {
    source.check_files()?;
    debug!(model = source.name(), dir = %source.table_dir(), "table files found");

    #[cfg(feature = "libtau")]
    {
        Ok(Box::new(TauTables::load(source)?))
    }

    #[cfg(not(feature = "libtau"))]
    {
        Err(TtimError::BackendUnavailable(source.name().to_string()))
    }
}

#[cfg(feature = "libtau")]
mod ffi {
    use std::os::raw::{c_char, c_float, c_int};

    #[link(name = "tau")]
    extern "C" {
        pub fn tabin(modnam: *const c_char) -> c_int;
        pub fn brnset();
        pub fn depset(zs: c_float);
        pub fn trtm(
            delta: c_float,
            n: *mut c_int,
            tt: *mut c_float,
            p: *mut c_float,
            dtdd: *mut c_float,
            dtdh: *mut c_float,
            dddp: *mut c_float,
            phcd: *mut *mut c_char,
        );
    }
}

#[cfg(feature = "libtau")]
mod tau_tables {
    use std::ffi::CString;
    use std::os::raw::{c_char, c_float, c_int};
    use std::sync::atomic::{AtomicBool, Ordering};

    use tracing::{debug, trace};

    use super::ffi;
    use crate::constants::{Degree, Kilometer, MAX_ARRIVALS, PHASE_CODE_LEN};
    use crate::travel_time::model_source::ModelSource;
    use crate::travel_time::{clamp_arrivals, Arrival, TravelTimeModel};
    use crate::ttim_errors::TtimError;

    /// Set while a [`TauTables`] handle is alive: the library tables are process-global.
    static TABLES_LOADED: AtomicBool = AtomicBool::new(false);

    type PhaseCode = [c_char; PHASE_CODE_LEN];

    /// Output slots of one `trtm` call, sized to the result bound.
    struct LookupBuffers {
        tt: Vec<c_float>,
        p: Vec<c_float>,
        dtdd: Vec<c_float>,
        dtdh: Vec<c_float>,
        dddp: Vec<c_float>,
        phcd: Vec<PhaseCode>,
    }

    impl LookupBuffers {
        fn new() -> Self {
            LookupBuffers {
                tt: vec![0.0; MAX_ARRIVALS],
                p: vec![0.0; MAX_ARRIVALS],
                dtdd: vec![0.0; MAX_ARRIVALS],
                dtdh: vec![0.0; MAX_ARRIVALS],
                dddp: vec![0.0; MAX_ARRIVALS],
                phcd: vec![[0; PHASE_CODE_LEN]; MAX_ARRIVALS],
            }
        }
    }

    /// Handle on the tables loaded inside the tau library.
    pub struct TauTables {
        source: ModelSource,
        buffers: LookupBuffers,
    }

    impl TauTables {
        /// Load the model tables through `tabin`.
        ///
        /// Return
        /// ----------
        /// * The handle, [`TtimError::ModelAlreadyLoaded`] if another handle is alive,
        ///   or [`TtimError::ModelLoad`] carrying the library status.
        pub fn load(source: &ModelSource) -> Result<Self, TtimError> {
            let prefix = CString::new(source.prefix().as_str())
                .map_err(|_| TtimError::InvalidModelName(source.prefix().to_string()))?;

            if TABLES_LOADED.swap(true, Ordering::SeqCst) {
                return Err(TtimError::ModelAlreadyLoaded);
            }

            // SAFETY: `prefix` is a valid NUL-terminated string for the duration of the call.
            let status = unsafe { ffi::tabin(prefix.as_ptr()) };
            if status != 0 {
                TABLES_LOADED.store(false, Ordering::SeqCst);
                return Err(TtimError::ModelLoad {
                    name: source.name().to_string(),
                    status,
                });
            }

            debug!(model = source.name(), "tau tables loaded");
            Ok(TauTables {
                source: source.clone(),
                buffers: LookupBuffers::new(),
            })
        }
    }

    impl Drop for TauTables {
        fn drop(&mut self) {
            TABLES_LOADED.store(false, Ordering::SeqCst);
            debug!(model = self.source.name(), "tau tables released");
        }
    }

    fn phase_code(raw: &PhaseCode) -> String {
        let bytes: Vec<u8> = raw
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        String::from_utf8_lossy(&bytes).trim_end().to_string()
    }

    impl TravelTimeModel for TauTables {
        fn select_branches(&mut self) {
            // SAFETY: the tables were loaded by `tabin` and stay loaded while `self` lives.
            unsafe { ffi::brnset() };
        }

        fn set_depth(&mut self, depth: Kilometer) {
            trace!(depth, "depset");
            // SAFETY: as above; `depset` only reads its scalar argument.
            unsafe { ffi::depset(depth as c_float) };
        }

        fn lookup(&mut self, delta: Degree) -> Result<Vec<Arrival>, TtimError> {
            let b = &mut self.buffers;
            b.phcd.iter_mut().for_each(|code| *code = [0; PHASE_CODE_LEN]);

            let mut phase_ptrs: Vec<*mut c_char> =
                b.phcd.iter_mut().map(|code| code.as_mut_ptr()).collect();
            let mut n: c_int = 0;

            // SAFETY: every output buffer holds MAX_ARRIVALS slots, the library bound, and
            // each phase pointer addresses PHASE_CODE_LEN writable bytes.
            unsafe {
                ffi::trtm(
                    delta as c_float,
                    &mut n,
                    b.tt.as_mut_ptr(),
                    b.p.as_mut_ptr(),
                    b.dtdd.as_mut_ptr(),
                    b.dtdh.as_mut_ptr(),
                    b.dddp.as_mut_ptr(),
                    phase_ptrs.as_mut_ptr(),
                )
            };

            let count = clamp_arrivals(i64::from(n), MAX_ARRIVALS);
            Ok((0..count)
                .map(|i| Arrival {
                    phase: phase_code(&b.phcd[i]),
                    travel_time: f64::from(b.tt[i]),
                    ray_parameter: f64::from(b.p[i]),
                    dtdd: f64::from(b.dtdd[i]),
                    dtdh: f64::from(b.dtdh[i]),
                    dddp: f64::from(b.dddp[i]),
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod libtau_test {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_open_model_missing_tables() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let source = ModelSource::new("iasp91", dir_path.clone()).unwrap();

        let err = open_model(&source).err().unwrap();
        assert_eq!(
            err,
            TtimError::TableFileNotFound(dir_path.join("iasp91.hed").to_string())
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    #[cfg(not(feature = "libtau"))]
    fn test_open_model_without_backend() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::write(dir_path.join("iasp91.hed"), b"").unwrap();
        std::fs::write(dir_path.join("iasp91.tbl"), b"").unwrap();

        let source = ModelSource::new("iasp91", dir_path).unwrap();
        assert_eq!(
            open_model(&source).err(),
            Some(TtimError::BackendUnavailable("iasp91".into()))
        );
    }
}
