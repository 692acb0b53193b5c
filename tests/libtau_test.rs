//! Queries against the real tau library.
//!
//! Built only with `--features libtau`, and skipped unless `TTIM_TABLE_DIR` names a
//! directory holding `iasp91.hed` and `iasp91.tbl`.
#![cfg(feature = "libtau")]

use camino::Utf8PathBuf;
use ttim::travel_time::libtau::{open_model, TauTables};
use ttim::travel_time::model_source::ModelSource;
use ttim::travel_time::TravelTimeModel;
use ttim::ttim_errors::TtimError;

fn iasp91_source() -> Option<ModelSource> {
    let dir = std::env::var("TTIM_TABLE_DIR").ok()?;
    ModelSource::new("iasp91", Utf8PathBuf::from(dir)).ok()
}

// The library tables are process-global: everything runs in one test.
#[test]
fn test_iasp91_surface_source_at_45_degrees() {
    let Some(source) = iasp91_source() else {
        eprintln!("TTIM_TABLE_DIR not set, skipping");
        return;
    };

    let mut model = open_model(&source).unwrap();
    assert_eq!(
        TauTables::load(&source).err(),
        Some(TtimError::ModelAlreadyLoaded)
    );

    model.select_branches();
    model.set_depth(0.0);
    let arrivals = model.lookup(45.0).unwrap();

    let p = arrivals.iter().find(|a| a.phase == "P").unwrap();
    assert!((470.0..490.0).contains(&p.travel_time));
    assert!(p.ray_parameter > 0.0);

    drop(model);
    assert!(TauTables::load(&source).is_ok());
}
