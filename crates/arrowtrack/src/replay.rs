//! Offline replay of recorded per-frame polygons.
//!
//! A replay file is JSON:
//!
//! ```json
//! {
//!   "params": { "similarity_tolerance": 49 },
//!   "frames": [
//!     [ { "polygon": [[0, 10], [20, 10]], "hull": [[0, 10]], "area": 800.0 } ],
//!     []
//!   ]
//! }
//! ```
//!
//! `params` and `area` are optional.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::tracker::{ArrowTracker, FrameStats, ParamsError, StableArrow, TrackerParams};
use crate::types::FramePolygon;

/// Errors produced while loading or running a replay.
#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Recorded input: tracker configuration plus one polygon list per frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReplayFile {
    #[serde(default)]
    pub params: TrackerParams,
    pub frames: Vec<Vec<FramePolygon>>,
}

/// Tracker output for one replayed frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameReport {
    pub index: usize,
    pub stats: FrameStats,
    pub stable: Vec<StableArrow>,
}

/// Tracker output for a whole replay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayReport {
    pub params: TrackerParams,
    pub frames: Vec<FrameReport>,
}

impl ReplayReport {
    /// Index of the first frame that reported at least one stable arrow.
    pub fn first_stable_frame(&self) -> Option<usize> {
        self.frames
            .iter()
            .find(|f| !f.stable.is_empty())
            .map(|f| f.index)
    }
}

#[cfg_attr(feature = "tracing", instrument(level = "info", skip(path)))]
pub fn load_replay(path: &Path) -> Result<ReplayFile, ReplayError> {
    let raw = fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Run every frame of `replay` through a fresh tracker.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(replay), fields(frames = replay.frames.len()))
)]
pub fn run_replay(replay: &ReplayFile) -> Result<ReplayReport, ReplayError> {
    let mut tracker = ArrowTracker::try_new(replay.params.clone())?;
    let frames: Vec<FrameReport> = replay
        .frames
        .iter()
        .enumerate()
        .map(|(index, polygons)| {
            let stable = tracker.process_frame(polygons);
            FrameReport {
                index,
                stats: tracker.last_stats(),
                stable,
            }
        })
        .collect();

    let reported: usize = frames.iter().map(|f| f.stable.len()).sum();
    info!(
        "replayed {} frames, {} stable reports, {} tracks left",
        frames.len(),
        reported,
        tracker.len()
    );

    Ok(ReplayReport {
        params: replay.params.clone(),
        frames,
    })
}

/// Serialize `report` as pretty JSON to `path`, creating parent directories.
pub fn write_report(path: &Path, report: &ReplayReport) -> Result<(), ReplayError> {
    let write_err = |source| ReplayError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLAY: &str = r#"{
        "frames": [
            [{ "polygon": [[0,10],[20,10],[20,0],[40,20],[20,40],[20,30],[0,30]],
               "hull": [[0,10],[20,0],[40,20],[20,40],[0,30]] }],
            [{ "polygon": [[22,12],[22,2],[42,22],[22,42],[22,32],[2,32],[2,12]],
               "hull": [[22,2],[42,22],[22,42],[2,32],[2,12]] }],
            [{ "polygon": [[40,20],[20,40],[20,30],[0,30],[0,10],[20,10],[20,0]],
               "hull": [[40,20],[20,40],[0,30],[0,10],[20,0]], "area": 800.0 }],
            [{ "polygon": [[1,11],[21,11],[21,1],[41,21],[21,41],[21,31],[1,31]],
               "hull": [[1,11],[21,1],[41,21],[21,41],[1,31]] }],
            []
        ]
    }"#;

    #[test]
    fn rotated_start_points_still_track() {
        let replay: ReplayFile = serde_json::from_str(REPLAY).expect("parse replay");
        assert_eq!(replay.params, TrackerParams::default());

        let report = run_replay(&replay).expect("run replay");
        assert_eq!(report.frames.len(), 5);
        assert_eq!(report.first_stable_frame(), Some(3));

        let last_hit = &report.frames[3].stable[0];
        assert_eq!((last_hit.tip.x, last_hit.tip.y), (41, 21));
        assert_eq!((last_hit.tail.x, last_hit.tail.y), (1, 21));

        let idle = &report.frames[4];
        assert!(idle.stable.is_empty());
        assert_eq!(idle.stats.candidates, 0);
        assert_eq!(idle.stats.tracks, 1);
    }

    #[test]
    fn invalid_params_abort_replay() {
        let replay = ReplayFile {
            params: TrackerParams {
                similarity_tolerance: -5,
                ..TrackerParams::default()
            },
            frames: vec![],
        };
        assert!(matches!(
            run_replay(&replay),
            Err(ReplayError::Params(ParamsError::NegativeTolerance(-5)))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_replay(Path::new("/nonexistent/replay.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/replay.json"));
    }
}
