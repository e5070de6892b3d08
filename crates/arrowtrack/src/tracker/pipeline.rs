use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use arrowtrack_core::shapes_similar;

use crate::classify::detect_arrow;
use crate::types::{ArrowCandidate, FramePolygon};

use super::{FrameStats, ParamsError, StableArrow, TrackedArrow, TrackerParams};

/// Arrow tracker: per-frame classification, matching and hysteresis.
///
/// Drive it with one call per frame. A candidate first appears as stable on
/// its fourth consecutive matched frame with default parameters, and a track
/// that stops matching decays by one per frame until it is evicted.
#[derive(Clone, Debug, Default)]
pub struct ArrowTracker {
    params: TrackerParams,
    tracks: Vec<TrackedArrow>,
    last_stats: FrameStats,
}

impl ArrowTracker {
    /// Create a tracker with `params` taken as given.
    pub fn new(params: TrackerParams) -> Self {
        Self {
            params,
            tracks: Vec::new(),
            last_stats: FrameStats::default(),
        }
    }

    /// Create a tracker after validating `params`.
    pub fn try_new(params: TrackerParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self::new(params))
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Tracks currently alive, in creation order.
    pub fn tracks(&self) -> &[TrackedArrow] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Counters from the most recent frame.
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Forget every track.
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.last_stats = FrameStats::default();
    }

    /// Main entry: classify the frame's polygons and advance tracking.
    ///
    /// Returns the arrows considered stable for this frame.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, polygons), fields(polygons = polygons.len()))
    )]
    pub fn process_frame(&mut self, polygons: &[FramePolygon]) -> Vec<StableArrow> {
        let min_area = self.params.min_area;
        let candidates = polygons
            .iter()
            .filter_map(|fp| {
                detect_arrow(fp, min_area)
                    .map(|arrow| ArrowCandidate::new(fp.polygon.clone(), arrow))
            })
            .collect();
        self.update(candidates)
    }

    /// Advance tracking with already-classified candidates.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, candidates), fields(candidates = candidates.len()))
    )]
    pub fn update(&mut self, candidates: Vec<ArrowCandidate>) -> Vec<StableArrow> {
        let mut stats = FrameStats {
            candidates: candidates.len(),
            ..FrameStats::default()
        };

        for candidate in candidates {
            if self.absorb(&candidate) {
                stats.matched += 1;
            } else {
                self.tracks.push(TrackedArrow {
                    shape: candidate.shape,
                    tip: candidate.tip,
                    tail: candidate.tail,
                    stability: 0,
                });
                stats.created += 1;
            }
        }

        let stable = self.maintain(&mut stats);
        stats.tracks = self.tracks.len();

        debug!(
            "frame: {} candidates, {} matched, {} new, {} evicted, {} stable, {} tracks",
            stats.candidates,
            stats.matched,
            stats.created,
            stats.evicted,
            stats.stable,
            stats.tracks
        );
        self.last_stats = stats;
        stable
    }

    /// Fold `candidate` into the first track with a similar shape.
    fn absorb(&mut self, candidate: &ArrowCandidate) -> bool {
        let tol = self.params.similarity_tolerance;
        let Some(track) = self
            .tracks
            .iter_mut()
            .find(|t| shapes_similar(&candidate.shape, &t.shape, tol))
        else {
            return false;
        };

        track.shape = candidate.shape.clone();
        track.tip = candidate.tip;
        track.tail = candidate.tail;
        track.stability =
            (track.stability + self.params.stability_gain_on_match).min(self.params.stability_max);
        true
    }

    /// Evict decayed tracks, collect stable ones, and decay the survivors.
    fn maintain(&mut self, stats: &mut FrameStats) -> Vec<StableArrow> {
        let threshold = self.params.stability_threshold;
        let mut survivors = Vec::with_capacity(self.tracks.len());
        let mut stable = Vec::new();

        for mut track in std::mem::take(&mut self.tracks) {
            if track.stability < 0 {
                stats.evicted += 1;
                continue;
            }
            if track.stability > threshold {
                stable.push(StableArrow::from(&track));
            }
            track.stability -= 1;
            survivors.push(track);
        }

        stats.stable = stable.len();
        self.tracks = survivors;
        stable
    }
}
