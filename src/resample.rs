//! Fixed-interval resampling of route geometries.
//!
//! Providers sample routes unevenly: long straight roads get two vertices,
//! roundabouts get dozens. Resampling both routes at the same interval makes
//! their point counts comparable before the overlap check.

use crate::coordinate::Coordinate;
use crate::error::MatchError;
use crate::haversine::haversine_m;
use crate::polyline::Polyline;

/// Upper bound on the number of samples a single resample may produce.
///
/// The estimate is the path length divided by the interval; anything above
/// this fails with `InvalidInterval` instead of allocating.
pub const MAX_RESAMPLED_POINTS: usize = 100_000;

const BISECTION_STEPS: usize = 64;

/// Position of the walk along the source path.
///
/// `anchor` is the last emitted sample. It is kept across segment
/// boundaries, so after a short segment or a bend the next sample lands on a
/// later segment, at `interval_m` meters in a straight line from the anchor.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    anchor: Coordinate,
    position: Coordinate,
}

impl Cursor {
    fn start(position: Coordinate) -> Self {
        Self {
            anchor: position,
            position,
        }
    }

    /// Walks from the cursor to `end`, pushing every point that lies
    /// `interval_m` from the previous sample.
    fn advance(
        &mut self,
        end: Coordinate,
        interval_m: f64,
        out: &mut Vec<Coordinate>,
    ) -> Result<(), MatchError> {
        while haversine_m(&self.anchor, &end) >= interval_m {
            let sample = self.crossing(end, interval_m);
            if sample == self.position {
                return Err(MatchError::InvalidInterval(interval_m));
            }
            out.push(sample);
            self.anchor = sample;
            self.position = sample;
        }
        self.position = end;
        Ok(())
    }

    /// First point between the cursor and `end` at least `interval_m` from
    /// the anchor.
    ///
    /// The cursor is always closer than `interval_m` to the anchor and `end`
    /// is not, so exactly one crossing lies on the segment. The upper bracket
    /// is returned, keeping the chord at or above the interval.
    fn crossing(&self, end: Coordinate, interval_m: f64) -> Coordinate {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..BISECTION_STEPS {
            let mid = 0.5 * (lo + hi);
            if haversine_m(&self.anchor, &self.position.lerp(&end, mid)) >= interval_m {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        self.position.lerp(&end, hi)
    }
}

/// Resamples `route` so consecutive samples are `interval_m` meters apart
/// in a straight line.
///
/// The first and last source points are always kept; only the final pair
/// may be closer than the interval. Routes with fewer than two points are
/// returned unchanged.
pub fn resample(route: &Polyline, interval_m: f64) -> Result<Polyline, MatchError> {
    if !interval_m.is_finite() || interval_m <= 0.0 {
        return Err(MatchError::InvalidInterval(interval_m));
    }

    let points = route.points();
    if points.len() < 2 {
        return Ok(route.clone());
    }

    let estimated = route.length_m()? / interval_m;
    if estimated > MAX_RESAMPLED_POINTS as f64 {
        return Err(MatchError::InvalidInterval(interval_m));
    }

    let mut out = Vec::with_capacity(estimated as usize + 2);
    out.push(points[0]);

    let mut cursor = Cursor::start(points[0]);
    for end in &points[1..] {
        cursor.advance(*end, interval_m, &mut out)?;
    }

    out.push(points[points.len() - 1]);

    Ok(Polyline::new(out))
}
