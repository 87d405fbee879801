//! # Trajectory Sampling and Boundary Truncation
//!
//! The one reusable computational shape in this crate: evaluate a
//! closed-form state function over a uniform time grid, then cut the series
//! at the exact analytic boundary crossing (ground impact, end of an
//! inclined plane) instead of the nearest grid point.
//!
//! ## Contract
//!
//! - [`sample_series`] produces `n` samples over `[0, T]` inclusive, with
//!   `t_0 = 0` and `t_{n-1} = T`. Negative `T` is rejected.
//! - [`truncate_at_crossing`] keeps samples while the monitored field is
//!   non-negative. The first violating grid sample is dropped and replaced
//!   by the analytically exact crossing state, so the last point of a
//!   truncated series sits on the boundary itself. Downstream animation and
//!   plotting consumers rely on that final point being exact.
//!
//! ## Example
//!
//! ```rust
//! use physics_core::sampling::{sample_series, truncate_at_crossing};
//!
//! // Free fall from 100 m under g = 9.81: impact at t* = sqrt(2h/g).
//! let g: f64 = 9.81;
//! let h0 = 100.0;
//! let height = |t: f64| h0 - 0.5 * g * t * t;
//! let impact = (2.0 * h0 / g).sqrt();
//!
//! let grid = sample_series(6.0, 100, height).unwrap();
//! let series = truncate_at_crossing(&grid, |h| *h, impact, |_| 0.0);
//!
//! assert_eq!(series.first().unwrap().time, 0.0);
//! assert!((series.last().unwrap().time - impact).abs() < 1e-12);
//! assert_eq!(series.last().unwrap().state, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{PhysicsError, PhysicsResult};

/// One `(t, state)` point of a sampled trajectory.
///
/// `S` is the scenario's state: a bare `f64`, a struct with height and
/// velocity, an `(x, y)` pair, and so on. Serializes as
/// `{"time": ..., "state": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedSample<S> {
    /// Time since the start of the scenario (s)
    pub time: f64,
    /// Scenario state at that time
    pub state: S,
}

/// Clamp a requested sample count to something the grid can represent:
/// at least 2 points when the duration is positive (a line needs two ends),
/// exactly 1 when the duration is zero.
pub fn clamp_points(total_time: f64, points: usize) -> usize {
    if total_time > 0.0 {
        points.max(2)
    } else {
        1
    }
}

/// Evaluate `f` on a uniform time grid over `[0, total_time]` inclusive.
///
/// The returned series has `clamp_points(total_time, points)` samples,
/// the first at `t = 0` and the last exactly at `t = total_time`.
///
/// # Errors
///
/// `InvalidInput` when `total_time` is negative.
pub fn sample_series<S>(
    total_time: f64,
    points: usize,
    f: impl Fn(f64) -> S,
) -> PhysicsResult<Vec<TimedSample<S>>> {
    if total_time < 0.0 {
        return Err(PhysicsError::invalid_input(
            "total_time",
            total_time.to_string(),
            "Duration must be non-negative",
        ));
    }

    let n = clamp_points(total_time, points);
    let mut samples = Vec::with_capacity(n);
    if n == 1 {
        samples.push(TimedSample {
            time: 0.0,
            state: f(0.0),
        });
        return Ok(samples);
    }

    let step = total_time / (n - 1) as f64;
    for i in 0..n {
        // Pin the endpoint so t_{n-1} == total_time regardless of rounding.
        let t = if i == n - 1 {
            total_time
        } else {
            step * i as f64
        };
        samples.push(TimedSample { time: t, state: f(t) });
    }
    Ok(samples)
}

/// Truncate a sampled series at the first boundary violation.
///
/// Samples are kept while `monitored(state) >= 0`. The first violating
/// sample is discarded; in its place the analytically exact crossing
/// `(crossing_time, state_at(crossing_time))` is appended, provided
/// `crossing_time` lies strictly after the last kept sample (a zero-length
/// tail would duplicate a point). Everything after the violation is dropped.
///
/// Edge cases:
/// - the very first sample violates the boundary: returns an empty series;
/// - no sample violates the boundary: returns the full series unchanged,
///   which also makes the operation idempotent on already-truncated series;
/// - a kept sample lands exactly at `crossing_time` (grids are often built
///   over a window ending there): its state is replaced by the analytic
///   crossing state, so rounding in the sampled state function cannot leave
///   the boundary sample a hair off the boundary.
pub fn truncate_at_crossing<S: Clone>(
    samples: &[TimedSample<S>],
    monitored: impl Fn(&S) -> f64,
    crossing_time: f64,
    state_at: impl Fn(f64) -> S,
) -> Vec<TimedSample<S>> {
    let mut kept: Vec<TimedSample<S>> = Vec::with_capacity(samples.len());
    for sample in samples {
        if monitored(&sample.state) >= 0.0 {
            kept.push(sample.clone());
            continue;
        }

        if let Some(last) = kept.last() {
            if crossing_time > last.time {
                kept.push(TimedSample {
                    time: crossing_time,
                    state: state_at(crossing_time),
                });
            }
        }
        break;
    }
    if let Some(last) = kept.last_mut() {
        if last.time == crossing_time {
            last.state = state_at(crossing_time);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_fall_height(h0: f64, g: f64) -> impl Fn(f64) -> f64 {
        move |t| h0 - 0.5 * g * t * t
    }

    #[test]
    fn test_grid_endpoints() {
        let series = sample_series(5.0, 100, |t| t).unwrap();
        assert_eq!(series.len(), 100);
        assert_eq!(series[0].time, 0.0);
        assert_eq!(series[99].time, 5.0);
    }

    #[test]
    fn test_times_non_decreasing() {
        let series = sample_series(3.7, 53, |t| t * 2.0).unwrap();
        for pair in series.windows(2) {
            assert!(pair[1].time >= pair[0].time);
        }
    }

    #[test]
    fn test_zero_duration_single_point() {
        let series = sample_series(0.0, 100, |t| t).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].time, 0.0);
    }

    #[test]
    fn test_point_clamp() {
        // One requested point over a positive duration still yields a line.
        let series = sample_series(2.0, 1, |t| t).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].time, 2.0);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let result = sample_series(-1.0, 10, |t| t);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_truncation_appends_exact_crossing() {
        let g: f64 = 9.81;
        let h0 = 100.0;
        let impact = (2.0 * h0 / g).sqrt();

        // Sample past the impact time so the grid overshoots the ground.
        let grid = sample_series(impact * 1.5, 100, free_fall_height(h0, g)).unwrap();
        let series = truncate_at_crossing(&grid, |h| *h, impact, |_| 0.0);

        let last = series.last().unwrap();
        assert!((last.time - impact).abs() < 1e-12);
        assert_eq!(last.state, 0.0);
        // No grid sample after the crossing survives.
        for s in &series[..series.len() - 1] {
            assert!(s.time < impact);
            assert!(s.state > 0.0);
        }
    }

    #[test]
    fn test_truncation_no_violation_returns_full_grid() {
        let g: f64 = 9.81;
        let h0 = 100.0;
        let impact = (2.0 * h0 / g).sqrt();

        let grid = sample_series(impact * 0.5, 50, free_fall_height(h0, g)).unwrap();
        let series = truncate_at_crossing(&grid, |h| *h, impact, |_| 0.0);
        assert_eq!(series.len(), grid.len());
        assert_eq!(series.last().unwrap().time, grid.last().unwrap().time);
    }

    #[test]
    fn test_truncation_idempotent() {
        let g: f64 = 9.81;
        let h0 = 20.0;
        let impact = (2.0 * h0 / g).sqrt();

        let grid = sample_series(impact * 2.0, 80, free_fall_height(h0, g)).unwrap();
        let once = truncate_at_crossing(&grid, |h| *h, impact, |_| 0.0);
        let twice = truncate_at_crossing(&once, |h| *h, impact, |_| 0.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_sample_violation_yields_empty() {
        let grid = sample_series(2.0, 10, |_| -1.0).unwrap();
        let series = truncate_at_crossing(&grid, |h| *h, 0.5, |_| 0.0);
        assert!(series.is_empty());
    }

    #[test]
    fn test_grid_ending_at_crossing_is_snapped_exact() {
        // Window ends exactly at the crossing; whatever rounding the state
        // function produced there, the final state is the analytic one.
        let g: f64 = 9.81;
        let h0 = 100.0;
        let impact = (2.0 * h0 / g).sqrt();

        let grid = sample_series(impact, 100, free_fall_height(h0, g)).unwrap();
        let series = truncate_at_crossing(&grid, |h| *h, impact, |_| 0.0);
        let last = series.last().unwrap();
        assert_eq!(last.time, impact);
        assert_eq!(last.state, 0.0);
    }

    #[test]
    fn test_crossing_at_kept_time_not_duplicated() {
        // Grid lands exactly on the crossing; the next sample violates, but
        // the crossing time equals the last kept time, so nothing is added.
        let samples = vec![
            TimedSample { time: 0.0, state: 1.0 },
            TimedSample { time: 1.0, state: 0.0 },
            TimedSample { time: 2.0, state: -1.0 },
        ];
        let series = truncate_at_crossing(&samples, |h| *h, 1.0, |_| 0.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().time, 1.0);
    }
}
