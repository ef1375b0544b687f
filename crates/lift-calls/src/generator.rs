//! Random call-script generator.
//!
//! Produces uniformly distributed hall calls for stress and soak runs.  All
//! randomness flows through a caller-supplied [`SimRng`], so a fixed seed
//! reproduces the exact same script.

use lift_core::{Floor, FloorRange, SimRng, Tick};

use crate::CallEvent;

/// Generate `count` random calls within `building`, scheduled uniformly over
/// `0..=latest_tick`, sorted by scheduled tick (stable, so equal-tick calls
/// keep generation order).
///
/// Destinations are resampled until distinct from the origin, and the
/// direction is derived from the pair, so every generated call passes
/// [`CallEvent::validate`].
pub fn random_calls(
    rng: &mut SimRng,
    building: &FloorRange,
    count: usize,
    latest_tick: Tick,
) -> Vec<CallEvent> {
    let mut calls: Vec<CallEvent> = (0..count)
        .map(|_| {
            let origin = Floor(rng.gen_range(building.bottom.0..=building.top.0));
            let destination = loop {
                let candidate = Floor(rng.gen_range(building.bottom.0..=building.top.0));
                if candidate != origin {
                    break candidate;
                }
            };
            let tick = Tick(rng.gen_range(0..=latest_tick.0));
            CallEvent::between(origin, destination, tick)
        })
        .collect();

    calls.sort_by_key(|c| c.scheduled_tick);
    calls
}
