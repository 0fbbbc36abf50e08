//! Separation-constrained random placement in an annulus.
//!
//! Each point is drawn by sampling a uniform angle and a uniform radial
//! distance inside a [`Band`].  A candidate is kept as soon as it is more than
//! `min_separation` away from every point already placed.  If no candidate
//! qualifies within `attempts` draws, the last one is kept anyway: placement
//! never fails, but a crowded band can yield points closer than requested.

use ltc_core::{Band, Coordinate, SimRng};

/// One placed point and the angle it was drawn at.
///
/// The angle doubles as a truck's fixed approach heading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub point: Coordinate,
    pub angle: f64,
    /// `false` when the attempt cap ran out and separation was not met.
    pub spaced: bool,
}

/// Place `count` points around `center` inside `band`.
///
/// `attempts` is clamped to at least one draw per point.
pub fn scatter(
    rng:            &mut SimRng,
    center:         Coordinate,
    band:           Band,
    min_separation: f64,
    count:          usize,
    attempts:       u32,
) -> Vec<Placement> {
    let mut placed: Vec<Placement> = Vec::with_capacity(count);

    for _ in 0..count {
        let mut candidate = draw(rng, center, band);
        for _ in 1..attempts.max(1) {
            if candidate.spaced_from(&placed, min_separation) {
                break;
            }
            candidate = draw(rng, center, band);
        }
        candidate.spaced = candidate.spaced_from(&placed, min_separation);
        placed.push(candidate);
    }

    placed
}

fn draw(rng: &mut SimRng, center: Coordinate, band: Band) -> Placement {
    let angle = rng.angle();
    let dist  = band.lerp(rng.random::<f64>());
    Placement {
        point:  Coordinate::polar(center, angle, dist),
        angle,
        spaced: true,
    }
}

impl Placement {
    pub(crate) fn spaced_from(&self, others: &[Placement], min_separation: f64) -> bool {
        others
            .iter()
            .all(|o| o.point.distance(self.point) > min_separation)
    }
}
