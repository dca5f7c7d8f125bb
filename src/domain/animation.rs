use super::{Cell, Lattice};

/// Radius units per second
pub const ANIMATION_SPEED: f32 = 3.0;

/// Clamp a frame delta to a usable value. Negative and NaN deltas become 0.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        log::warn!("ignoring invalid frame delta {dt}");
        0.0
    } else {
        dt
    }
}

/// Advance every cell's radius by one frame and commit any cell whose
/// radius reached its bound. Runs every frame, tick or no tick.
/// `dt` must already have gone through [`sanitize_dt`].
/// Returns the number of commits performed.
pub fn animate(lattice: &mut Lattice, speed: f32, dt: f32) -> usize {
    debug_assert!(dt >= 0.0, "unsanitized frame delta {dt}");
    let step = speed * dt;
    lattice
        .cells_mut()
        .iter_mut()
        .map(|cell| advance(cell, step))
        .filter(|&committed| committed)
        .count()
}

/// Move one cell toward `target_radius()`. A diverging `next` starts the
/// animation once the radius can actually move off its bound; landing on
/// either bound clamps the radius and copies `next` into `current`.
fn advance(cell: &mut Cell, step: f32) -> bool {
    if cell.current != cell.next && step > 0.0 {
        cell.animating = true;
    }
    if !cell.animating || step <= 0.0 {
        return false;
    }

    if cell.next {
        cell.radius += step;
        if cell.radius >= 1.0 {
            cell.radius = 1.0;
            cell.current = true;
            cell.animating = false;
            return true;
        }
    } else {
        cell.radius -= step;
        if cell.radius <= 0.0 {
            cell.radius = 0.0;
            cell.current = false;
            cell.animating = false;
            return true;
        }
    }
    false
}
