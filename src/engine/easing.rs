// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Easing curve for auto spins.

/// Ease-out cubic: `1 - (1 - t)^3`, with `t` clamped to [0, 1].
///
/// Fast at the start, settling gently onto the target.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
