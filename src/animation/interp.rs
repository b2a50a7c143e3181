//! Piecewise-linear interpolation over keypoint ranges.
//!
//! Every animated value in a scene (camera zoom, fades, label slides, parallax) is derived from
//! the local frame through [`interpolate`]. Periodic wobble is expressed as a sine remapped into
//! an output range with [`remap_sine`].

use crate::animation::ease::Ease;
use crate::foundation::error::{OrreryError, OrreryResult};

/// Behavior for inputs outside the first/last keypoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
    /// Repeat the input range.
    Wrap,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOpts {
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
    pub ease: Ease,
}

impl InterpolateOpts {
    pub const CLAMP: InterpolateOpts = InterpolateOpts {
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Clamp,
        ease: Ease::Linear,
    };

    pub const CLAMP_RIGHT: InterpolateOpts = InterpolateOpts {
        extrapolate_left: Extrapolate::Extend,
        extrapolate_right: Extrapolate::Clamp,
        ease: Ease::Linear,
    };

    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

/// Map `input` through the keypoints `input_range -> output_range`.
///
/// Both ranges must have the same length (at least 2) and contain finite values;
/// `input_range` must be strictly increasing.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> OrreryResult<f64> {
    validate_ranges(input_range, output_range)?;
    if input.is_nan() {
        return Err(OrreryError::animation("interpolate input is NaN"));
    }

    let seg = find_segment(input, input_range);
    Ok(interpolate_segment(
        input,
        (input_range[seg], input_range[seg + 1]),
        (output_range[seg], output_range[seg + 1]),
        opts,
    ))
}

/// [`interpolate`] with clamping on both sides.
pub fn interpolate_clamped(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
) -> OrreryResult<f64> {
    interpolate(input, input_range, output_range, InterpolateOpts::CLAMP)
}

/// `interpolate(sin(phase), [-1, 1], [lo, hi])`.
pub fn remap_sine(phase: f64, lo: f64, hi: f64) -> f64 {
    lo + (phase.sin() + 1.0) * 0.5 * (hi - lo)
}

/// Sine oscillation normalized to `[0, 1]`.
pub fn oscillate(frame: f64, speed: f64, phase: f64) -> f64 {
    (frame * speed + phase).sin() * 0.5 + 0.5
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> OrreryResult<()> {
    if input_range.len() < 2 {
        return Err(OrreryError::animation(
            "interpolate input range needs at least 2 keypoints",
        ));
    }
    if input_range.len() != output_range.len() {
        return Err(OrreryError::animation(format!(
            "interpolate input range has {} keypoints but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range
        .iter()
        .chain(output_range.iter())
        .any(|v| !v.is_finite())
    {
        return Err(OrreryError::animation(
            "interpolate ranges must contain finite values",
        ));
    }
    if input_range.windows(2).any(|w| w[1] <= w[0]) {
        return Err(OrreryError::animation(format!(
            "interpolate input range must be strictly increasing, got {input_range:?}"
        )));
    }
    Ok(())
}

fn find_segment(input: f64, input_range: &[f64]) -> usize {
    let last = input_range.len() - 1;
    let i = input_range[1..last].partition_point(|&k| k < input);
    i.min(last - 1)
}

fn interpolate_segment(
    input: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    let mut x = input;
    if x < in_min {
        match opts.extrapolate_left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Wrap => x = wrap(x, in_min, in_max),
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match opts.extrapolate_right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Wrap => x = wrap(x, in_min, in_max),
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    let mut t = (x - in_min) / (in_max - in_min);
    if opts.ease != Ease::Linear {
        t = opts.ease.apply(t);
    }
    out_min + t * (out_max - out_min)
}

fn wrap(x: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    (x - min).rem_euclid(span) + min
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
