use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::foundation::error::{OrreryError, OrreryResult};

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub damping: f64,
    pub mass: f64,
    pub stiffness: f64,
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    fn validate(&self) -> OrreryResult<()> {
        if !(self.damping > 0.0) {
            return Err(OrreryError::animation("spring damping must be > 0"));
        }
        if !(self.mass > 0.0) {
            return Err(OrreryError::animation("spring mass must be > 0"));
        }
        if !(self.stiffness > 0.0) {
            return Err(OrreryError::animation("spring stiffness must be > 0"));
        }
        Ok(())
    }
}

/// Inputs for [`spring`].
#[derive(Clone, Copy, Debug)]
pub struct SpringOpts {
    pub frame: f64,
    pub fps: f64,
    pub config: SpringConfig,
    pub from: f64,
    pub to: f64,
    /// Stretch the spring so it settles at this frame.
    pub duration_in_frames: Option<f64>,
    pub delay: f64,
}

impl SpringOpts {
    pub fn new(frame: f64, fps: f64) -> Self {
        Self {
            frame,
            fps,
            config: SpringConfig::default(),
            from: 0.0,
            to: 1.0,
            duration_in_frames: None,
            delay: 0.0,
        }
    }
}

const REST_THRESHOLD: f64 = 0.005;
const REST_HOLD_FRAMES: u32 = 20;
const MAX_MEASURE_FRAMES: u64 = 100_000;

#[derive(Clone, Copy, Debug)]
struct SpringState {
    last_ms: f64,
    current: f64,
    velocity: f64,
}

impl SpringState {
    const START: SpringState = SpringState {
        last_ms: 0.0,
        current: 0.0,
        velocity: 0.0,
    };
}

// Closed-form step of a unit spring heading towards 1.0.
fn advance(state: SpringState, now_ms: f64, cfg: &SpringConfig) -> SpringState {
    let to = 1.0;
    let dt_ms = (now_ms - state.last_ms).min(64.0);
    let c = cfg.damping;
    let m = cfg.mass;
    let k = cfg.stiffness;

    let v0 = -state.velocity;
    let x0 = to - state.current;
    let zeta = c / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();
    let t = dt_ms / 1000.0;

    let (current, velocity) = if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let sin1 = (omega1 * t).sin();
        let cos1 = (omega1 * t).cos();
        let envelope = (-zeta * omega0 * t).exp();
        let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
        let pos = to - frag;
        let vel = zeta * omega0 * frag
            - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
        (pos, vel)
    } else {
        let envelope = (-omega0 * t).exp();
        let pos = to - envelope * (x0 + (v0 + omega0 * x0) * t);
        let vel = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
        (pos, vel)
    };

    SpringState {
        last_ms: now_ms,
        current,
        velocity,
    }
}

fn simulate(frame: f64, fps: f64, cfg: &SpringConfig) -> SpringState {
    let frame = frame.max(0.0);
    let whole = frame.floor();
    let rest = frame - whole;
    let mut state = SpringState::START;
    let mut f = 0.0;
    while f <= whole {
        let at = if f == whole { f + rest } else { f };
        state = advance(state, at / fps * 1000.0, cfg);
        f += 1.0;
    }
    state
}

/// Frames a unit spring needs until it stays within the rest threshold for 20 frames.
pub fn measure_spring(fps: f64, config: SpringConfig) -> OrreryResult<u64> {
    config.validate()?;
    if !(fps > 0.0) {
        return Err(OrreryError::animation("spring fps must be > 0"));
    }

    let mut state = SpringState::START;
    let mut frame = 0u64;
    state = advance(state, 0.0, &config);
    let off = |s: &SpringState| (s.current - 1.0).abs();

    while off(&state) >= REST_THRESHOLD {
        frame += 1;
        if frame > MAX_MEASURE_FRAMES {
            return Err(OrreryError::animation("spring does not settle"));
        }
        state = advance(state, frame as f64 / fps * 1000.0, &config);
    }

    let mut finished = frame;
    let mut held = 0;
    while held < REST_HOLD_FRAMES {
        frame += 1;
        if frame > MAX_MEASURE_FRAMES {
            return Err(OrreryError::animation("spring does not settle"));
        }
        state = advance(state, frame as f64 / fps * 1000.0, &config);
        if off(&state) >= REST_THRESHOLD {
            held = 1;
            finished = frame + 1;
        } else {
            held += 1;
        }
    }
    Ok(finished)
}

/// Sample a damped spring moving `from -> to` at `opts.frame`.
pub fn spring(opts: SpringOpts) -> OrreryResult<f64> {
    opts.config.validate()?;
    if !(opts.fps > 0.0) {
        return Err(OrreryError::animation("spring fps must be > 0"));
    }

    let delayed = opts.frame - opts.delay;
    let frame = match opts.duration_in_frames {
        None => delayed,
        Some(duration) => {
            if !(duration > 0.0) {
                return Err(OrreryError::animation(
                    "spring duration_in_frames must be > 0",
                ));
            }
            if delayed > duration {
                return Ok(opts.to);
            }
            let natural = measure_spring(opts.fps, opts.config)? as f64;
            delayed / (duration / natural.max(1.0))
        }
    };

    let raw = simulate(frame, opts.fps, &opts.config).current;
    // `raw` is a unit spring, so clamping at 1.0 clamps at `to` in either direction.
    let inner = if opts.config.overshoot_clamping {
        raw.min(1.0)
    } else {
        raw
    };

    if opts.from == 0.0 && opts.to == 1.0 {
        return Ok(inner);
    }
    interpolate(
        inner,
        &[0.0, 1.0],
        &[opts.from, opts.to],
        InterpolateOpts::default(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
