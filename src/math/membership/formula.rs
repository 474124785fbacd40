use crate::math::membership::membershiperror::MembershipError;

pub const TRIANGULAR: &'static str = "triangular";
pub const TRAPEZOIDAL: &'static str = "trapezoidal";
pub const GAUSSIAN: &'static str = "gaussian";
pub const GENERALIZED_BELL: &'static str = "generalizedBell";
pub const SIGMOID: &'static str = "sigmoid";
pub const S_CURVE: &'static str = "sCurve";
pub const Z_CURVE: &'static str = "zCurve";
pub const PI_CURVE: &'static str = "piCurve";
pub const LEFT_SHOULDER: &'static str = "leftShoulder";
pub const RIGHT_SHOULDER: &'static str = "rightShoulder";
pub const SINGLETON: &'static str = "singleton";

/// Substitute denominator for zero-width ramps. Keeps degenerate shapes
/// (a == b, or c == d on a trapezoid) acting as a near-vertical step
/// instead of producing NaN.
const MIN_RAMP_WIDTH: f64 = f64::EPSILON;

fn require_finite(
    function: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<(), MembershipError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MembershipError::NonFiniteParameter { function, parameter })
    }
}

pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> Result<f64, MembershipError> {
    require_finite(TRIANGULAR, "x", x)?;
    require_finite(TRIANGULAR, "a", a)?;
    require_finite(TRIANGULAR, "b", b)?;
    require_finite(TRIANGULAR, "c", c)?;
    if !(a <= b && b <= c) {
        return Err(MembershipError::ConstraintViolation {
            function: TRIANGULAR,
            constraint: "parameters must satisfy a <= b <= c",
        });
    }
    if x <= a || x >= c {
        return Ok(0.0);
    }
    let degree = if x <= b {
        (x - a) / (b - a).max(MIN_RAMP_WIDTH)
    } else {
        (c - x) / (c - b).max(MIN_RAMP_WIDTH)
    };
    Ok(degree.clamp(0.0, 1.0))
}

pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> Result<f64, MembershipError> {
    require_finite(TRAPEZOIDAL, "x", x)?;
    require_finite(TRAPEZOIDAL, "a", a)?;
    require_finite(TRAPEZOIDAL, "b", b)?;
    require_finite(TRAPEZOIDAL, "c", c)?;
    require_finite(TRAPEZOIDAL, "d", d)?;
    if !(a <= b && b <= c && c <= d) {
        return Err(MembershipError::ConstraintViolation {
            function: TRAPEZOIDAL,
            constraint: "parameters must satisfy a <= b <= c <= d",
        });
    }
    if x >= b && x <= c {
        return Ok(1.0);
    }
    if x <= a || x >= d {
        return Ok(0.0);
    }
    let degree = if x < b {
        (x - a) / (b - a).max(MIN_RAMP_WIDTH)
    } else {
        (d - x) / (d - c).max(MIN_RAMP_WIDTH)
    };
    Ok(degree.clamp(0.0, 1.0))
}

pub fn gaussian(x: f64, mean: f64, sigma: f64) -> Result<f64, MembershipError> {
    require_finite(GAUSSIAN, "x", x)?;
    require_finite(GAUSSIAN, "mean", mean)?;
    require_finite(GAUSSIAN, "sigma", sigma)?;
    if sigma <= 0.0 {
        return Err(MembershipError::ConstraintViolation {
            function: GAUSSIAN,
            constraint: "sigma must be positive",
        });
    }
    let degree = (-(x - mean).powi(2) / (2.0 * sigma * sigma)).exp();
    Ok(degree.clamp(0.0, 1.0))
}

pub fn generalized_bell(x: f64, a: f64, b: f64, c: f64) -> Result<f64, MembershipError> {
    require_finite(GENERALIZED_BELL, "x", x)?;
    require_finite(GENERALIZED_BELL, "a", a)?;
    require_finite(GENERALIZED_BELL, "b", b)?;
    require_finite(GENERALIZED_BELL, "c", c)?;
    if a == 0.0 {
        return Err(MembershipError::ConstraintViolation {
            function: GENERALIZED_BELL,
            constraint: "a must be nonzero",
        });
    }
    if b <= 0.0 {
        return Err(MembershipError::ConstraintViolation {
            function: GENERALIZED_BELL,
            constraint: "b must be positive",
        });
    }
    let degree = 1.0 / (1.0 + ((x - c) / a).abs().powf(2.0 * b));
    Ok(degree.clamp(0.0, 1.0))
}

/// a = 0 is allowed and yields the constant 0.5.
pub fn sigmoid(x: f64, a: f64, c: f64) -> Result<f64, MembershipError> {
    require_finite(SIGMOID, "x", x)?;
    require_finite(SIGMOID, "a", a)?;
    require_finite(SIGMOID, "c", c)?;
    let degree = 1.0 / (1.0 + (-a * (x - c)).exp());
    Ok(degree.clamp(0.0, 1.0))
}

/// Quadratic ease from 0 at x <= a to 1 at x >= b. The two halves
/// 2t^2 and 1 - 2(1-t)^2 meet at t = 0.5 with matching slope.
pub fn s_curve(x: f64, a: f64, b: f64) -> Result<f64, MembershipError> {
    require_finite(S_CURVE, "x", x)?;
    require_finite(S_CURVE, "a", a)?;
    require_finite(S_CURVE, "b", b)?;
    if !(a < b) {
        return Err(MembershipError::ConstraintViolation {
            function: S_CURVE,
            constraint: "parameters must satisfy a < b",
        });
    }
    if x <= a {
        return Ok(0.0);
    }
    if x >= b {
        return Ok(1.0);
    }
    let t = (x - a) / (b - a);
    let degree = if t <= 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    };
    Ok(degree.clamp(0.0, 1.0))
}

/// Mirror of [`s_curve`]: 1 at x <= a, 0 at x >= b. For every x,
/// `z_curve(x, a, b) + s_curve(x, a, b) == 1`.
pub fn z_curve(x: f64, a: f64, b: f64) -> Result<f64, MembershipError> {
    require_finite(Z_CURVE, "x", x)?;
    require_finite(Z_CURVE, "a", a)?;
    require_finite(Z_CURVE, "b", b)?;
    if !(a < b) {
        return Err(MembershipError::ConstraintViolation {
            function: Z_CURVE,
            constraint: "parameters must satisfy a < b",
        });
    }
    if x <= a {
        return Ok(1.0);
    }
    if x >= b {
        return Ok(0.0);
    }
    let t = (x - a) / (b - a);
    let degree = if t <= 0.5 {
        1.0 - 2.0 * t * t
    } else {
        2.0 * (1.0 - t) * (1.0 - t)
    };
    Ok(degree.clamp(0.0, 1.0))
}

/// Plateau on [b, c]; the rising edge is `s_curve(x, a, b)` and the
/// falling edge is `z_curve(x, c, d)`, no independent ramp math.
pub fn pi_curve(x: f64, a: f64, b: f64, c: f64, d: f64) -> Result<f64, MembershipError> {
    require_finite(PI_CURVE, "x", x)?;
    require_finite(PI_CURVE, "a", a)?;
    require_finite(PI_CURVE, "b", b)?;
    require_finite(PI_CURVE, "c", c)?;
    require_finite(PI_CURVE, "d", d)?;
    if !(a <= b && b <= c && c <= d) {
        return Err(MembershipError::ConstraintViolation {
            function: PI_CURVE,
            constraint: "parameters must satisfy a <= b <= c <= d",
        });
    }
    if x >= b && x <= c {
        return Ok(1.0);
    }
    if x <= a || x >= d {
        return Ok(0.0);
    }
    // Reaching an edge branch implies the edge has positive width, so the
    // delegated a < b (resp. c < d) constraint holds.
    if x < b {
        s_curve(x, a, b)
    } else {
        z_curve(x, c, d)
    }
}

/// Alias of [`z_curve`]: saturates at 1 on the left of its domain.
pub fn left_shoulder(x: f64, a: f64, b: f64) -> Result<f64, MembershipError> {
    z_curve(x, a, b)
}

/// Alias of [`s_curve`]: saturates at 1 on the right of its domain.
pub fn right_shoulder(x: f64, a: f64, b: f64) -> Result<f64, MembershipError> {
    s_curve(x, a, b)
}

/// Strict equality, no tolerance band. Sampling grids that never land on
/// c exactly will render an empty spike; callers wanting a visible spike
/// should include c in the grid.
pub fn singleton(x: f64, c: f64) -> Result<f64, MembershipError> {
    require_finite(SINGLETON, "x", x)?;
    require_finite(SINGLETON, "c", c)?;
    Ok(if x == c { 1.0 } else { 0.0 })
}

/// Accepts degrees outside [0,1] and clamps rather than rejecting.
pub fn complement(mu: f64) -> Result<f64, MembershipError> {
    require_finite("complement", "mu", mu)?;
    Ok((1.0 - mu).clamp(0.0, 1.0))
}
