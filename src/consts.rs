//! Shared constants for the construction board.

// ── Roles ───────────────────────────────────────────────────────

/// Wire sentinel for a role (locus / operating point) that is not assigned.
pub const UNSET_ROLE: &str = "-1";

/// Radius published in the locus summary when no circle is assigned.
pub const UNSET_RADIUS: i32 = -1;

// ── Identity ────────────────────────────────────────────────────

/// Prefix of every generated object id.
pub const ID_PREFIX: &str = "id";

/// Number of random bytes hex-encoded after [`ID_PREFIX`].
pub const ID_RANDOM_BYTES: usize = 8;

// ── Default geometry ────────────────────────────────────────────

/// Tip of a freshly added vector (its tail sits at the origin).
pub const DEFAULT_VECTOR_SECOND: [f64; 2] = [2.0, 1.0];

/// Second point of a freshly added line (the first sits at the origin).
pub const DEFAULT_LINE_SECOND: [f64; 2] = [1.0, 1.0];

/// Radius of a freshly added circle.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 1.0;

/// Direction (radians) from the center at which the radius handle is placed.
pub const RADIUS_HANDLE_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

// ── Palette (colorblind-friendly) ───────────────────────────────

pub const ORANGE: &str = "#E69F00";
pub const BLUE: &str = "#0072B2";
pub const RED: &str = "#D55E00";
pub const PURPLE: &str = "#CC79A7";

/// Stroke of the circle radius handle, independent of selection.
pub const RADIUS_HANDLE_STROKE: &str = "red";

// ── Styling ─────────────────────────────────────────────────────

/// Stroke width of derived shapes (segment, line, circle).
pub const SHAPE_STROKE_WIDTH: f64 = 1.0;

/// Opacity of derived shapes.
pub const SHAPE_OPACITY: f64 = 0.75;

/// Stroke width of free control points.
pub const POINT_STROKE_WIDTH: f64 = 2.0;

// ── Read-out ────────────────────────────────────────────────────

/// Default number of decimals in the hover read-out.
pub const DEFAULT_READOUT_DIGITS: usize = 2;

/// Default number of decimals of the tape measure label.
pub const DEFAULT_TAPE_PRECISION: usize = 1;

/// Display correction applied to polar angles when the y axis carries `Re`.
pub const RE_AXIS_ANGLE_CORRECTION: f64 = 90.0;

// ── Measurements ────────────────────────────────────────────────

/// Name shown on the tape measure label.
pub const TAPE_LABEL: &str = "L";

/// Decimals of the angle measure label.
pub const ANGLE_MEASURE_DIGITS: usize = 0;

// ── Phasor diagram ──────────────────────────────────────────────

/// Decimals of the magnitude and angle on a phasor hover label.
pub const PHASOR_LABEL_DIGITS: usize = 1;

/// Unit shown after a phasor's magnitude.
pub const PHASOR_UNIT: &str = "cm";

/// Endpoints of the default phasor diagram, as (tail, tip) pairs.
pub const DEFAULT_PHASOR_POINTS: [[f64; 2]; 16] = [
    [0.0, 0.0],
    [5.22961956521, 0.0],
    [0.0, 0.0],
    [-3.22144715417, 3.28653346969],
    [0.0, 0.0],
    [10.6519116472, 5.31490932857],
    [0.0, 0.0],
    [0.609665977407, -4.39161794651],
    [-3.22144715417, 3.28653346969],
    [0.609665977407, -4.39161794651],
    [0.0, 0.0],
    [6.09249854801, 0.84579057818],
    [5.22961956521, 0.0],
    [6.09249854801, 0.84579057818],
    [6.09249854801, 0.84579057818],
    [10.6519116472, 5.31490932857],
];

/// Names of the default phasors, one per (tail, tip) pair.
pub const DEFAULT_VECTOR_LABELS: [&str; 8] = [
    r"\(\underline{U}_1\)",
    r"\(\underline{I}_1\)",
    r"\(\underline{U}_P\)",
    r"\(\underline{I}_{\mu}\)",
    r"\(\underline{I}'_E\)",
    r"\(\underline{U}_r\)",
    r"\(-j X_{1\sigma} \cdot \underline{I}_1\)",
    r"\(-j X_h \cdot \underline{I}_1\)",
];
