//! Operator input contract.
//!
//! Defines the capability trait a concrete input source (gamepad, network
//! console, test stub) implements, plus the per-cycle snapshot the control
//! component works from. Every accessor has a neutral default so a partial
//! source only overrides the controls it actually provides.

/// Capability interface exposing normalized operator intent.
///
/// All accessors are pure queries: no side effects, no caching across calls.
/// Within a single control cycle repeated calls must observe the same value;
/// the control component enforces this by sampling the source exactly once
/// per cycle into an [`OperatorIntent`].
pub trait OperatorInput {
    /// Signed lift axis, nominal range [-1.0, 1.0], positive = raise.
    fn lift_axis(&self) -> f64 {
        0.0
    }

    /// Operator-commanded bypass of the limit-switch interlocks,
    /// used for manual recovery.
    fn ignore_limit_switches(&self) -> bool {
        false
    }

    /// Request the level-one preset position.
    fn level_one(&self) -> bool {
        false
    }

    /// Request the level-two preset position.
    fn level_two(&self) -> bool {
        false
    }

    /// Request the level-three preset position.
    fn level_three(&self) -> bool {
        false
    }
}

/// Input source with no controls bound: every accessor returns its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOperator;

impl OperatorInput for NullOperator {}

/// Read-only snapshot of operator intent for one control cycle.
///
/// Built once at the top of the cycle and passed by reference through the
/// arbitration logic, so every decision in the cycle sees the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorIntent {
    /// Signed lift axis, positive = raise.
    pub lift_axis: f64,
    /// Interlock override flag.
    pub ignore_limit_switches: bool,
    /// Level-one preset request.
    pub level_one: bool,
    /// Level-two preset request.
    pub level_two: bool,
    /// Level-three preset request.
    pub level_three: bool,
}

impl OperatorIntent {
    /// Neutral intent (all defaults).
    pub const NEUTRAL: Self = Self {
        lift_axis: 0.0,
        ignore_limit_switches: false,
        level_one: false,
        level_two: false,
        level_three: false,
    };

    /// Sample a source once, fixing the intent for the current cycle.
    pub fn sample(source: &dyn OperatorInput) -> Self {
        Self {
            lift_axis: source.lift_axis(),
            ignore_limit_switches: source.ignore_limit_switches(),
            level_one: source.level_one(),
            level_two: source.level_two(),
            level_three: source.level_three(),
        }
    }
}

impl Default for OperatorIntent {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
