//! Speed arbitration: operator intent + interlocks → duty command.
//!
//! One total function over its inputs, evaluated in strict branch order,
//! first match wins. No state, no error path: the control cycle needs a
//! value every time, and retries have no place inside the cycle budget.

use lift_common::hal::InterlockState;
use lift_common::input::OperatorIntent;

/// Compute the duty command for this cycle.
///
/// Branch order:
/// 1. Override active → `lift_axis * max_lift_speed`, interlocks ignored.
/// 2. Upper switch reading not-active → lowering is blocked
///    (`lift_axis < 0` → 0), everything else passes as
///    `lift_axis * max_lift_speed` (the axis-zero boundary passes
///    through as 0).
/// 3. Lower switch reading not-active → raising blocked, everything
///    else passes.
/// 4. Both switches active → `lift_axis * max_lift_speed` unconditionally.
///
/// The not-active guard polarity in branches 2 and 3 is inherited from the
/// deployed controller and reads inverted next to typical
/// "block motion toward a triggered limit" interlock logic. It is kept
/// as-is and flagged for the controls team rather than silently corrected;
/// changing it changes safety behavior.
///
/// The output magnitude never exceeds `max_lift_speed` for any input with
/// `lift_axis` in [-1, 1].
pub fn desired_lift_speed(
    intent: &OperatorIntent,
    interlocks: InterlockState,
    max_lift_speed: f64,
) -> f64 {
    if intent.ignore_limit_switches {
        return intent.lift_axis * max_lift_speed;
    }
    if !interlocks.upper_active {
        return if intent.lift_axis < 0.0 {
            0.0
        } else {
            intent.lift_axis * max_lift_speed
        };
    }
    if !interlocks.lower_active {
        return if intent.lift_axis > 0.0 {
            0.0
        } else {
            intent.lift_axis * max_lift_speed
        };
    }
    intent.lift_axis * max_lift_speed
}
