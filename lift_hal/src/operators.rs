//! Operator input sources for simulation and tests.
//!
//! `ManualOperator` is a settable stand-in for a gamepad: tests flip its
//! fields between cycles. `ScriptedOperator` plays back a fixed per-cycle
//! timeline so the demo binary behaves deterministically.

use lift_common::input::OperatorInput;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ManualState {
    lift_axis: f64,
    ignore_limit_switches: bool,
    level_one: bool,
    level_two: bool,
    level_three: bool,
}

/// Settable operator input. Clones share state, so a test keeps one clone
/// and hands the other to the control component.
#[derive(Debug, Clone, Default)]
pub struct ManualOperator {
    state: Arc<Mutex<ManualState>>,
}

impl ManualOperator {
    /// New operator with every control neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lift axis.
    pub fn set_lift_axis(&self, value: f64) {
        self.lock().lift_axis = value;
    }

    /// Set the interlock override flag.
    pub fn set_ignore_limit_switches(&self, value: bool) {
        self.lock().ignore_limit_switches = value;
    }

    /// Set the preset request flags at once.
    pub fn set_presets(&self, level_one: bool, level_two: bool, level_three: bool) {
        let mut state = self.lock();
        state.level_one = level_one;
        state.level_two = level_two;
        state.level_three = level_three;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().expect("manual operator state poisoned")
    }
}

impl OperatorInput for ManualOperator {
    fn lift_axis(&self) -> f64 {
        self.lock().lift_axis
    }

    fn ignore_limit_switches(&self) -> bool {
        self.lock().ignore_limit_switches
    }

    fn level_one(&self) -> bool {
        self.lock().level_one
    }

    fn level_two(&self) -> bool {
        self.lock().level_two
    }

    fn level_three(&self) -> bool {
        self.lock().level_three
    }
}

/// One step of a scripted timeline.
#[derive(Debug, Clone, Copy)]
pub struct ScriptStep {
    /// Number of control cycles this step holds.
    pub cycles: u32,
    /// Lift axis during the step.
    pub lift_axis: f64,
    /// Interlock override during the step.
    pub ignore_limit_switches: bool,
}

impl ScriptStep {
    /// Hold `lift_axis` for `cycles` cycles, override off.
    pub fn hold(cycles: u32, lift_axis: f64) -> Self {
        Self {
            cycles,
            lift_axis,
            ignore_limit_switches: false,
        }
    }
}

#[derive(Debug)]
struct ScriptState {
    steps: Vec<ScriptStep>,
    index: usize,
    spent_in_step: u32,
}

/// Deterministic scripted operator input.
///
/// The script only moves when [`ScriptedOperator::advance`] is called (once
/// per control cycle, by whoever drives the loop), so reads within a cycle
/// are consistent by construction. After the last step every control reads
/// neutral.
#[derive(Debug, Clone)]
pub struct ScriptedOperator {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedOperator {
    /// Build an operator from a step list.
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScriptState {
                steps,
                index: 0,
                spent_in_step: 0,
            })),
        }
    }

    /// Advance the script by one control cycle.
    pub fn advance(&self) {
        let mut state = self.lock();
        if state.index >= state.steps.len() {
            return;
        }
        state.spent_in_step += 1;
        if state.spent_in_step >= state.steps[state.index].cycles {
            state.index += 1;
            state.spent_in_step = 0;
        }
    }

    /// Whether the script has played out.
    pub fn finished(&self) -> bool {
        let state = self.lock();
        state.index >= state.steps.len()
    }

    fn current(&self) -> Option<ScriptStep> {
        let state = self.lock();
        state.steps.get(state.index).copied()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.state.lock().expect("script state poisoned")
    }
}

impl OperatorInput for ScriptedOperator {
    fn lift_axis(&self) -> f64 {
        self.current().map_or(0.0, |step| step.lift_axis)
    }

    fn ignore_limit_switches(&self) -> bool {
        self.current()
            .is_some_and(|step| step.ignore_limit_switches)
    }
}
