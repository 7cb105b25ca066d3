/// Hard ceiling on the oasis bonus cap; user-supplied values above this are
/// clamped down to it.
pub const MAX_OASIS_CAP: u32 = 50;

/// Safety bound on a single regrowth pass so path extension always
/// terminates, even on pathological masks.
pub const REGROW_STEP_LIMIT: usize = 200;

/// Starting temperature of the linear cooling schedule.
pub const DEFAULT_TEMP_START: f64 = 100.0;

/// Temperature the schedule interpolates toward over the nominal iteration
/// budget.
pub const DEFAULT_TEMP_END: f64 = 0.1;

/// Progress observer cadence in iterations.
pub const DEFAULT_REPORT_EVERY: usize = 1000;
