// Lightweight instrumentation for counting alignment hotspots in development.
// Thread-local cells avoid locking overhead; reset and snapshot helpers
// let the `instrument` binary collect simple breakdowns.
use std::cell::Cell;

thread_local! {
    static SHIFT_PASSES: Cell<u64> = const { Cell::new(0) };
    static DIAGONALS: Cell<u64> = const { Cell::new(0) };
    static ELEMENTS_COMPARED: Cell<u64> = const { Cell::new(0) };
    static SHORT_CIRCUITS: Cell<u64> = const { Cell::new(0) };
    static REGIONS_ALIGNED: Cell<u64> = const { Cell::new(0) };
    static WILDCARDS_EMITTED: Cell<u64> = const { Cell::new(0) };
}

/// Point-in-time copy of the counters on the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub shift_passes: u64,
    pub diagonals: u64,
    pub elements_compared: u64,
    pub short_circuits: u64,
    pub regions_aligned: u64,
    pub wildcards_emitted: u64,
}

pub fn reset_counters() {
    SHIFT_PASSES.with(|c| c.set(0));
    DIAGONALS.with(|c| c.set(0));
    ELEMENTS_COMPARED.with(|c| c.set(0));
    SHORT_CIRCUITS.with(|c| c.set(0));
    REGIONS_ALIGNED.with(|c| c.set(0));
    WILDCARDS_EMITTED.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        shift_passes: SHIFT_PASSES.with(|c| c.get()),
        diagonals: DIAGONALS.with(|c| c.get()),
        elements_compared: ELEMENTS_COMPARED.with(|c| c.get()),
        short_circuits: SHORT_CIRCUITS.with(|c| c.get()),
        regions_aligned: REGIONS_ALIGNED.with(|c| c.get()),
        wildcards_emitted: WILDCARDS_EMITTED.with(|c| c.get()),
    }
}

pub fn add_shift_pass(n: u64) {
    SHIFT_PASSES.with(|c| c.set(c.get().wrapping_add(n)));
}

// One diagonal of `len` comparisons. Recorded per diagonal rather than per
// element to keep the inner loop free of thread-local access.
pub fn add_diagonal(len: u64) {
    DIAGONALS.with(|c| c.set(c.get().wrapping_add(1)));
    ELEMENTS_COMPARED.with(|c| c.set(c.get().wrapping_add(len)));
}

pub fn add_short_circuit(n: u64) {
    SHORT_CIRCUITS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_region(n: u64) {
    REGIONS_ALIGNED.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_wildcard(n: u64) {
    WILDCARDS_EMITTED.with(|c| c.set(c.get().wrapping_add(n)));
}
