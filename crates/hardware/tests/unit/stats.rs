//! Timing model tests: occupancy track movement, hazard distances,
//! flush accounting, and the derived metrics.

use pretty_assertions::assert_eq;
use rstest::rstest;

use mipsim_core::stats::{HazardReg, PipeStats, EX1, EX2, ID, IF1, PIPE_STAGES, WB};

#[test]
fn new_model_charges_only_the_fill_cost() {
    let stats = PipeStats::new();
    assert_eq!(stats.cycles(), (PIPE_STAGES - 1) as u64);
    assert_eq!(stats.bubbles(), 0);
    assert_eq!(stats.flushes(), 0);
    assert_eq!(stats.snapshot().track, [None; PIPE_STAGES]);
}

#[test]
fn clock_shifts_every_occupant_toward_writeback() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::Gpr(5));
    assert_eq!(stats.snapshot().track[ID], Some(HazardReg::Gpr(5)));

    stats.clock();
    let snap = stats.snapshot();
    assert_eq!(snap.track[EX1], Some(HazardReg::Gpr(5)));
    assert_eq!(snap.track[ID], None);
    assert_eq!(snap.track[IF1], None);
    assert_eq!(snap.cycles, PIPE_STAGES as u64);
}

#[test]
fn occupants_fall_off_the_track_at_writeback() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::Gpr(5));
    for _ in 0..(WB - ID) {
        stats.clock();
    }
    assert_eq!(stats.snapshot().track[WB], Some(HazardReg::Gpr(5)));

    stats.clock();
    assert_eq!(stats.snapshot().track, [None; PIPE_STAGES]);
}

/// The stall charge equals the writer's remaining distance to
/// writeback: each instruction of separation saves one bubble, and
/// four instructions of separation cover the read-after-write latency
/// entirely.
#[rstest]
#[case(0, 4)]
#[case(1, 3)]
#[case(2, 2)]
#[case(3, 1)]
#[case(4, 0)]
#[case(5, 0)]
fn bubble_charge_shrinks_with_separation(#[case] separation: usize, #[case] expected: u64) {
    let mut stats = PipeStats::new();
    stats.clock();
    stats.register_dest(HazardReg::Gpr(8));

    // Independent instructions between writer and reader.
    for _ in 0..separation {
        stats.clock();
    }

    stats.clock();
    stats.register_src(HazardReg::Gpr(8));
    assert_eq!(stats.bubbles(), expected);
}

#[test]
fn register_zero_never_stalls() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::Gpr(0));
    stats.clock();
    stats.register_src(HazardReg::Gpr(0));
    assert_eq!(stats.bubbles(), 0);
}

#[test]
fn hi_lo_pair_hazards_as_one_unit() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::HiLo);
    stats.clock();
    stats.register_src(HazardReg::HiLo);
    assert_eq!(stats.bubbles(), 4);
}

#[test]
fn bubble_freezes_the_fetch_and_decode_slots() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::Gpr(8));
    stats.bubble();

    let snap = stats.snapshot();
    assert_eq!(snap.track[ID], Some(HazardReg::Gpr(8)));
    assert_eq!(snap.track[EX1], None);
    assert_eq!(snap.bubbles, 1);
    assert_eq!(snap.cycles, PIPE_STAGES as u64);
}

#[test]
fn flush_charges_cycles_but_never_bubbles() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::Gpr(8));
    stats.flush(2);

    let snap = stats.snapshot();
    assert_eq!(snap.flushes, 2);
    assert_eq!(snap.bubbles, 0);
    assert_eq!(snap.cycles, (PIPE_STAGES - 1 + 2) as u64);
    // A flush shifts the whole track, like a clock.
    assert_eq!(snap.track[EX2], Some(HazardReg::Gpr(8)));
    assert_eq!(snap.track[IF1], None);
}

/// Two in-flight writers read back-to-back: the first stall shifts the
/// second writer deeper into the pipeline, shrinking its own charge.
#[test]
fn stalling_for_one_source_shortens_the_next() {
    let mut stats = PipeStats::new();
    stats.clock();
    stats.register_dest(HazardReg::Gpr(8));
    stats.clock();
    stats.register_dest(HazardReg::Gpr(9));

    stats.clock();
    stats.register_src(HazardReg::Gpr(8));
    assert_eq!(stats.bubbles(), 3);
    stats.register_src(HazardReg::Gpr(9));
    assert_eq!(stats.bubbles(), 4);
}

#[test]
fn derived_metrics_guard_empty_denominators() {
    let stats = PipeStats::new();
    assert_eq!(stats.cpi(0), 0.0);
    assert_eq!(stats.mem_op_percent(0), 0.0);
    assert_eq!(stats.branch_percent(0), 0.0);
    assert_eq!(stats.taken_percent(), 0.0);
}

#[test]
fn derived_metrics_follow_the_counters() {
    let mut stats = PipeStats::new();
    for _ in 0..13 {
        stats.clock();
    }
    stats.count_mem_op();
    stats.count_mem_op();
    stats.count_branch();
    stats.count_branch();
    stats.count_branch();
    stats.count_taken();

    assert_eq!(stats.cycles(), 20);
    assert_eq!(stats.cpi(10), 2.0);
    assert_eq!(stats.mem_op_percent(10), 20.0);
    assert_eq!(stats.branch_percent(10), 30.0);
    assert_eq!(stats.taken_percent(), 100.0 / 3.0);
}

#[test]
fn snapshot_renders_occupants_and_counters() {
    let mut stats = PipeStats::new();
    stats.register_dest(HazardReg::HiLo);
    let text = stats.snapshot().to_string();
    assert!(text.contains("hl"), "{text}");
    assert!(text.contains("C=7 B=0 F=0"), "{text}");

    stats.clock();
    stats.register_dest(HazardReg::Gpr(31));
    let text = stats.snapshot().to_string();
    assert!(text.contains("31"), "{text}");
}
