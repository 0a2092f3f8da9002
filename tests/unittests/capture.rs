// Unit tests for the capture evaluator
// Exercises the seed case, the aliasing invariants, and the two-phase
// production/invocation contract.
use clasp::evaluator::{invoke_all, produce, run, LoopSpec};
use clasp::{CaptureKind, Discipline};

fn seed() -> LoopSpec {
    LoopSpec::new(0, 3)
}

// ============================================================================
// SECTION 1: Seed case — the three original demonstrations
// ============================================================================

#[test]
fn test_shared_fn_yields_post_loop_value() {
    assert_eq!(run(seed(), Discipline::SharedFn), vec![4, 4, 4, 4]);
}

#[test]
fn test_shared_lambda_matches_shared_fn() {
    // Different capture syntax, same binding, same result.
    assert_eq!(
        run(seed(), Discipline::SharedLambda),
        run(seed(), Discipline::SharedFn)
    );
}

#[test]
fn test_copy_capture_freezes_each_iteration() {
    assert_eq!(run(seed(), Discipline::CopyCapture), vec![0, 1, 2, 3]);
}

#[test]
fn test_per_iteration_binding_freezes_each_iteration() {
    // New binding scope, not new syntax, is what changes the output.
    assert_eq!(run(seed(), Discipline::PerIteration), vec![0, 1, 2, 3]);
}

// ============================================================================
// SECTION 2: Aliasing invariants
// ============================================================================

#[test]
fn test_shared_disciplines_alias_one_cell() {
    for discipline in [Discipline::SharedFn, Discipline::SharedLambda] {
        let units = produce(seed(), discipline);
        assert_eq!(units.len(), 4);

        let first = units.get(0).unwrap().cell().unwrap();
        for unit in units.iter() {
            assert!(first.is_same_cell(unit.cell().unwrap()));
        }
    }
}

#[test]
fn test_shared_cell_holds_first_failing_value() {
    let units = produce(seed(), Discipline::SharedFn);
    let cell = units.get(0).unwrap().cell().unwrap();
    // The loop increments to 4 before `i <= 3` fails.
    assert_eq!(cell.get(), seed().post_value());
    assert_eq!(cell.get(), 4);
}

#[test]
fn test_per_iteration_cells_are_distinct() {
    let units = produce(seed(), Discipline::PerIteration);
    let cells: Vec<_> = units.iter().map(|u| u.cell().unwrap()).collect();
    for (i, a) in cells.iter().enumerate() {
        for b in &cells[i + 1..] {
            assert!(!a.is_same_cell(b));
        }
    }
}

#[test]
fn test_copy_capture_owns_values() {
    let units = produce(seed(), Discipline::CopyCapture);
    for (index, unit) in units.iter().enumerate() {
        match unit.capture() {
            CaptureKind::OwnedCopy { value } => assert_eq!(*value, index as i64),
            CaptureKind::SharedCell { .. } => panic!("copy-capture unit aliases a cell"),
        }
    }
}

// ============================================================================
// SECTION 3: Phase contract
// ============================================================================

#[test]
fn test_invocation_is_idempotent() {
    for discipline in Discipline::ALL {
        let units = produce(seed(), discipline);
        let first = invoke_all(&units);
        let second = invoke_all(&units);
        assert_eq!(first, second);
    }
}

#[test]
fn test_invocation_is_a_pure_read() {
    let units = produce(seed(), Discipline::SharedFn);
    let cell = units.get(0).unwrap().cell().unwrap();

    let before = cell.get();
    invoke_all(&units);
    assert_eq!(cell.get(), before);
}

#[test]
fn test_invocation_order_only_determines_output_order() {
    let units = produce(seed(), Discipline::CopyCapture);
    let forward: Vec<i64> = units.iter().map(|u| u.invoke()).collect();

    let mut reversed = Vec::new();
    for index in (0..units.len()).rev() {
        reversed.push(units.get(index).unwrap().invoke());
    }
    reversed.reverse();
    assert_eq!(forward, reversed);
}

// ============================================================================
// SECTION 4: Boundary — zero-iteration loops
// ============================================================================

#[test]
fn test_zero_iteration_loop_produces_nothing() {
    let empty = LoopSpec::new(0, -1);
    for discipline in Discipline::ALL {
        let units = produce(empty, discipline);
        assert!(units.is_empty());
        assert!(invoke_all(&units).is_empty());
    }
}

#[test]
fn test_never_entered_loop_post_value_is_start() {
    assert_eq!(LoopSpec::new(5, 2).post_value(), 5);
}

#[test]
fn test_single_iteration_loop() {
    let spec = LoopSpec::new(0, 0);
    assert_eq!(run(spec, Discipline::SharedFn), vec![1]);
    assert_eq!(run(spec, Discipline::CopyCapture), vec![0]);
}
