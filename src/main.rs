use clasp::evaluator::{run, LoopSpec};
use clasp::Discipline;

/// The demonstration loop: `i` from 0 to 3 inclusive, step 1.
const SEED: LoopSpec = LoopSpec { start: 0, bound: 3 };

fn main() {
    // The three demonstrations, in order: shared binding via
    // a named function, shared binding via a lambda, copy-capture via
    // an immediately invoked factory.
    for discipline in [
        Discipline::SharedFn,
        Discipline::SharedLambda,
        Discipline::CopyCapture,
    ] {
        let values = run(SEED, discipline);
        let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(" "));
    }
}
