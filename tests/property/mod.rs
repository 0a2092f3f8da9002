// Property-based tests harness
mod strategies;
mod capture {
    include!("capture.rs");
}
