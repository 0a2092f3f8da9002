// Unit tests harness
mod capture {
    include!("capture.rs");
}
mod pipeline {
    include!("pipeline.rs");
}
