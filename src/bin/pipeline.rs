use clasp::pipeline::scale_filter_sum;
use std::process;

fn main() {
    // Fixed constants from the demonstration: scale by 3, keep
    // products above 100, sum the rest.
    match scale_filter_sum(&[10, 20, 30, 40, 50], 3, 100) {
        Ok(total) => println!("{}", total),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
