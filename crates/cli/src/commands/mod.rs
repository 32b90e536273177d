//! CLI command implementations.

pub mod accounts;
pub mod check;
pub mod pairing;
pub mod show;

/// Print formatted output, ending it with exactly one newline.
pub(crate) fn print_output(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
