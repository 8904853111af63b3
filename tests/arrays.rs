use std::{error::Error, path::Path};

use test_utils::{check_failing_run, check_run, Expected};

#[test]
fn run_squares_with_shifted_origin() -> Result<(), Box<dyn Error>> {
    check_run(
        Path::new("./demos/squares.psg"),
        Expected {
            stdout: "4 9 16",
            stderr: "",
        },
    )
}

#[test]
fn out_of_bounds_access_fails() -> Result<(), Box<dyn Error>> {
    check_failing_run(Path::new("./demos/bad_index.psg"))
}
