use std::{error::Error, path::Path};

use test_utils::{check_run, Expected};

#[test]
fn run_swap_by_reference() -> Result<(), Box<dyn Error>> {
    check_run(
        Path::new("./demos/swap.psg"),
        Expected {
            stdout: "2 1",
            stderr: "",
        },
    )
}

#[test]
fn run_sum_function() -> Result<(), Box<dyn Error>> {
    check_run(
        Path::new("./demos/sum.psg"),
        Expected {
            stdout: "55",
            stderr: "",
        },
    )
}
