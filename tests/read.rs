use std::{error::Error, path::Path};

use test_utils::{check_run_with_input, Expected};

const SRC_PATH: &str = "./demos/average.psg";

#[test]
fn run_average_over_stdin() -> Result<(), Box<dyn Error>> {
    check_run_with_input(
        Path::new(SRC_PATH),
        "7\n2\n",
        Expected {
            stdout: "4.5",
            stderr: "",
        },
    )
}
