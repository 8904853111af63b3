use std::{error::Error, path::Path};

use test_utils::{check_run, Expected};

#[test]
fn run_countdown() -> Result<(), Box<dyn Error>> {
    check_run(
        Path::new("./demos/countdown.psg"),
        Expected {
            stdout: "3\n2\n1\n",
            stderr: "",
        },
    )
}

#[test]
fn run_repeat_until() -> Result<(), Box<dyn Error>> {
    check_run(
        Path::new("./demos/repeat.psg"),
        Expected {
            stdout: "3",
            stderr: "",
        },
    )
}
