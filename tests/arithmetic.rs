use std::{error::Error, path::Path};

use test_utils::{check_run, Expected};

const SRC_PATH: &str = "./demos/arithmetic.psg";
const EXPECTED: Expected = Expected {
    stdout: "10",
    stderr: "",
};

#[test]
fn run_arithmetic() -> Result<(), Box<dyn Error>> {
    check_run(Path::new(SRC_PATH), EXPECTED)
}
