use std::{
    error::Error,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
    str,
};

const BIN_PATH: &str = "./target/debug/pseudoglossa";

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

/// Run the interpreter on a source file and compare both output streams.
pub fn check_run(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    check_run_with_input(src_path, "", expected)
}

/// Like [`check_run`], feeding the program lines on standard input.
pub fn check_run_with_input(
    src_path: &Path,
    input: &str,
    expected: Expected,
) -> Result<(), Box<dyn Error>> {
    let mut child = Command::new(BIN_PATH)
        .arg(src_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "interpreter exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Run the interpreter on a program that must fail: exit status 1 and a
/// diagnostic on stderr.
pub fn check_failing_run(src_path: &Path) -> Result<(), Box<dyn Error>> {
    let output = Command::new(BIN_PATH).arg(src_path).output()?;

    assert!(
        !output.status.success(),
        "interpreter should exit with a non-zero status"
    );
    assert!(
        !output.stderr.is_empty(),
        "a failing run should print a diagnostic"
    );

    Ok(())
}

/// Transpile a source file and return the emitted C.
pub fn transpile(src_path: &Path) -> Result<String, Box<dyn Error>> {
    let output = Command::new(BIN_PATH)
        .arg(src_path)
        .arg("--transpile")
        .output()?;

    assert!(
        output.status.success(),
        "transpiler exited with status {:?}: {}",
        output.status.code(),
        str::from_utf8(&output.stderr)?
    );

    Ok(str::from_utf8(&output.stdout)?.to_owned())
}

/// Run the interpreter and return stdout, asserting success.
pub fn run(src_path: &Path) -> Result<String, Box<dyn Error>> {
    let output = Command::new(BIN_PATH).arg(src_path).output()?;

    assert!(
        output.status.success(),
        "interpreter exited with status {:?}: {}",
        output.status.code(),
        str::from_utf8(&output.stderr)?
    );

    Ok(str::from_utf8(&output.stdout)?.to_owned())
}
