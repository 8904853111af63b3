use std::{error::Error, path::Path};

use test_utils::transpile;

#[test]
fn transpile_squares_corrects_origins() -> Result<(), Box<dyn Error>> {
    let output = transpile(Path::new("./demos/squares.psg"))?;

    assert!(output.contains("#include <stdio.h>"), "{output}");
    assert!(output.contains("int A[3];"), "{output}");
    assert!(output.contains("A[I - 2]"), "{output}");
    assert!(output.contains("int main(void) {"), "{output}");
    Ok(())
}

#[test]
fn transpile_swap_uses_pointers() -> Result<(), Box<dyn Error>> {
    let output = transpile(Path::new("./demos/swap.psg"))?;

    assert!(output.contains("void SWAP(int *A, int *B);"), "{output}");
    assert!(output.contains("SWAP(&X, &Y);"), "{output}");
    Ok(())
}

#[test]
fn transpile_sum_returns_result_slot() -> Result<(), Box<dyn Error>> {
    let output = transpile(Path::new("./demos/sum.psg"))?;

    assert!(output.contains("int SUM_result = 0;"), "{output}");
    assert!(output.contains("return SUM_result;"), "{output}");
    Ok(())
}
