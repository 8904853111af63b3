use std::{error::Error, path::Path};

use test_utils::run;

/// The same program in UTF-8 and in the Windows-1253 codepage must
/// produce byte-identical output.
#[test]
fn codepage_input_matches_utf8_input() -> Result<(), Box<dyn Error>> {
    let utf8 = run(Path::new("./demos/greek.psg"))?;
    let codepage = run(Path::new("./demos/greek_1253.psg"))?;

    assert_eq!(utf8, "15\n");
    assert_eq!(utf8, codepage);
    Ok(())
}
