use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;

#[test]
fn file_without_trailing_newline_does_not_gain_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let js = temp.child("tail.js");
    js.write_str("// console.log('a',\nb);")?;

    let mut cmd = cargo_bin_cmd!("logsweep");
    cmd.current_dir(&temp).arg("tail.js").assert().success();

    js.assert("// console.log('a',\n//b);");

    Ok(())
}

#[test]
fn trigger_inside_a_block_is_not_treated_as_a_new_block() -> Result<(), Box<dyn std::error::Error>>
{
    let temp = assert_fs::TempDir::new()?;
    let js = temp.child("nested.js");
    // The second line would match the trigger pattern on its own, but it sits
    // inside an open block, so it is just a continuation.
    js.write_str("// console.log('outer',\n// console.log('inner',\nend);\nafter();\n")?;

    let mut cmd = cargo_bin_cmd!("logsweep");
    cmd.current_dir(&temp).arg("nested.js").assert().success();

    js.assert("// console.log('outer',\n// console.log('inner',\n//end);\nafter();\n");

    Ok(())
}
