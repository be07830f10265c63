#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;

use runat::launch::resolve_binary;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn resolves_a_plain_name_to_an_absolute_path() -> TestResult {
    let path = resolve_binary("echo")?;
    assert!(path.is_absolute());
    assert!(path.is_file());
    Ok(())
}

#[test]
fn resolves_an_explicit_path_without_searching() -> TestResult {
    let dir = tempfile::tempdir()?;
    let script = dir.path().join("hello.sh");
    fs::write(&script, "#!/bin/sh\necho hello\n")?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

    let resolved = resolve_binary(script.to_str().ok_or("non-utf8 temp path")?)?;
    assert!(resolved.is_absolute());
    assert_eq!(resolved.file_name(), script.file_name());
    Ok(())
}

#[test]
fn non_executable_files_are_not_resolved() -> TestResult {
    let dir = tempfile::tempdir()?;
    let plain = dir.path().join("data.txt");
    fs::write(&plain, "not a program")?;

    assert!(resolve_binary(plain.to_str().ok_or("non-utf8 temp path")?).is_err());
    Ok(())
}

#[test]
fn unknown_names_are_reported_with_the_offending_input() {
    let err = resolve_binary("definitely-not-a-real-binary-xyzzy").unwrap_err();
    assert!(err.to_string().contains("definitely-not-a-real-binary-xyzzy"));
}
