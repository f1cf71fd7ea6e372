use std::process::Command;

#[test]
fn help_lists_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_vendorsync"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--manifest", "--project-root", "--jobs", "--dry-run", "--json"] {
        assert!(stdout.contains(flag), "missing {flag} in help:\n{stdout}");
    }
}

#[test]
fn unknown_flag_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_vendorsync"))
        .arg("--bogus")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
