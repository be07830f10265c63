use std::error::Error;

use clap::Parser;

use runat::cli::CliArgs;
use runat::errors::RunatError;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn verbosity_flags_accumulate() -> TestResult {
    let args = CliArgs::try_parse_from(["runat", "30", "sleep", "5"])?;
    assert_eq!(args.verbose, 0);

    let args = CliArgs::try_parse_from(["runat", "-v", "30", "sleep", "5"])?;
    assert_eq!(args.verbose, 1);

    let args = CliArgs::try_parse_from(["runat", "-vv", "30", "sleep", "5"])?;
    assert_eq!(args.verbose, 2);

    let args = CliArgs::try_parse_from(["runat", "-v", "--verbose", "30", "sleep", "5"])?;
    assert_eq!(args.verbose, 2);
    Ok(())
}

#[test]
fn everything_after_the_timespec_is_the_command() -> TestResult {
    let args = CliArgs::try_parse_from(["runat", "30", "sleep", "10", "-h"])?;
    let (timespec, command) = args.into_inputs()?;

    assert_eq!(timespec, "30");
    assert_eq!(command.program(), "sleep");
    assert_eq!(command.args(), ["10".to_string(), "-h".to_string()]);
    Ok(())
}

#[test]
fn hyphen_tokens_in_the_command_survive_verbatim() -> TestResult {
    // Only the leading -v counts as verbosity; the one inside the command
    // is an ordinary argument.
    let args = CliArgs::try_parse_from(["runat", "-v", "12", "grep", "-v", "pattern"])?;
    assert_eq!(args.verbose, 1);

    let (timespec, command) = args.into_inputs()?;
    assert_eq!(timespec, "12");
    assert_eq!(command.program(), "grep");
    assert_eq!(command.args(), ["-v".to_string(), "pattern".to_string()]);
    Ok(())
}

#[test]
fn missing_timespec_is_its_own_error() -> TestResult {
    let args = CliArgs::try_parse_from(["runat"])?;
    match args.into_inputs() {
        Err(RunatError::MissingTimeSpec) => Ok(()),
        other => panic!("expected MissingTimeSpec, got {other:?}"),
    }
}

#[test]
fn missing_command_is_its_own_error() -> TestResult {
    let args = CliArgs::try_parse_from(["runat", "30"])?;
    match args.into_inputs() {
        Err(RunatError::MissingCommand) => Ok(()),
        other => panic!("expected MissingCommand, got {other:?}"),
    }
}
