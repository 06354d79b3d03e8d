use anyhow::Result;

/// Outcome of a completed external command. Success carries the captured
/// stdout of a zero-exit run, Failure the captured stderr of a non-zero one.
/// Returning this instead of a raw (stdout, stderr, status) triple means a
/// caller cannot read the output without having checked the status.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutput {
    Success(String),
    Failure(String),
}

/// Runs a command synchronously and classifies the result by exit status.
/// Failing to spawn at all (eg. the binary is not installed) is an Err, not a
/// Failure.
pub fn capture(program: &str, args: &[String]) -> Result<CommandOutput> {
    let output = std::process::Command::new(program).args(args).output()?;

    if output.status.success() {
        let stdout = std::str::from_utf8(&output.stdout)?;
        return Ok(CommandOutput::Success(stdout.to_string()));
    }

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    return Ok(CommandOutput::Failure(stderr));
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn zero_exit_captures_stdout() {
        let result = capture("echo", &[String::from("hello")])
            .expect("echo should always be spawnable");

        assert_eq!(result, CommandOutput::Success(String::from("hello\n")));
    }

    #[test]
    fn non_zero_exit_captures_stderr() {
        let result = capture(
            "sh",
            &[
                String::from("-c"),
                String::from("echo 'it broke' >&2; exit 1"),
            ],
        )
        .expect("sh should always be spawnable");

        assert_eq!(result, CommandOutput::Failure(String::from("it broke\n")));
    }

    #[test]
    fn missing_binary_is_an_error() {
        let result = capture("definitely-not-a-real-binary", &[]);

        assert!(result.is_err());
    }
}
