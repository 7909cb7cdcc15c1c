use crate::process::ExecError;
use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

const LAUNCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the launcher argv for macOS (open).
#[cfg(target_os = "macos")]
pub fn browser_command(target: &str) -> Option<Vec<String>> {
    Some(vec!["open".to_string(), target.to_string()])
}

/// Returns the launcher argv for Linux (xdg-open).
#[cfg(target_os = "linux")]
pub fn browser_command(target: &str) -> Option<Vec<String>> {
    Some(vec!["xdg-open".to_string(), target.to_string()])
}

/// Returns the launcher argv for Windows (start via cmd).
#[cfg(windows)]
pub fn browser_command(target: &str) -> Option<Vec<String>> {
    Some(vec![
        "cmd".to_string(),
        "/C".to_string(),
        "start".to_string(),
        String::new(),
        target.to_string(),
    ])
}

/// Returns None on unsupported platforms.
#[cfg(not(any(target_os = "macos", target_os = "linux", windows)))]
pub fn browser_command(_target: &str) -> Option<Vec<String>> {
    None
}

/// Open `target` (a path or `file://` URL) with the system browser.
///
/// The launcher gets no pipes. If it is still running after the launch
/// timeout it is left alone, since some launchers stay in the foreground
/// with the browser.
pub fn open_in_browser(target: &str) -> Result<(), ExecError> {
    let argv = browser_command(target).ok_or(ExecError::Unsupported)?;
    launch(&argv, LAUNCH_TIMEOUT)
}

fn launch(argv: &[String], timeout: Duration) -> Result<(), ExecError> {
    let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ExecError::NotFound(argv.join(" ")));
        }
        Err(e) => return Err(e.into()),
    };

    match child.wait_timeout(timeout)? {
        Some(status) if status.success() => Ok(()),
        Some(status) => Err(ExecError::CommandFailed(argv.join(" "), status.code())),
        None => {
            tracing::debug!(command = %argv.join(" "), "launcher still running, not waiting");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(any(target_os = "macos", target_os = "linux", windows))]
    #[test]
    fn test_browser_command_ends_with_target() {
        let argv = browser_command("file:///tmp/help.html").unwrap();
        assert_eq!(argv.last().map(String::as_str), Some("file:///tmp/help.html"));
    }

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_does_not_wait_on_inherited_pipes() {
        let start = std::time::Instant::now();
        launch(&argv(&["sh", "-c", "sleep 4 &"]), Duration::from_secs(2)).unwrap();
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_reports_failure() {
        let res = launch(&argv(&["sh", "-c", "exit 4"]), Duration::from_secs(2));
        assert!(matches!(res, Err(ExecError::CommandFailed(_, Some(4)))));
    }

    #[test]
    fn test_launch_missing_program() {
        let res = launch(&argv(&["definitely-not-a-real-launcher-xyz"]), Duration::from_secs(1));
        assert!(matches!(res, Err(ExecError::NotFound(_))));
    }
}
