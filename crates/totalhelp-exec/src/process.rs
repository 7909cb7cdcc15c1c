use std::collections::HashMap;
use std::io::{self, Read};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("No command given")]
    EmptyCommand,
    #[error("command not found: '{0}'")]
    NotFound(String),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with exit code {1:?}")]
    CommandFailed(String, Option<i32>),
    #[error("No browser launcher available on this platform")]
    Unsupported,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Output captured from a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Stdout followed by stderr. Some tools print their help to stderr.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

type Reader = Receiver<io::Result<Vec<u8>>>;

/// How long to wait for the pipes to close after the process group is killed.
const KILL_GRACE: Duration = Duration::from_millis(200);

/// Run `argv` as a child process and capture its stdout and stderr.
///
/// Environment variables in `env` are layered over the inherited environment.
/// Stdin is closed so tools that wait for input cannot stall the caller.
///
/// # Arguments
///
/// * `argv` - Program followed by its arguments
/// * `env` - Optional extra environment variables
/// * `timeout` - Optional wall-clock limit for the whole call
///
/// # Notes
///
/// Non-zero exit codes are not errors here; callers inspect
/// [`Captured::code`]. Both streams are drained on helper threads so a
/// chatty child cannot block on a full pipe while we wait for it.
///
/// On unix the child leads its own process group. When the deadline passes,
/// either before the child exits or while a leftover descendant still holds
/// one of the pipes, the whole group is killed.
pub fn run_captured(
    argv: &[String],
    env: Option<&HashMap<String, String>>,
    timeout: Option<Duration>,
) -> Result<Captured, ExecError> {
    let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
    let command_str = argv.join(" ");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(vars) = env {
        cmd.envs(vars);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ExecError::NotFound(command_str));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(command = %command_str, pid = child.id(), "spawned child process");

    let deadline = timeout.map(|duration| Instant::now() + duration);
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match timeout {
        Some(duration) => match child.wait_timeout(duration)? {
            Some(status) => status,
            None => {
                kill_group(&mut child);
                child.wait()?;
                return Err(ExecError::Timeout(command_str, duration));
            }
        },
        None => child.wait()?,
    };

    let mut collector = Collector {
        child: &mut child,
        deadline,
        killed: false,
    };
    let stdout = collector.collect(stdout);
    let stderr = collector.collect(stderr);
    let (stdout, stderr) = match (stdout, stderr) {
        (Some(stdout), Some(stderr)) => (stdout?, stderr?),
        _ => {
            let duration = timeout.unwrap_or_default();
            return Err(ExecError::Timeout(command_str, duration));
        }
    };

    Ok(Captured {
        code: status.code(),
        stdout,
        stderr,
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Reader> {
    pipe.map(|mut pipe| {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let result = pipe.read_to_end(&mut buf).map(|_| buf);
            let _ = tx.send(result);
        });
        rx
    })
}

/// Gathers reader output once the direct child has exited.
struct Collector<'a> {
    child: &'a mut Child,
    deadline: Option<Instant>,
    killed: bool,
}

impl Collector<'_> {
    /// `None` when the pipe was still open after the deadline and the kill.
    fn collect(&mut self, reader: Option<Reader>) -> Option<Result<String, ExecError>> {
        let Some(reader) = reader else {
            return Some(Ok(String::new()));
        };

        let received = match self.deadline {
            None => reader.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                match reader.recv_timeout(remaining) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !self.killed {
                            tracing::debug!(
                                pid = self.child.id(),
                                "output still open at deadline, killing process group"
                            );
                            kill_group(self.child);
                            self.killed = true;
                        }
                        reader.recv_timeout(KILL_GRACE)
                    }
                    other => other,
                }
            }
        };

        match received {
            Ok(bytes) => Some(
                bytes
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                    .map_err(ExecError::from),
            ),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(ExecError::Io(io::Error::other(
                "output reader thread panicked",
            )))),
        }
    }
}

#[cfg(unix)]
fn kill_group(child: &mut Child) {
    let Ok(pgid) = libc::pid_t::try_from(child.id()) else {
        let _ = child.kill();
        return;
    };
    // SAFETY: kill(2) has no memory-safety preconditions.
    let rc = unsafe { libc::kill(-pgid, libc::SIGKILL) };
    if rc != 0 {
        let _ = child.kill();
    }
}

#[cfg(not(unix))]
fn kill_group(child: &mut Child) {
    let _ = child.kill();
}
