// runs the typesetting tool with a timeout

use super::config::BuildConfig;
use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// characters of build output kept for diagnostics
pub const OUTPUT_TAIL_CHARS: usize = 1000;

/// successful build result
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub artifact: PathBuf,
    pub elapsed: Duration,
    pub stdout: String,
}

/// last `max` characters of `text`
pub fn tail_chars(text: &str, max: usize) -> &str {
    match text.char_indices().rev().nth(max.saturating_sub(1)) {
        Some((index, _)) if max > 0 => &text[index..],
        Some(_) => "",
        None => text,
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

type Chunk = (Stream, Vec<u8>);

fn drain<R: Read + Send + 'static>(source: Option<R>, stream: Stream, tx: Sender<Chunk>) {
    let Some(mut source) = source else {
        return;
    };
    thread::spawn(move || {
        let mut buffer = [0u8; 8192];
        loop {
            match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send((stream, buffer[..n].to_vec())).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                // a read error only truncates the diagnostics
                Err(_) => break,
            }
        }
    });
}

#[derive(Debug, Default)]
struct CapturedOutput {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CapturedOutput {
    /// receive chunks until both pipes close or `deadline` passes
    ///
    /// returns `false` when the deadline cut the output short
    fn collect_until(&mut self, rx: &Receiver<Chunk>, deadline: Instant) -> bool {
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok((Stream::Stdout, bytes)) => self.stdout.extend_from_slice(&bytes),
                Ok((Stream::Stderr, bytes)) => self.stderr.extend_from_slice(&bytes),
                Err(RecvTimeoutError::Disconnected) => return true,
                Err(RecvTimeoutError::Timeout) => return false,
            }
        }
    }

    fn into_strings(self) -> (String, String) {
        (
            String::from_utf8_lossy(&self.stdout).into_owned(),
            String::from_utf8_lossy(&self.stderr).into_owned(),
        )
    }
}

pub struct LatexBuilder;

impl LatexBuilder {
    /// run the configured build in `tex_dir` and check for the artifact
    pub fn build(config: &BuildConfig, tex_dir: &Path) -> Result<BuildOutcome> {
        if !tex_dir.is_dir() {
            return Err(Error::FileNotFound {
                path: tex_dir.to_path_buf(),
            });
        }

        debug!(
            "running {} {} {} in {}",
            config.command,
            config.args.join(" "),
            config.main_file,
            tex_dir.display()
        );

        let started = Instant::now();
        let mut child = Command::new(&config.command)
            .args(&config.args)
            .arg(&config.main_file)
            .current_dir(tex_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::BuildToolNotFound {
                    command: config.command.clone(),
                },
                _ => Error::IoError(e),
            })?;

        let (tx, rx) = mpsc::channel();
        drain(child.stdout.take(), Stream::Stdout, tx.clone());
        drain(child.stderr.take(), Stream::Stderr, tx);

        let timeout = config.timeout();
        let deadline = started + timeout;
        let status: ExitStatus = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }

            let elapsed = started.elapsed();
            if elapsed >= timeout {
                warn!(
                    "{} exceeded {}s, terminating",
                    config.command,
                    timeout.as_secs()
                );
                let _ = child.kill();
                let _ = child.wait();
                // readers are left detached, grandchildren may still hold the pipes
                return Err(Error::BuildTimeout { timeout });
            }

            thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
        };

        let mut output = CapturedOutput::default();
        if !output.collect_until(&rx, deadline) {
            // the tool exited but something it started still holds the pipes
            warn!(
                "{} output still open after {}s, using what was read",
                config.command,
                timeout.as_secs()
            );
        }
        let (stdout, stderr) = output.into_strings();
        let elapsed = started.elapsed();

        if !status.success() {
            let log = if stdout.trim().is_empty() {
                &stderr
            } else {
                &stdout
            };
            return Err(Error::BuildFailed {
                status: status.code(),
                output_tail: tail_chars(log, OUTPUT_TAIL_CHARS).to_string(),
            });
        }

        let artifact = tex_dir.join(&config.artifact);
        if !artifact.exists() {
            return Err(Error::ArtifactMissing { path: artifact });
        }

        info!(
            "built {} in {:.1}s",
            artifact.display(),
            elapsed.as_secs_f64()
        );

        Ok(BuildOutcome {
            artifact,
            elapsed,
            stdout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_chars() {
        assert_eq!(tail_chars("abcdef", 3), "def");
        assert_eq!(tail_chars("abc", 10), "abc");
        assert_eq!(tail_chars("abc", 3), "abc");
        assert_eq!(tail_chars("abc", 0), "");
        assert_eq!(tail_chars("", 5), "");
        assert_eq!(tail_chars("größe", 3), "öße");
    }

    #[test]
    fn test_tail_chars_long_output() {
        let log = "x".repeat(1500) + "! LaTeX Error";
        let tail = tail_chars(&log, OUTPUT_TAIL_CHARS);
        assert_eq!(tail.chars().count(), OUTPUT_TAIL_CHARS);
        assert!(tail.ends_with("! LaTeX Error"));
    }

    #[test]
    fn test_collect_until_disconnect() {
        let (tx, rx) = mpsc::channel();
        tx.send((Stream::Stdout, b"Output written".to_vec())).unwrap();
        tx.send((Stream::Stderr, b"warning".to_vec())).unwrap();
        drop(tx);

        let mut output = CapturedOutput::default();
        assert!(output.collect_until(&rx, Instant::now() + Duration::from_secs(5)));
        let (stdout, stderr) = output.into_strings();
        assert_eq!(stdout, "Output written");
        assert_eq!(stderr, "warning");
    }

    #[test]
    fn test_collect_until_deadline_keeps_partial_output() {
        let (tx, rx) = mpsc::channel();
        tx.send((Stream::Stdout, b"fail\n".to_vec())).unwrap();

        let started = Instant::now();
        let mut output = CapturedOutput::default();
        // the sender stays alive, as when a background process holds the pipe
        assert!(!output.collect_until(&rx, started + Duration::from_millis(200)));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(output.into_strings().0, "fail\n");
        drop(tx);
    }

    #[test]
    fn test_missing_tex_dir() {
        let result = LatexBuilder::build(
            &BuildConfig::default(),
            Path::new("/nonexistent/docstamp/tex"),
        );
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_missing_build_tool() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = BuildConfig::default().command("docstamp-no-such-tool");

        let result = LatexBuilder::build(&config, temp_dir.path());
        assert!(matches!(result, Err(Error::BuildToolNotFound { .. })));
    }
}
