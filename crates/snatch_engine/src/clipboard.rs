use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use snatch_logging::snatch_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard program found on PATH (tried {tried})")]
    NoTool { tried: String },
    #[error("failed to run {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("copy to clipboard failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },
}

/// Destination for the newline-joined link block.
pub trait ClipboardSink {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard reached through its command line tool.
///
/// The text is written to the tool's stdin, never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl SystemClipboard {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// First clipboard tool for this platform that is present on `PATH`.
    pub fn detect() -> Result<Self, ClipboardError> {
        let path = std::env::var_os("PATH").unwrap_or_default();
        Self::detect_in(&path)
    }

    pub fn detect_in(search_path: &OsStr) -> Result<Self, ClipboardError> {
        for (name, args) in CANDIDATES {
            if let Some(program) = find_program(search_path, name) {
                snatch_debug!("Using clipboard program {:?}", program);
                return Ok(Self::new(
                    program,
                    args.iter().map(|arg| arg.to_string()).collect(),
                ));
            }
        }
        Err(ClipboardError::NoTool {
            tried: CANDIDATES
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let spawn_err = |source| ClipboardError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(spawn_err)?;
        }

        let output = child.wait_with_output().map_err(spawn_err)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ClipboardError::Failed {
                status: output.status.to_string(),
                stderr: if stderr.is_empty() {
                    "<no command output>".to_string()
                } else {
                    stderr
                },
            });
        }
        Ok(())
    }
}

type Candidate = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CANDIDATES: &[Candidate] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[Candidate] = &[("clip.exe", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[Candidate] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

fn find_program(search_path: &OsStr, name: &str) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
