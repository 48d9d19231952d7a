use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FatexError {
    #[error("Can't run {command}: {source}")]
    ToolLaunch {
        command: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{command} failed ({status}): {stderr}")]
    ToolFailed {
        command: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Unexpected output from {command}: {output:?}")]
    ToolOutput {
        command: &'static str,
        output: String,
    },

    #[error("IO error for file {path}: '{source}'")]
    IO {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Alias chain starting at '{alias}' loops back on itself")]
    AliasCycle { alias: String },

    #[error("{glyphs} glyphs need more encoding pages than the {max} this tool can name")]
    TooManyPages { glyphs: usize, max: usize },
}

impl FatexError {
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> FatexError {
        let path = path.into();
        move |source| FatexError::IO { path, source }
    }
}
