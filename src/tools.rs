//! Wrappers around the external commands this tool drives. All font work
//! happens out of process: `otfinfo` inspects, `otftotfm` converts,
//! `fontforge` rescales, and `curl`/`unzip` fetch.

use crate::error::FatexError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run(mut command: Command, name: &'static str) -> Result<Output, FatexError> {
    let output = command
        .output()
        .map_err(|source| FatexError::ToolLaunch {
            command: name,
            source,
        })?;
    if !output.status.success() {
        return Err(FatexError::ToolFailed {
            command: name,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// The font's version string, via `otfinfo -v` ("Version 4.3.0" or similar).
pub fn otf_version(font: &Path) -> Result<String, FatexError> {
    let mut command = Command::new("otfinfo");
    command.arg("-v").arg(font);
    let output = run(command, "otfinfo")?;
    let text = stdout_text(&output);
    let version = text.split_whitespace().nth(1).map(str::to_string);
    version.ok_or(FatexError::ToolOutput {
        command: "otfinfo",
        output: text,
    })
}

/// The font's internal glyph names, via `otfinfo -g`, document order.
pub fn glyph_names(font: &Path) -> Result<Vec<String>, FatexError> {
    let mut command = Command::new("otfinfo");
    command.arg("-g").arg(font);
    let output = run(command, "otfinfo")?;
    Ok(stdout_text(&output)
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

/// Convert one encoding page to a tfm/pfb pair. Returns the map line
/// otftotfm prints on stdout; its stderr goes to the error log whether the
/// conversion worked or not.
pub fn convert_page(
    font: &Path,
    enc_file: &str,
    tfm_dir: &str,
    enc_dir: &str,
    type1_dir: &str,
    error_log: &mut File,
) -> Result<String, FatexError> {
    let mut command = Command::new("otftotfm");
    command
        .arg(font)
        .arg(format!("--literal-encoding={}", enc_file))
        .arg(format!("--tfm-directory={}", tfm_dir))
        .arg(format!("--encoding-directory={}", enc_dir))
        .arg(format!("--type1-directory={}", type1_dir));
    let output = command
        .output()
        .map_err(|source| FatexError::ToolLaunch {
            command: "otftotfm",
            source,
        })?;
    error_log
        .write_all(&output.stderr)
        .map_err(FatexError::io("otftotfm_errors.log"))?;
    if !output.status.success() {
        return Err(FatexError::ToolFailed {
            command: "otftotfm",
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(stdout_text(&output).trim().to_string())
}

/// Fetch a URL into the working directory, following redirects, silent
/// except for failures.
pub fn curl(url: &str) -> Result<(), FatexError> {
    let mut command = Command::new("curl");
    command.args(["-s", "-f", "-LOk", url]);
    run(command, "curl").map(|_| ())
}

pub fn unzip(archive: &str) -> Result<(), FatexError> {
    let mut command = Command::new("unzip");
    command.args(["-q", archive]);
    run(command, "unzip").map(|_| ())
}

/// Rescale a font to the given units per em, writing a new file.
pub fn rescale_upm(input: &str, output: &str, upm: u32) -> Result<(), FatexError> {
    let script = format!("Open($1); ScaleToEm({}); Generate($2)", upm);
    let mut command = Command::new("fontforge");
    command
        .args(["-lang=ff", "-c", &script, input, output])
        .stdout(Stdio::null());
    run(command, "fontforge").map(|_| ())
}
