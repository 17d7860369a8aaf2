//! Line-oriented variable substitution with a temp-file swap.
//!
//! Reads the source file line by line, replaces the first occurrence of the
//! variable token on each line, writes the result to a `.tmp` sibling, then
//! renames the sibling over the source. Run once per variable to expand
//! several variables.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Summary of a completed substitution run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionReport {
    pub path: PathBuf,
    /// Lines written to the rewritten file.
    pub lines_written: usize,
    /// Lines on which the variable token was found and replaced.
    pub lines_replaced: usize,
}

/// Replace the first occurrence of `variable` per line of the file at `path`
/// with `value`, rewriting the file in place.
///
/// The token is a literal substring, not a pattern. Occurrences after the
/// first on a line are left alone. The rewrite goes through a `.tmp` sibling
/// that is renamed over the source, so readers see either the old content or
/// the new content, never a partial write.
pub fn substitute(path: &Path, variable: &str, value: &str) -> Result<SubstitutionReport> {
    if variable.is_empty() {
        return Err(Error::InvalidArgument {
            field: "variable",
            problem: "Variable token cannot be empty".to_string(),
        });
    }

    // Open the source before touching the sibling so a missing file
    // leaves nothing behind.
    let source = File::open(path).map_err(|e| Error::from_io("open source file", path, e))?;

    let tmp_path = tmp_sibling(path);
    let tmp =
        File::create(&tmp_path).map_err(|e| Error::from_io("create temp file", &tmp_path, e))?;

    let (lines_written, lines_replaced) =
        match copy_substituted(source, tmp, variable, value, &tmp_path) {
            Ok(counts) => counts,
            Err(e) => {
                let _ = fs::remove_file(&tmp_path);
                return Err(e);
            }
        };

    // Both handles are closed by now; promote the sibling.
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::from_io("rename temp file", path, e));
    }

    Ok(SubstitutionReport {
        path: path.to_path_buf(),
        lines_written,
        lines_replaced,
    })
}

/// Sibling path the rewritten content is staged at: `<path>.tmp`.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

fn copy_substituted(
    source: File,
    tmp: File,
    variable: &str,
    value: &str,
    tmp_path: &Path,
) -> Result<(usize, usize)> {
    let reader = BufReader::new(source);
    let mut writer = BufWriter::new(tmp);

    let mut written = 0usize;
    let mut replaced = 0usize;

    for line in reader.lines() {
        let line = line.map_err(|e| Error::Io {
            op: "read source line",
            source: e,
        })?;

        if line.contains(variable) {
            replaced += 1;
        }

        writeln!(writer, "{}", line.replacen(variable, value, 1))
            .map_err(|e| Error::from_io("write temp file", tmp_path, e))?;
        written += 1;
    }

    // The rewrite loop runs at least once before the end-of-stream check,
    // so a zero-byte source produces a single empty output line.
    if written == 0 {
        writeln!(writer).map_err(|e| Error::from_io("write temp file", tmp_path, e))?;
        written = 1;
    }

    writer
        .flush()
        .map_err(|e| Error::from_io("write temp file", tmp_path, e))?;

    Ok((written, replaced))
}
