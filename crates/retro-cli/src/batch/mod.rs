// crates/retro-cli/src/batch/mod.rs
//
// Batch .avi -> .mp4 conversion through an external transcoder.
//
// One child process per input, run sequentially:
//   <tool> -i <abs input> <abs output>
// Failures are reported and counted, never retried.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use anyhow::Context;

pub const SOURCE_EXT: &str = ".avi";
pub const TARGET_EXT: &str = ".mp4";
pub const DEFAULT_DIR: &str = "jsmecavideo/videos";
pub const DEFAULT_TOOL: &str = "ffmpeg";

/// One planned conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Entry name as found in the input directory, e.g. `a.avi`.
    pub file_name: String,
    /// `file_name` without the source extension.
    pub stem: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    Failed(String),
}

/// The external collaborator that turns one input file into one output file.
pub trait Transcoder {
    fn transcode(&mut self, input: &Path, output: &Path) -> Outcome;
}

/// Runs an external program as `<program> -i <input> <output>` and waits for it.
pub struct ExternalTool {
    program: OsString,
}

impl ExternalTool {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ExternalTool {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl Transcoder for ExternalTool {
    fn transcode(&mut self, input: &Path, output: &Path) -> Outcome {
        let status = Command::new(&self.program)
            .arg("-i")
            .arg(input)
            .arg(output)
            .status();

        match status {
            Ok(s) if s.success() => Outcome::Converted,
            Ok(s) => Outcome::Failed(match s.code() {
                Some(code) => format!("{} exited with status {code}", self.program.to_string_lossy()),
                None => format!("{} terminated by signal", self.program.to_string_lossy()),
            }),
            Err(e) => Outcome::Failed(format!("spawn {}: {e}", self.program.to_string_lossy())),
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Job>,
    pub failed: Vec<(Job, String)>,
    /// Jobs listed but not run (`dry_run`).
    pub planned: Vec<Job>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// `a.avi` -> `a`. Case-sensitive; a bare `.avi` has no stem.
pub fn output_stem(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(SOURCE_EXT).filter(|s| !s.is_empty())
}

/// Make `p` absolute against the current working directory, dropping `.` components.
pub fn absolute(p: &Path) -> std::io::Result<PathBuf> {
    let base = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };
    Ok(base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

/// List convertible entries of `dir`, sorted by name.
pub fn plan(dir: &Path, out_dir: &Path) -> anyhow::Result<Vec<Job>> {
    let dir = absolute(dir).context("resolve input dir")?;
    let out_dir = absolute(out_dir).context("resolve output dir")?;

    let mut jobs = Vec::new();
    let entries = std::fs::read_dir(&dir).with_context(|| format!("read dir {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read dir entry in {}", dir.display()))?;
        let ft = entry.file_type()?;
        if ft.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!(name = ?name, "skipping non-utf8 entry");
            continue;
        };
        let Some(stem) = output_stem(name) else {
            continue;
        };

        jobs.push(Job {
            file_name: name.to_string(),
            stem: stem.to_string(),
            input: dir.join(name),
            output: out_dir.join(format!("{stem}{TARGET_EXT}")),
        });
    }

    jobs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(jobs)
}

/// Convert every `.avi` in `dir`, writing progress lines to `console`.
///
/// Returns an error only when the directory cannot be listed or the console
/// cannot be written; per-file failures land in the report.
pub fn run_batch<T: Transcoder, W: Write>(
    dir: &Path,
    out_dir: &Path,
    tool: &mut T,
    dry_run: bool,
    console: &mut W,
) -> anyhow::Result<BatchReport> {
    let abs_dir = absolute(dir).context("resolve input dir")?;
    writeln!(console, "Starting conversion of all videos to mp4 in {}", abs_dir.display())?;

    let jobs = plan(&abs_dir, out_dir)?;
    tracing::info!(dir = %abs_dir.display(), files = jobs.len(), dry_run, "batch planned");

    let mut report = BatchReport::default();
    for job in jobs {
        writeln!(
            console,
            "Found {} file: {}, converting to {}{}",
            SOURCE_EXT, job.file_name, job.stem, TARGET_EXT
        )?;

        if dry_run {
            writeln!(console, "  -i {} {}", job.input.display(), job.output.display())?;
            report.planned.push(job);
            continue;
        }

        tracing::debug!(input = %job.input.display(), output = %job.output.display(), "transcode");
        match tool.transcode(&job.input, &job.output) {
            Outcome::Converted => report.converted.push(job),
            Outcome::Failed(why) => {
                tracing::warn!(file = %job.file_name, "conversion failed: {why}");
                report.failed.push((job, why));
            }
        }
    }

    writeln!(
        console,
        "Finished conversion of all videos to mp4 (converted={} failed={})",
        report.converted.len(),
        report.failed.len()
    )?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        calls: Vec<(PathBuf, PathBuf)>,
        fail_on: Option<&'static str>,
    }

    impl Transcoder for Recording {
        fn transcode(&mut self, input: &Path, output: &Path) -> Outcome {
            self.calls.push((input.to_path_buf(), output.to_path_buf()));
            match self.fail_on {
                Some(n) if input.ends_with(n) => Outcome::Failed("nope".into()),
                _ => Outcome::Converted,
            }
        }
    }

    fn videos() -> tempfile::TempDir {
        let d = tempfile::tempdir().unwrap();
        for n in ["b.avi", "a.avi", "c.txt", "d.AVI", ".avi"] {
            std::fs::write(d.path().join(n), b"x").unwrap();
        }
        std::fs::create_dir(d.path().join("nested.avi")).unwrap();
        d
    }

    #[test]
    fn absolute_drops_cur_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute(Path::new(".")).unwrap(), cwd);
        assert_eq!(absolute(Path::new("./x/./y")).unwrap(), cwd.join("x").join("y"));
        assert_eq!(absolute(Path::new("/a/./b")).unwrap(), PathBuf::from("/a/b"));
    }

    #[test]
    fn stems() {
        assert_eq!(output_stem("clip.avi"), Some("clip"));
        assert_eq!(output_stem("clip.avi.avi"), Some("clip.avi"));
        assert_eq!(output_stem("clip.AVI"), None);
        assert_eq!(output_stem(".avi"), None);
        assert_eq!(output_stem("clip.mp4"), None);
    }

    #[test]
    fn only_avi_files_are_converted() {
        let src = videos();
        let out = tempfile::tempdir().unwrap();
        let mut tool = Recording::default();
        let mut console = Vec::new();

        let rep = run_batch(src.path(), out.path(), &mut tool, false, &mut console).unwrap();

        assert_eq!(
            tool.calls,
            vec![
                (src.path().join("a.avi"), out.path().join("a.mp4")),
                (src.path().join("b.avi"), out.path().join("b.mp4")),
            ]
        );
        assert!(tool.calls.iter().all(|(i, o)| i.is_absolute() && o.is_absolute()));
        assert_eq!(rep.converted.len(), 2);
        assert!(rep.is_success());

        let text = String::from_utf8(console).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Starting conversion of all videos to mp4 in "));
        assert_eq!(lines[1], "Found .avi file: a.avi, converting to a.mp4");
        assert_eq!(lines[2], "Found .avi file: b.avi, converting to b.mp4");
        assert_eq!(lines[3], "Finished conversion of all videos to mp4 (converted=2 failed=0)");
        assert!(!text.contains("c.txt"));
    }

    #[test]
    fn failures_are_counted_and_batch_continues() {
        let src = videos();
        let out = tempfile::tempdir().unwrap();
        let mut tool = Recording {
            fail_on: Some("a.avi"),
            ..Default::default()
        };
        let mut console = Vec::new();

        let rep = run_batch(src.path(), out.path(), &mut tool, false, &mut console).unwrap();
        assert_eq!(tool.calls.len(), 2);
        assert_eq!(rep.failed.len(), 1);
        assert_eq!(rep.failed[0].0.file_name, "a.avi");
        assert_eq!(rep.converted.len(), 1);
        assert!(!rep.is_success());
    }

    #[test]
    fn dry_run_invokes_nothing() {
        let src = videos();
        let mut tool = Recording::default();
        let mut console = Vec::new();

        let rep = run_batch(src.path(), src.path(), &mut tool, true, &mut console).unwrap();
        assert!(tool.calls.is_empty());
        assert_eq!(rep.planned.len(), 2);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let d = tempfile::tempdir().unwrap();
        let missing = d.path().join("nope");
        let mut console = Vec::new();
        let err = run_batch(&missing, d.path(), &mut Recording::default(), false, &mut console).unwrap_err();
        assert!(format!("{err:#}").contains("read dir"));
    }

    #[test]
    fn spawn_failure_is_reported() {
        let mut tool = ExternalTool::new("retro-cli-no-such-transcoder");
        match tool.transcode(Path::new("/tmp/a.avi"), Path::new("/tmp/a.mp4")) {
            Outcome::Failed(why) => assert!(why.starts_with("spawn ")),
            Outcome::Converted => panic!("missing tool reported success"),
        }
    }
}
