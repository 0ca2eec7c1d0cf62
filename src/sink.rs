// === Module Header (agents-tooling) START ===
// purpose: Resolve the single output destination and open it for the one write
// role: output/destination
// inputs: EffectiveConfig (flags + input string); InputKind tag
// outputs: Destination enum; an opened writer (file or stdout)
// side_effects: open() creates/truncates the target file
// invariants:
// - resolve() is pure: precedence is decided without touching the filesystem
// - Exactly one destination per run; -w beats -o; stdout is the fallback
// - derive_remote_filename never returns an empty or extensionless name
// errors: File creation failures bubble with the path in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::EffectiveConfig;
use crate::source::InputKind;

/// Name used when a URL's path has no usable final segment.
const DEFAULT_REMOTE_NAME: &str = "result.html";
/// Extension appended when the derived name has none.
const DEFAULT_EXTENSION: &str = "html";

/// Where the formatted document lands. Chosen once, never re-evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
  Stdout,
  File(PathBuf),
}

/// Ordered precedence, first match wins: overwrite-local, overwrite-remote
/// (derived name in the working directory), explicit `-o`, stdout.
pub fn resolve(cfg: &EffectiveConfig, kind: InputKind) -> Destination {
  if cfg.overwrite && kind == InputKind::Local {
    return Destination::File(PathBuf::from(&cfg.input));
  }

  if cfg.overwrite && kind == InputKind::Remote {
    return Destination::File(PathBuf::from(derive_remote_filename(&cfg.input)));
  }

  match &cfg.output {
    Some(name) => Destination::File(PathBuf::from(name)),
    None => Destination::Stdout,
  }
}

/// Last segment of the URL's path component, with fixed fallbacks: an empty
/// or root/current-directory segment becomes `result.html`, and a segment
/// without an extension gains `.html`. Query and fragment are ignored.
pub fn derive_remote_filename(url: &str) -> String {
  let rest = url
    .strip_prefix("http://")
    .or_else(|| url.strip_prefix("https://"))
    .unwrap_or(url);

  let path = match rest.find('/') {
    Some(idx) => &rest[idx..],
    None => "",
  };
  let path = path.split(['?', '#']).next().unwrap_or("");
  let name = path.rsplit('/').next().unwrap_or("");

  if name.is_empty() || name == "." {
    return DEFAULT_REMOTE_NAME.to_string();
  }

  if !name.contains('.') {
    return format!("{}.{}", name, DEFAULT_EXTENSION);
  }

  name.to_string()
}

impl Destination {
  /// The single side-effecting step: create (truncating) the target file or
  /// hand back stdout. Runs only after retrieval has succeeded, so a failed
  /// fetch never leaves an empty file behind.
  pub fn open(&self) -> Result<Box<dyn Write>> {
    match self {
      Destination::Stdout => Ok(Box::new(io::stdout())),
      Destination::File(path) => {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        Ok(Box::new(file))
      }
    }
  }
}
