use anyhow::{Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "htmlfmt",
    version,
    about = "Pretty-print HTML from a local file or a remote URL",
    long_about = None
)]
pub struct Cli {
  /// File path or http(s):// URL to read HTML from
  pub input: Option<String>,

  /// Write the result back over the source file (for a URL: into a file
  /// named after its last path segment, in the current directory)
  #[arg(short = 'w')]
  pub overwrite: bool,

  /// Save the result to this file instead of stdout
  #[arg(short = 'o', value_name = "NAME", default_value = "")]
  pub output: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub input: String,
  pub overwrite: bool,
  pub output: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let Some(input) = cli.input else {
    bail!("provide a file path or an http(s):// URL to format")
  };

  // `-o` mirrors a plain string flag with an empty default; empty means unset.
  let output = if cli.output.is_empty() { None } else { Some(cli.output) };

  Ok(EffectiveConfig {
    input,
    overwrite: cli.overwrite,
    output,
  })
}
