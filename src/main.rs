use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

mod cli;
mod format;
mod sink;
mod source;
mod util;

use crate::cli::{Cli, normalize};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: classify the input and pull its full text into memory
  let kind = source::classify(&cfg.input);
  let raw = source::retrieve(&cfg.input, kind)?;

  // Phase 3: pick the one destination, then format and write once
  let dest = sink::resolve(&cfg, kind);
  let mut out = dest.open()?;

  let pretty = format::format(&raw);
  out.write_all(pretty.as_bytes()).context("writing formatted output")?;

  Ok(())
}
