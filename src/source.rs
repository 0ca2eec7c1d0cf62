// === Module Header (agents-tooling) START ===
// purpose: Classify the positional input and retrieve its raw HTML text
// role: input/retrieval
// inputs: Input string (path or URL); filesystem; HTTP via a default ureq agent
// outputs: InputKind tag; full document text in memory
// side_effects: Local file reads; one blocking GET per Remote input
// invariants:
// - Classification happens once and is never re-evaluated
// - Partial reads are discarded; callers only ever see complete text
// - File handles and response bodies are released when retrieval returns
// errors: Open/read/request failures bubble with the input in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// How the positional argument should be fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
  Local,
  Remote,
}

/// Inputs beginning with an http(s) scheme are fetched over the network;
/// everything else is treated as a filesystem path.
pub fn classify(input: &str) -> InputKind {
  static RE_REMOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

  if RE_REMOTE.is_match(input) {
    InputKind::Remote
  } else {
    InputKind::Local
  }
}

pub fn retrieve(input: &str, kind: InputKind) -> Result<String> {
  match kind {
    InputKind::Local => read_local(input),
    InputKind::Remote => fetch_remote(input),
  }
}

fn read_local(path: &str) -> Result<String> {
  let mut file = File::open(path).with_context(|| format!("opening {}", path))?;
  let mut data = String::new();

  file
    .read_to_string(&mut data)
    .with_context(|| format!("reading {}", path))?;

  Ok(data)
}

/// One blocking GET, whole body into memory. No retries, no timeout tuning;
/// whatever the default agent does is what happens.
fn fetch_remote(url: &str) -> Result<String> {
  let agent: ureq::Agent = ureq::Agent::config_builder().build().into();

  let mut resp = agent
    .get(url)
    .call()
    .with_context(|| format!("requesting {}", url))?;

  let body = resp
    .body_mut()
    .read_to_string()
    .with_context(|| format!("reading response body from {}", url))?;

  Ok(body)
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn http_and_https_inputs_are_remote() {
    assert_eq!(classify("http://example.com/page"), InputKind::Remote);
    assert_eq!(classify("https://example.com/"), InputKind::Remote);
  }

  #[test]
  fn everything_else_is_local() {
    assert_eq!(classify("index.html"), InputKind::Local);
    assert_eq!(classify("/tmp/page.html"), InputKind::Local);
    assert_eq!(classify("ftp://example.com/x"), InputKind::Local);
    // scheme must be a prefix, not merely present
    assert_eq!(classify("notes about http://example.com"), InputKind::Local);
    assert_eq!(classify(""), InputKind::Local);
  }

  proptest! {
    #[test]
    fn scheme_prefixed_inputs_classify_as_remote(rest in "[ -~]{0,40}") {
      prop_assert_eq!(classify(&format!("http://{}", rest)), InputKind::Remote);
      prop_assert_eq!(classify(&format!("https://{}", rest)), InputKind::Remote);
    }

    #[test]
    fn scheme_free_inputs_classify_as_local(path in "[A-Za-z0-9._/-]{0,32}") {
      prop_assume!(!path.starts_with("http://") && !path.starts_with("https://"));
      prop_assert_eq!(classify(&path), InputKind::Local);
    }
  }

  #[test]
  fn read_local_returns_whole_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(&path, "<p>hi</p>").unwrap();

    let got = read_local(path.to_str().unwrap()).unwrap();
    assert_eq!(got, "<p>hi</p>");
  }

  #[test]
  fn read_local_missing_file_is_error() {
    let err = read_local("/definitely/not/a/real/file.html").unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("opening"));
  }

  #[test]
  fn fetch_remote_reads_local_http_body() {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
      if let Ok((mut stream, _)) = listener.accept() {
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        let body = "<p>remote</p>";
        let resp = format!(
          "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
          body.len(),
          body
        );
        let _ = stream.write_all(resp.as_bytes());
      }
    });

    let url = format!("http://{}", addr);
    let got = fetch_remote(&url).unwrap();
    handle.join().unwrap();
    assert_eq!(got, "<p>remote</p>");
  }

  #[test]
  fn fetch_remote_surfaces_http_error_statuses() {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
      if let Ok((mut stream, _)) = listener.accept() {
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        let resp = "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
        let _ = stream.write_all(resp.as_bytes());
      }
    });

    let url = format!("http://{}", addr);
    let res = fetch_remote(&url);
    handle.join().unwrap();
    assert!(res.is_err());
  }

  #[test]
  fn fetch_remote_connection_failure_is_error() {
    assert!(fetch_remote("http://invalid.localdomain.invalid/").is_err());
  }
}
