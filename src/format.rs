// === Module Header (agents-tooling) START ===
// purpose: Pure HTML pretty-printer: one token per line, two spaces per depth
// role: formatter/collaborator
// inputs: Raw HTML text
// outputs: Re-indented HTML text; no I/O
// side_effects: none
// invariants:
// - Total: arbitrary input yields a best-effort result, never an error
// - Idempotent: format(format(s)) == format(s)
// - Raw-text elements (pre/textarea/script/style) are copied verbatim
// errors: none
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use memchr::{memchr, memmem};

const INDENT: &str = "  ";

fn matches_ignore_ascii_case(name: &[u8], set: &[&[u8]]) -> bool {
  set.iter().any(|&s| name.eq_ignore_ascii_case(s))
}

/// Elements that never take children and therefore never deepen the indent.
fn is_void(name: &[u8]) -> bool {
  matches_ignore_ascii_case(
    name,
    &[
      b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
      b"param", b"source", b"track", b"wbr",
    ],
  )
}

/// Elements whose content is copied through untouched.
fn is_raw_text(name: &[u8]) -> bool {
  matches_ignore_ascii_case(name, &[b"pre", b"textarea", b"script", b"style"])
}

#[inline]
fn is_name_char(b: u8) -> bool {
  b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[derive(Clone, Copy, Debug)]
struct TagInfo<'a> {
  name: &'a [u8],
  is_end: bool,
  self_closing: bool,
}

/// Find the '>' for a tag starting at `i` (s[i] == '<'), being quote-aware.
fn find_tag_end(s: &[u8], mut i: usize) -> Option<usize> {
  let n = s.len();
  i += 1;
  let mut quote: u8 = 0;
  while i < n {
    let b = s[i];
    if quote != 0 {
      if b == quote {
        quote = 0;
      }
    } else if b == b'"' || b == b'\'' {
      quote = b;
    } else if b == b'>' {
      return Some(i);
    }
    i += 1;
  }
  None
}

/// Extract tag name and end/self-closing flags from raw `<...>` bytes.
fn parse_tag_info(tag: &[u8]) -> TagInfo<'_> {
  let n = tag.len();
  let mut i = 1;

  let mut is_end = false;
  if i < n && tag[i] == b'/' {
    is_end = true;
    i += 1;
  }
  while i < n && tag[i].is_ascii_whitespace() {
    i += 1;
  }
  let start = i;
  while i < n && is_name_char(tag[i]) {
    i += 1;
  }
  let name = &tag[start..i];

  let mut j = n - 1;
  while j > 0 && tag[j - 1].is_ascii_whitespace() {
    j -= 1;
  }
  let self_closing = j >= 2 && tag[j - 1] == b'/';

  TagInfo {
    name,
    is_end,
    self_closing,
  }
}

/// Scan past a raw-text element's content: the index one past the '>' of the
/// matching end tag, or the end of input when unterminated.
fn raw_text_end(s: &[u8], mut i: usize, name: &[u8]) -> usize {
  let n = s.len();

  while i < n {
    let Some(pos) = memchr(b'<', &s[i..]).map(|off| i + off) else {
      return n;
    };

    if pos + 1 < n && s[pos + 1] == b'/' {
      let Some(end) = find_tag_end(s, pos) else {
        return n;
      };
      let info = parse_tag_info(&s[pos..=end]);
      if info.name.eq_ignore_ascii_case(name) {
        return end + 1;
      }
      i = end + 1;
      continue;
    }

    i = pos + 1;
  }

  n
}

struct Printer {
  out: String,
  depth: usize,
}

impl Printer {
  /// Start a fresh line at the current depth and append `token` verbatim.
  fn push_line(&mut self, token: &str) {
    if !self.out.is_empty() {
      self.out.push('\n');
    }
    for _ in 0..self.depth {
      self.out.push_str(INDENT);
    }
    self.out.push_str(token);
  }

  /// Emit a text run with whitespace runs collapsed; whitespace-only runs
  /// vanish entirely.
  fn push_text(&mut self, chunk: &str) {
    let mut words = chunk.split_whitespace();
    let Some(first) = words.next() else { return };

    let mut line = String::with_capacity(chunk.len());
    line.push_str(first);
    for w in words {
      line.push(' ');
      line.push_str(w);
    }
    self.push_line(&line);
  }
}

/// Re-indent `src`: one token per line, two spaces per nesting level.
///
/// Total by contract: any input produces a best-effort result, and running
/// the formatter over its own output changes nothing. Unterminated
/// constructs are kept as-is, and misnested end tags clamp the depth at
/// zero instead of failing.
pub fn format(src: &str) -> String {
  let bytes = src.as_bytes();
  let n = bytes.len();
  let mut p = Printer {
    out: String::with_capacity(src.len() + src.len() / 4),
    depth: 0,
  };
  let mut i = 0usize;

  while i < n {
    let next_lt = memchr(b'<', &bytes[i..]).map(|off| i + off).unwrap_or(n);

    if next_lt > i {
      p.push_text(&src[i..next_lt]);
      i = next_lt;
      continue;
    }

    // Comment: verbatim through "-->"
    if bytes[i..].starts_with(b"<!--") {
      match memmem::find(&bytes[i + 4..], b"-->") {
        Some(off) => {
          let end = i + 4 + off + 3;
          p.push_line(&src[i..end]);
          i = end;
        }
        None => {
          p.push_line(&src[i..]);
          break;
        }
      }
      continue;
    }

    // Doctype or processing instruction: verbatim, no depth change
    if i + 1 < n && (bytes[i + 1] == b'!' || bytes[i + 1] == b'?') {
      match find_tag_end(bytes, i) {
        Some(j) => {
          p.push_line(&src[i..=j]);
          i = j + 1;
        }
        None => {
          p.push_line(&src[i..]);
          break;
        }
      }
      continue;
    }

    // A '<' that never closes: keep the remainder as-is
    let Some(j) = find_tag_end(bytes, i) else {
      p.push_line(&src[i..]);
      break;
    };

    let tag = &bytes[i..=j];
    let info = parse_tag_info(tag);

    if info.is_end {
      p.depth = p.depth.saturating_sub(1);
      p.push_line(&src[i..=j]);
      i = j + 1;
      continue;
    }

    if is_raw_text(info.name) && !info.self_closing {
      let end = raw_text_end(bytes, j + 1, info.name);
      p.push_line(&src[i..end]);
      i = end;
      continue;
    }

    p.push_line(&src[i..=j]);
    if !info.self_closing && !info.name.is_empty() && !is_void(info.name) {
      p.depth += 1;
    }
    i = j + 1;
  }

  p.out
}
