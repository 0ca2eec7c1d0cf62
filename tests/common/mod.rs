use std::thread::JoinHandle;

/// Small fixture document plus the exact shape the formatter gives it.
#[allow(dead_code)]
pub const RAW_HTML: &str =
  "<html><head><title>t</title></head><body><p>hello   world</p></body></html>";

#[allow(dead_code)]
pub const PRETTY_HTML: &str = "<html>\n  <head>\n    <title>\n      t\n    </title>\n  </head>\n  <body>\n    <p>\n      hello world\n    </p>\n  </body>\n</html>";

/// Serve `body` as text/html for exactly one request on an ephemeral port.
/// Returns the server thread handle and the base URL (no trailing slash).
#[allow(dead_code)]
pub fn serve_html_once(body: &'static str) -> (JoinHandle<()>, String) {
  use std::io::{Read, Write};
  use std::net::TcpListener;

  let listener = TcpListener::bind("127.0.0.1:0").unwrap();
  let addr = listener.local_addr().unwrap();

  let handle = std::thread::spawn(move || {
    if let Ok((mut stream, _)) = listener.accept() {
      let mut buf = [0u8; 1024];
      let _ = stream.read(&mut buf);
      let resp = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
      );
      let _ = stream.write_all(resp.as_bytes());
    }
  });

  (handle, format!("http://{}", addr))
}
