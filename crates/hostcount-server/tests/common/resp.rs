//! Minimal RESP server on loopback for exercising the Redis backend without a
//! real Redis.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use hostcount_server::config::StoreConfig;

/// Reply to one command (`Some`) or close the connection (`None`). The first
/// argument is the zero-based index of the accepted connection.
type Responder = dyn Fn(usize, &[Vec<u8>]) -> Option<Vec<u8>> + Send + Sync;

pub struct FakeRedis {
    addr: SocketAddr,
    conns: Arc<AtomicUsize>,
}

impl FakeRedis {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(usize, &[Vec<u8>]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let conns = Arc::new(AtomicUsize::new(0));
        let respond: Arc<Responder> = Arc::new(respond);

        let accepted = Arc::clone(&conns);
        tokio::spawn(async move {
            while let Ok((sock, _)) = listener.accept().await {
                let idx = accepted.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(serve(sock, idx, Arc::clone(&respond)));
            }
        });

        Self { addr, conns }
    }

    pub fn connections(&self) -> usize {
        self.conns.load(Ordering::SeqCst)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            host: self.addr.ip().to_string(),
            port: self.addr.port(),
            db: 0,
        }
    }
}

async fn serve(mut sock: TcpStream, idx: usize, respond: Arc<Responder>) {
    let mut buf = Vec::new();
    loop {
        while let Some((args, used)) = parse_command(&buf) {
            buf.drain(..used);
            match respond(idx, &args) {
                Some(reply) => {
                    if sock.write_all(&reply).await.is_err() {
                        return;
                    }
                }
                None => return,
            }
        }
        match sock.read_buf(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
    }
}

/// Parse one `*N` array of bulk strings. `None` until the command is complete.
fn parse_command(buf: &[u8]) -> Option<(Vec<Vec<u8>>, usize)> {
    let (n, mut pos) = read_header(buf, 0, b'*')?;
    let mut args = Vec::with_capacity(n);
    for _ in 0..n {
        let (len, start) = read_header(buf, pos, b'$')?;
        let end = start + len;
        if buf.len() < end + 2 {
            return None;
        }
        args.push(buf[start..end].to_vec());
        pos = end + 2;
    }
    Some((args, pos))
}

fn read_header(buf: &[u8], pos: usize, prefix: u8) -> Option<(usize, usize)> {
    if buf.get(pos) != Some(&prefix) {
        return None;
    }
    let rel = buf[pos..].windows(2).position(|w| w == b"\r\n")?;
    let n = std::str::from_utf8(&buf[pos + 1..pos + rel]).ok()?.parse().ok()?;
    Some((n, pos + rel + 2))
}

/// Upper-cased command name.
pub fn command(args: &[Vec<u8>]) -> Vec<u8> {
    args.first().map(|a| a.to_ascii_uppercase()).unwrap_or_default()
}

/// Replies for the commands a client may send while setting up a connection.
pub fn setup_reply(args: &[Vec<u8>]) -> Option<Vec<u8>> {
    match command(args).as_slice() {
        b"CLIENT" | b"SELECT" => Some(simple("OK")),
        b"PING" => Some(simple("PONG")),
        _ => None,
    }
}

pub fn simple(s: &str) -> Vec<u8> {
    format!("+{s}\r\n").into_bytes()
}

pub fn error(msg: &str) -> Vec<u8> {
    format!("-{msg}\r\n").into_bytes()
}

pub fn integer(n: i64) -> Vec<u8> {
    format!(":{n}\r\n").into_bytes()
}

pub fn bulk(data: &[u8]) -> Vec<u8> {
    let mut out = format!("${}\r\n", data.len()).into_bytes();
    out.extend_from_slice(data);
    out.extend_from_slice(b"\r\n");
    out
}

pub fn nil() -> Vec<u8> {
    b"$-1\r\n".to_vec()
}

pub fn array(items: Vec<Vec<u8>>) -> Vec<u8> {
    let mut out = format!("*{}\r\n", items.len()).into_bytes();
    for item in items {
        out.extend(bulk(&item));
    }
    out
}
