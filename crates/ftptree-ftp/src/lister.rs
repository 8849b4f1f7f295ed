//! Blocking FTP directory lister.

use std::io::{BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use ftptree_core::{DirectoryLister, ListError};

use crate::address::FtpAddress;
use crate::config::ConnectionConfig;
use crate::reply::{Reply, parse_passive_address};

/// Lists remote folders with `LIST` over a fresh control connection per call.
#[derive(Debug, Clone, Default)]
pub struct FtpLister {
    config: ConnectionConfig,
}

impl FtpLister {
    /// Create a lister with the given connection settings.
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    fn list_address(&self, address: &FtpAddress, path: &str) -> Result<Vec<String>, ListError> {
        let timeout = self.config.timeout;
        let mut session = Session::connect(address, path, timeout)?;

        session.expect("connect", &[220])?;

        let (user, password) = self.config.credentials_for(address);
        session.login(&user, &password)?;

        session.command("TYPE A", &[200])?;
        let passive = session.command("PASV", &[227])?;
        let data_addr = parse_passive_address(&passive.message).ok_or_else(|| {
            ListError::other(format!("Malformed passive reply: {}", passive.message))
        })?;
        let mut data =
            open_stream(data_addr, timeout).map_err(|source| ListError::io(path, source))?;

        session.command(&format!("LIST {}", address.path), &[125, 150])?;

        let mut raw = Vec::new();
        data.read_to_end(&mut raw)
            .map_err(|source| ListError::io(path, source))?;
        drop(data);

        session.expect("LIST", &[226, 250])?;
        session.quit();

        Ok(split_lines(&String::from_utf8_lossy(&raw)))
    }
}

impl DirectoryLister for FtpLister {
    fn list(&mut self, path: &str) -> Result<Vec<String>, ListError> {
        let address = FtpAddress::parse(path)?;
        debug!(host = %address.host, port = address.port, path = %address.path, "LIST");
        self.list_address(&address, path)
    }
}

/// One control connection.
struct Session<'a> {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    path: &'a str,
}

impl<'a> Session<'a> {
    fn connect(
        address: &FtpAddress,
        path: &'a str,
        timeout: Duration,
    ) -> Result<Self, ListError> {
        let connect_err = |source| ListError::Connect {
            host: format!("{}:{}", address.host, address.port),
            source,
        };

        let addr = (address.host.as_str(), address.port)
            .to_socket_addrs()
            .map_err(connect_err)?
            .next()
            .ok_or_else(|| {
                connect_err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "host did not resolve",
                ))
            })?;

        let stream = open_stream(addr, timeout).map_err(connect_err)?;
        let writer = stream
            .try_clone()
            .map_err(|source| ListError::io(path, source))?;

        Ok(Self {
            reader: BufReader::new(stream),
            writer,
            path,
        })
    }

    fn login(&mut self, user: &str, password: &str) -> Result<(), ListError> {
        let reply = self.send(&format!("USER {user}"), "USER")?;
        let reply = match reply.code {
            230 => return Ok(()),
            331 | 332 => self.send(&format!("PASS {password}"), "PASS ****")?,
            _ => reply,
        };

        if reply.code == 230 || reply.code == 202 {
            Ok(())
        } else {
            Err(ListError::Authentication {
                user: user.to_string(),
                message: format!("{} {}", reply.code, reply.message),
            })
        }
    }

    /// Send `line` and require one of `codes` in the reply.
    fn command(&mut self, line: &str, codes: &[u16]) -> Result<Reply, ListError> {
        let reply = self.send(line, line)?;
        check(reply, verb(line), codes)
    }

    /// Read a reply and require one of `codes`.
    fn expect(&mut self, context: &str, codes: &[u16]) -> Result<Reply, ListError> {
        let reply = Reply::read_from(&mut self.reader)
            .map_err(|source| ListError::io(self.path, source))?;
        check(reply, context, codes)
    }

    fn send(&mut self, line: &str, shown: &str) -> Result<Reply, ListError> {
        debug!(command = %shown, "FTP command");
        self.writer
            .write_all(format!("{line}\r\n").as_bytes())
            .map_err(|source| ListError::io(self.path, source))?;
        Reply::read_from(&mut self.reader).map_err(|source| ListError::io(self.path, source))
    }

    /// Close politely; the listing already succeeded.
    fn quit(mut self) {
        let _ = self.send("QUIT", "QUIT");
    }
}

fn check(reply: Reply, command: &str, codes: &[u16]) -> Result<Reply, ListError> {
    if reply.is_one_of(codes) {
        Ok(reply)
    } else {
        Err(ListError::UnexpectedReply {
            command: command.to_string(),
            code: reply.code,
            message: reply.message,
        })
    }
}

fn verb(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or(line)
}

fn open_stream(addr: SocketAddr, timeout: Duration) -> std::io::Result<TcpStream> {
    let stream = TcpStream::connect_timeout(&addr, timeout)?;
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;
    Ok(stream)
}

/// One line per entry: `\r` stripped, blank lines dropped.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
