//! Control-channel replies.

use std::io::{self, BufRead};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// One server reply: a three-digit code and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: u16,
    pub message: String,
}

impl Reply {
    /// Read one reply, following `NNN-` continuation lines up to the
    /// closing `NNN ` line.
    pub fn read_from<R: BufRead>(reader: &mut R) -> io::Result<Self> {
        let first = read_line(reader)?;
        let code = parse_code(&first)?;
        let mut message = first.get(4..).unwrap_or_default().to_string();

        if first.as_bytes().get(3) == Some(&b'-') {
            let terminator = format!("{code} ");
            loop {
                let line = read_line(reader)?;
                if line.starts_with(&terminator) || line == code.to_string() {
                    message = line.get(4..).unwrap_or_default().to_string();
                    break;
                }
            }
        }

        Ok(Self { code, message })
    }

    /// Whether the reply code is one of `codes`.
    pub fn is_one_of(&self, codes: &[u16]) -> bool {
        codes.contains(&self.code)
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "control connection closed",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_code(line: &str) -> io::Result<u16> {
    line.get(..3)
        .filter(|code| code.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|code| code.parse().ok())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("malformed reply: {line:?}"),
            )
        })
}

/// Data address from a `227 Entering Passive Mode (h1,h2,h3,h4,p1,p2)` reply.
pub fn parse_passive_address(message: &str) -> Option<SocketAddr> {
    let start = message.find('(')? + 1;
    let end = start + message[start..].find(')')?;
    let numbers = message[start..end]
        .split(',')
        .map(|n| n.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;

    match numbers.as_slice() {
        &[a, b, c, d, hi, lo] => Some(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::new(a, b, c, d),
            (u16::from(hi) << 8) | u16::from(lo),
        ))),
        _ => None,
    }
}
