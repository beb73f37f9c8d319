use std::io;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time;

use super::error::ProbeError;
use super::types::SmtpReply;

/// One SMTP conversation over a freshly opened stream. The session owns
/// the stream; dropping it closes the socket, which is how every probe
/// exit path releases its connection.
pub(crate) struct SmtpSession<S> {
    reader: BufReader<S>,
}

impl SmtpSession<TcpStream> {
    /// Opens a TCP connection bounded by `connect_timeout`. Only this
    /// phase carries a deadline; replies are awaited without one.
    pub(crate) async fn connect(
        host: &str,
        port: u16,
        connect_timeout: Duration,
    ) -> Result<Self, ProbeError> {
        match time::timeout(connect_timeout, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => Ok(Self::new(stream)),
            Ok(Err(source)) => Err(ProbeError::connect(host, source)),
            Err(_) => Err(ProbeError::connect_timeout(host)),
        }
    }
}

impl<S> SmtpSession<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub(crate) fn new(stream: S) -> Self {
        Self {
            reader: BufReader::new(stream),
        }
    }

    pub(crate) async fn send_command(&mut self, command: &str) -> io::Result<()> {
        let mut line = command.as_bytes().to_vec();
        line.extend_from_slice(b"\r\n");
        let stream = self.reader.get_mut();
        stream.write_all(&line).await?;
        stream.flush().await
    }

    /// Reads one full reply, draining continuation lines (4th byte `-`)
    /// until the final one. Status codes must agree across lines.
    pub(crate) async fn read_reply(&mut self) -> io::Result<SmtpReply> {
        let mut code = None;
        let mut message_lines = Vec::new();
        loop {
            let mut raw = String::new();
            let bytes = self.reader.read_line(&mut raw).await?;
            if bytes == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed while reading reply",
                ));
            }
            if raw.ends_with('\n') {
                raw.pop();
                if raw.ends_with('\r') {
                    raw.pop();
                }
            }

            let code_part = match raw.get(..3) {
                Some(part) => part,
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("invalid SMTP reply: '{raw}'"),
                    ));
                }
            };
            let parsed_code = code_part.parse::<u16>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid SMTP status code: '{code_part}'"),
                )
            })?;
            if let Some(existing) = code {
                if existing != parsed_code {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("inconsistent SMTP reply codes: {existing} vs {parsed_code}"),
                    ));
                }
            } else {
                code = Some(parsed_code);
            }
            let continuation = raw.as_bytes().get(3).copied() == Some(b'-');
            let text_start = if raw.len() > 3 { 4 } else { 3 };
            let text = raw.get(text_start..).unwrap_or("").to_string();
            message_lines.push(text);
            if !continuation {
                break;
            }
        }
        Ok(SmtpReply {
            code: code.ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, "SMTP reply missing status code")
            })?,
            message: message_lines.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn reads_single_line_reply() {
        let (client, mut server) = tokio::io::duplex(1024);
        server
            .write_all(b"220 mock.smtp.test ESMTP\r\n")
            .await
            .unwrap();
        let mut session = SmtpSession::new(client);
        let reply = session.read_reply().await.unwrap();
        assert_eq!(reply.code, 220);
        assert_eq!(reply.message, "mock.smtp.test ESMTP");
    }

    #[tokio::test]
    async fn drains_multiline_reply_to_final_line() {
        let (client, mut server) = tokio::io::duplex(1024);
        server
            .write_all(b"250-mock.example\r\n250-SIZE 35882577\r\n250 STARTTLS\r\n")
            .await
            .unwrap();
        let mut session = SmtpSession::new(client);
        let reply = session.read_reply().await.unwrap();
        assert_eq!(reply.code, 250);
        assert!(reply.message.contains("SIZE"));
        assert!(reply.message.contains("STARTTLS"));
    }

    #[tokio::test]
    async fn rejects_inconsistent_codes() {
        let (client, mut server) = tokio::io::duplex(1024);
        server
            .write_all(b"250-mock.example\r\n550 nope\r\n")
            .await
            .unwrap();
        let mut session = SmtpSession::new(client);
        let err = session.read_reply().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn rejects_short_garbage() {
        let (client, mut server) = tokio::io::duplex(1024);
        server.write_all(b"hi\r\n").await.unwrap();
        let mut session = SmtpSession::new(client);
        let err = session.read_reply().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn reports_eof_as_error() {
        let (client, server) = tokio::io::duplex(1024);
        drop(server);
        let mut session = SmtpSession::new(client);
        let err = session.read_reply().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn send_command_appends_crlf() {
        let (client, mut server) = tokio::io::duplex(1024);
        let mut session = SmtpSession::new(client);
        session.send_command("EHLO mail.example.org").await.unwrap();
        drop(session);
        let mut sent = Vec::new();
        server.read_to_end(&mut sent).await.unwrap();
        assert_eq!(sent, b"EHLO mail.example.org\r\n");
    }
}
