//! Device address normalization.

use std::net::Ipv6Addr;

use rokucli_proto::ECP_PORT;

use crate::error::ClientError;

/// Normalize a user- or discovery-supplied address to `host:port`.
///
/// Accepts `host`, `host:port`, and URLs such as `http://host:port/` (the
/// form SSDP `LOCATION` headers use). IPv6 hosts are written `[addr]` or
/// `[addr]:port`; a bare IPv6 address without a port is bracketed. The port
/// defaults to [`ECP_PORT`].
///
/// # Errors
///
/// [`ClientError::Connection`] if the host is empty, the port is not a
/// number, or an IPv6 address is malformed.
pub fn parse_addr(raw: &str) -> Result<String, ClientError> {
    let invalid = |reason: &str| ClientError::Connection {
        addr: raw.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = raw.trim();
    let without_scheme = match trimmed.split_once("://") {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") => rest,
        Some(_) => return Err(invalid("only http addresses are supported")),
        None => trimmed,
    };
    let authority = without_scheme.split('/').next().unwrap_or_default();

    if let Some(bracketed) = authority.strip_prefix('[') {
        let (inner, rest) = bracketed.split_once(']').ok_or_else(|| invalid("unclosed '['"))?;
        inner.parse::<Ipv6Addr>().map_err(|_| invalid("invalid IPv6 address"))?;
        let port = match rest {
            "" => ECP_PORT,
            _ => {
                let port = rest.strip_prefix(':').ok_or_else(|| invalid("invalid port"))?;
                port.parse().map_err(|_| invalid("invalid port"))?
            },
        };
        return Ok(format!("[{inner}]:{port}"));
    }

    if authority.matches(':').count() > 1 {
        let ip: Ipv6Addr =
            authority.parse().map_err(|_| invalid("IPv6 addresses with a port need brackets"))?;
        return Ok(format!("[{ip}]:{ECP_PORT}"));
    }

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => {
            let port: u16 = port.parse().map_err(|_| invalid("invalid port"))?;
            (host, port)
        },
        None => (authority, ECP_PORT),
    };

    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    Ok(format!("{host}:{port}"))
}
