use crate::config::{Command, Config};
use anyhow::Context;
use crockford::{
    Encoding, LEN_RANDOM, LEN_TIME, TimeSource, append_random, append_unix, checksum,
    decode_normalized, md5, normalized, parse_time, random, unix, verify_checksum,
};
use std::io::{Read, Write};

/// Symbols in a generated identifier, excluding separator and check symbol.
const LEN_ID: usize = LEN_TIME + LEN_RANDOM;

/// Outcome of a command that completed without an I/O or entropy error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// `verify` found a malformed identifier or a wrong check symbol.
    Invalid,
}

/// Runs the configured command, reading `stdin` only for `md5` without TEXT.
pub fn run<T, R, W>(config: &Config, clock: &T, stdin: R, out: &mut W) -> anyhow::Result<Status>
where
    T: TimeSource,
    R: Read,
    W: Write,
{
    let enc = config.encoding;
    match &config.command {
        Command::Time { unix: secs } => {
            let secs = secs.unwrap_or_else(|| clock.unix_seconds());
            writeln!(out, "{}", unix(enc, secs))?;
        }
        Command::Random { count } => {
            for _ in 0..*count {
                writeln!(out, "{}", random(enc)?)?;
            }
        }
        Command::Md5 { text } => {
            let content = match text {
                Some(text) => text.clone().into_bytes(),
                None => read_all(stdin)?,
            };
            writeln!(out, "{}", md5(enc, &content))?;
        }
        Command::Checksum { text } => {
            let symbol = checksum(text.as_bytes(), config.case());
            writeln!(out, "{}", char::from(symbol))?;
        }
        Command::Normalize { code } => {
            writeln!(out, "{}", normalized(code))?;
        }
        Command::Id {
            count,
            checksum: with_checksum,
        } => {
            let mut line = Vec::with_capacity(LEN_ID + config.separator.len() + 2);
            for _ in 0..*count {
                line.clear();
                new_id(config, clock, *with_checksum, &mut line)?;
                line.push(b'\n');
                out.write_all(&line)?;
            }
        }
        Command::Verify { code } => return verify(code, out),
    }
    Ok(Status::Success)
}

fn read_all<R: Read>(mut stdin: R) -> anyhow::Result<Vec<u8>> {
    let mut content = Vec::new();
    stdin
        .read_to_end(&mut content)
        .context("failed to read stdin")?;
    Ok(content)
}

/// Appends `TIME <sep> RANDOM [CHECK]` to `dst`.
fn new_id<T: TimeSource>(
    config: &Config,
    clock: &T,
    with_checksum: bool,
    dst: &mut Vec<u8>,
) -> anyhow::Result<()> {
    let enc = config.encoding;
    let start = dst.len();
    append_unix(enc, clock.unix_seconds(), dst);
    dst.extend_from_slice(config.separator.as_bytes());
    append_random(enc, dst)?;

    if with_checksum {
        let sep_len = config.separator.len();
        let mut symbols = Vec::with_capacity(LEN_ID);
        symbols.extend_from_slice(&dst[start..start + LEN_TIME]);
        symbols.extend_from_slice(&dst[start + LEN_TIME + sep_len..]);
        let body = enc.decode(&symbols)?;
        dst.push(checksum(&body, config.case()));
    }
    Ok(())
}

fn verify<W: Write>(code: &str, out: &mut W) -> anyhow::Result<Status> {
    let canonical = normalized(code);
    if canonical.len() != LEN_ID + 1 {
        tracing::debug!(code, len = canonical.len(), "unexpected identifier length");
        writeln!(
            out,
            "invalid: expected {} symbols, found {}",
            LEN_ID + 1,
            canonical.len()
        )?;
        return Ok(Status::Invalid);
    }

    let (symbols, check) = canonical.split_at(LEN_ID);
    let body = match decode_normalized(symbols.as_bytes()) {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(code, %err, "identifier does not decode");
            writeln!(out, "invalid: {err}")?;
            return Ok(Status::Invalid);
        }
    };

    if !verify_checksum(&body, check.as_bytes()[0]) {
        writeln!(out, "invalid: check symbol mismatch")?;
        return Ok(Status::Invalid);
    }

    let secs = parse_time(Encoding::upper(), &symbols[..LEN_TIME])?;
    writeln!(out, "valid: {symbols}{check} issued at unix {secs}")?;
    Ok(Status::Success)
}
