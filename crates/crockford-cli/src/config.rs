use anyhow::bail;
use clap::{Parser, Subcommand};
use crockford::{Case, Encoding, normalize_byte};

/// Upper bound on fragments produced by a single invocation.
pub const MAX_COUNT: usize = 1_000_000;

/// Runtime configuration for the `crockford` binary.
///
/// Global settings are parsed from CLI arguments or environment variables
/// (a `.env` file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "crockford",
    version,
    about = "Generate, checksum and normalize Crockford base32 identifiers"
)]
pub struct CliArgs {
    /// Emit lowercase symbols instead of uppercase ones.
    ///
    /// Environment variable: `CROCKFORD_LOWERCASE`
    #[arg(long, global = true, env = "CROCKFORD_LOWERCASE", default_value_t = false)]
    pub lowercase: bool,

    /// Text placed between the time and random fragments of an `id`.
    ///
    /// Must not contain characters that normalize to a symbol, otherwise
    /// `verify` could not strip it again. Use an empty string for none.
    ///
    /// Environment variable: `CROCKFORD_SEPARATOR`
    #[arg(long, global = true, env = "CROCKFORD_SEPARATOR", default_value_t = String::from("-"))]
    pub separator: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode a Unix time (default: now) as an 8-symbol sortable fragment.
    Time {
        /// Seconds since 1970-01-01 UTC; truncated to 40 bits.
        #[arg(long, allow_negative_numbers = true)]
        unix: Option<i64>,
    },
    /// Print 8-symbol fragments of secure random data.
    Random {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Print the 26-symbol MD5 fingerprint of TEXT, or of stdin when absent.
    Md5 { text: Option<String> },
    /// Print the check symbol of the raw bytes of TEXT.
    Checksum { text: String },
    /// Print the canonical uppercase form of a typed code.
    Normalize { code: String },
    /// Generate time-prefixed random identifiers.
    Id {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Append a check symbol computed over the 10-byte identifier body.
        #[arg(long, default_value_t = false)]
        checksum: bool,
    },
    /// Check a typed, checksummed identifier and print its timestamp.
    Verify { code: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub encoding: &'static Encoding,
    pub separator: String,
    pub command: Command,
}

impl Config {
    pub fn case(&self) -> Case {
        self.encoding.case()
    }
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if let Some(c) = args
            .separator
            .bytes()
            .find(|&b| normalize_byte(b).is_some())
        {
            bail!(
                "CROCKFORD_SEPARATOR ({:?}) contains {:?}, which normalizes to a symbol",
                args.separator,
                char::from(c)
            );
        }

        if let Command::Random { count } | Command::Id { count, .. } = args.command {
            if count == 0 {
                bail!("--count must be greater than 0");
            }
            if count > MAX_COUNT {
                bail!("--count ({count}) exceeds the maximum of {MAX_COUNT}");
            }
        }

        let case = if args.lowercase {
            Case::Lower
        } else {
            Case::Upper
        };

        Ok(Self {
            encoding: case.encoding(),
            separator: args.separator,
            command: args.command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(args)?;
        Config::try_from(args)
    }

    #[test]
    fn defaults_to_uppercase_with_hyphen() {
        let config = parse(&["crockford", "id"]).unwrap();
        assert_eq!(config.case(), Case::Upper);
        assert_eq!(config.separator, "-");
        assert_eq!(
            config.command,
            Command::Id {
                count: 1,
                checksum: false
            }
        );
    }

    #[test]
    fn lowercase_flag_selects_lowercase_encoding() {
        let config = parse(&["crockford", "--lowercase", "random", "-c", "3"]).unwrap();
        assert_eq!(config.case(), Case::Lower);
        assert_eq!(config.command, Command::Random { count: 3 });
    }

    #[test]
    fn global_flags_may_follow_the_subcommand() {
        let config = parse(&["crockford", "id", "--checksum", "--separator", ""]).unwrap();
        assert_eq!(config.separator, "");
        assert_eq!(
            config.command,
            Command::Id {
                count: 1,
                checksum: true
            }
        );
    }

    #[test]
    fn negative_unix_time_is_accepted() {
        let config = parse(&["crockford", "time", "--unix", "-1"]).unwrap();
        assert_eq!(config.command, Command::Time { unix: Some(-1) });
    }

    #[test]
    fn rejects_zero_count() {
        let err = parse(&["crockford", "random", "--count", "0"]).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn rejects_excessive_count() {
        let err = parse(&["crockford", "id", "--count", "1000001"]).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn rejects_separator_that_normalizes_to_a_symbol() {
        let err = parse(&["crockford", "--separator", "o", "id"]).unwrap_err();
        assert!(err.to_string().contains("normalizes to a symbol"));
        assert!(parse(&["crockford", "--separator", " / ", "id"]).is_ok());
    }
}
