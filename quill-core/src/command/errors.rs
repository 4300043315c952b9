use std::fmt::Display;
use std::num::ParseIntError;

pub trait GetErrorSeverity {
    fn get_severity(&self) -> ErrorSeverity;
}

/// How fatal a conversion failure is.
///
/// `Low` means the argument did not match this target and another strategy is
/// free to try it. `High` means something went wrong on the host's side and
/// conversion must stop, even mid-way through a [`OneOf`] chain.
///
/// [`OneOf`]: super::converters::OneOf
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    High,
}

#[derive(Debug)]
pub enum ConvertError {
    /// No command is registered under the given name or alias.
    CommandNotFound(String),
    /// No guild matched the argument, by ID or by name.
    GuildNotFound(String),
    /// No channel matched the argument.
    ChannelNotFound(String),
    /// An argument that had to be numeric was not.
    ParseIntError(ParseIntError),
    /// A `channelid/messageid` argument without both halves.
    MalformedIdPair(String),
    /// Every strategy of a multi-target conversion failed.
    NoConversion {
        arg: String,
        attempted: Vec<&'static str>,
    },
    /// The host failed to complete a lookup for a reason other than "no
    /// match". Strategies must not continue past this.
    HostError(anyhow::Error),
}

impl GetErrorSeverity for ConvertError {
    fn get_severity(&self) -> ErrorSeverity {
        match self {
            Self::HostError(..) => ErrorSeverity::High,
            _ => ErrorSeverity::Low,
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandNotFound(name) => write!(f, "command {name} not found"),
            Self::GuildNotFound(arg) => write!(f, "no guild matching {arg} was found"),
            Self::ChannelNotFound(arg) => write!(f, "no channel matching {arg} was found"),
            Self::ParseIntError(err) => write!(f, "failed to parse an argument as a number: {err}"),
            Self::MalformedIdPair(arg) => {
                write!(f, "expected an argument of the form channelid/messageid, got {arg}")
            },
            Self::NoConversion { arg, attempted } => {
                write!(
                    f,
                    "{arg} was not able to be converted to any of the following: {}",
                    attempted.join(", ")
                )
            },
            Self::HostError(err) => write!(f, "the host failed to complete a lookup: {err}"),
        }
    }
}
impl std::error::Error for ConvertError {}

impl From<ParseIntError> for ConvertError {
    fn from(value: ParseIntError) -> Self {
        Self::ParseIntError(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_conversion_lists_every_attempt() {
        let err = ConvertError::NoConversion {
            arg: "xyz".to_owned(),
            attempted: vec!["guild", "channel"],
        };
        assert_eq!(
            err.to_string(),
            "xyz was not able to be converted to any of the following: guild, channel"
        );
    }

    #[test]
    fn only_host_errors_are_high_severity() {
        assert_eq!(
            ConvertError::HostError(anyhow::anyhow!("gateway down")).get_severity(),
            ErrorSeverity::High
        );
        assert_eq!(
            ConvertError::CommandNotFound("ping".to_owned()).get_severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            ConvertError::MalformedIdPair("123".to_owned()).get_severity(),
            ErrorSeverity::Low
        );
    }
}
