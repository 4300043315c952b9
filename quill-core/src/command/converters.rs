use quill_common::util::discord::channel_mention_to_id;
use tracing::debug;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, MessageMarker};

use super::errors::{ConvertError, ErrorSeverity, GetErrorSeverity};
use super::{CommandCtxt, TCommand};
use crate::host::HostBot;

/// Implemented for types that can be converted from a raw string argument.
///
/// Converters never mutate anything; they translate the argument into one of
/// the host's objects (or a plain value) or fail with a [`ConvertError`].
#[allow(async_fn_in_trait)]
pub trait Convert<H: HostBot>: Sized {
    /// Converts `arg` into `Self`, consulting the host where a lookup is
    /// needed.
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError>;

    /// The name of this conversion target, as listed in "no conversion"
    /// errors.
    fn kind() -> &'static str;
}

/// A single word argument, taken verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word(pub String);

impl<H: HostBot> Convert<H> for Word {
    async fn convert(_ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        Ok(Word(arg.to_owned()))
    }

    fn kind() -> &'static str {
        "word"
    }
}

impl<H: HostBot> Convert<H> for u64 {
    async fn convert(_ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        Ok(arg.parse()?)
    }

    fn kind() -> &'static str {
        "u64"
    }
}

impl<H: HostBot, T: Convert<H>> Convert<H> for Option<T> {
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        match T::convert(ctxt, arg).await {
            Ok(v) => Ok(Some(v)),
            Err(err) if err.get_severity() == ErrorSeverity::High => Err(err),
            _ => Ok(None),
        }
    }

    fn kind() -> &'static str {
        T::kind()
    }
}

/// A command argument, looked up by name or alias in the host's registry.
pub struct BotCommand<H: HostBot>(pub TCommand<H>);

impl<H: HostBot> std::fmt::Debug for BotCommand<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BotCommand").field(&self.0.metadata().name).finish()
    }
}

impl<H: HostBot> Convert<H> for BotCommand<H> {
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        match ctxt.host().get_command(arg) {
            Some(command) => Ok(BotCommand(command)),
            None => Err(ConvertError::CommandNotFound(arg.to_owned())),
        }
    }

    fn kind() -> &'static str {
        "command"
    }
}

/// A guild argument, looked up by ID where the argument is numeric, falling
/// back to an exact name lookup.
///
/// The ID path always wins: a guild that uses another guild's numeric ID as
/// its name will never shadow that guild.
pub struct Guild<H: HostBot>(pub H::Guild);

impl<H: HostBot> std::fmt::Debug for Guild<H>
where
    H::Guild: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Guild").field(&self.0).finish()
    }
}

impl<H: HostBot> Convert<H> for Guild<H> {
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        if !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit()) {
            // zero and out-of-range values are not snowflakes, so they fall
            // through to the name lookup like any other non-ID argument
            if let Some(id) = arg.parse().ok().and_then(Id::<GuildMarker>::new_checked) {
                if let Some(guild) = ctxt.host().get_guild(id) {
                    return Ok(Guild(guild));
                }
            }
        }

        match ctxt.host().find_guild(arg) {
            Some(guild) => Ok(Guild(guild)),
            None => Err(ConvertError::GuildNotFound(arg.to_owned())),
        }
    }

    fn kind() -> &'static str {
        "guild"
    }
}

/// A channel argument (mention or ID).
pub struct Channel<H: HostBot>(pub H::Channel);

impl<H: HostBot> std::fmt::Debug for Channel<H>
where
    H::Channel: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Channel").field(&self.0).finish()
    }
}

impl<H: HostBot> Convert<H> for Channel<H> {
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        let id = channel_mention_to_id(arg)
            .or_else(|| arg.parse().ok())
            .and_then(Id::<ChannelMarker>::new_checked)
            .ok_or_else(|| ConvertError::ChannelNotFound(arg.to_owned()))?;

        match ctxt.host().get_channel(id) {
            Some(channel) => Ok(Channel(channel)),
            None => Err(ConvertError::ChannelNotFound(arg.to_owned())),
        }
    }

    fn kind() -> &'static str {
        "channel"
    }
}

/// A channel and message pair, resolved from a `channelid/messageid` string.
///
/// Resolution is allowed to partially succeed, and the result says how far it
/// got: an unknown channel yields neither half, and a failed message fetch
/// yields the channel alone. Only a malformed argument is an error.
pub struct ChannelMessage<H: HostBot> {
    pub channel: Option<H::Channel>,
    pub message: Option<H::Message>,
}

impl<H: HostBot> std::fmt::Debug for ChannelMessage<H>
where
    H::Channel: std::fmt::Debug,
    H::Message: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelMessage")
            .field("channel", &self.channel)
            .field("message", &self.message)
            .finish()
    }
}

impl<H: HostBot> ChannelMessage<H> {
    /// Resolves a `channelid/messageid` string against `host`.
    pub async fn from_id_string(host: &H, arg: &str) -> Result<ChannelMessage<H>, ConvertError> {
        let mut ids = arg.split('/');
        let (Some(channel_id), Some(message_id)) = (ids.next(), ids.next()) else {
            return Err(ConvertError::MalformedIdPair(arg.to_owned()));
        };
        let channel_id = channel_id.parse::<u64>()?;
        let message_id = message_id.parse::<u64>()?;

        // zero is not a valid snowflake, treat it like any unknown channel
        let channel = Id::<ChannelMarker>::new_checked(channel_id)
            .map(|id| (id, host.get_channel(id)));
        let Some((channel_id, Some(channel))) = channel else {
            return Ok(ChannelMessage {
                channel: None,
                message: None,
            });
        };

        let mut message = None;
        if let Some(id) = Id::<MessageMarker>::new_checked(message_id) {
            match host.fetch_message(channel_id, id).await {
                Ok(m) => message = Some(m),
                Err(err) => debug!("message fetch for {arg} failed: {err}"),
            }
        }

        Ok(ChannelMessage {
            channel: Some(channel),
            message,
        })
    }
}

impl<H: HostBot> Convert<H> for ChannelMessage<H> {
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        Self::from_id_string(ctxt.host(), arg).await
    }

    fn kind() -> &'static str {
        "channel/message pair"
    }
}

/// A typed "first of" combinator: converts to `A`, and where that fails to
/// `B`.
///
/// A low severity failure moves on to the next target; a high severity
/// failure stops the chain immediately. When every target has failed, the
/// error lists each one in the order it was attempted. Nest the combinator
/// for more than two targets: `OneOf<A, OneOf<B, C>>`.
#[derive(Debug)]
pub enum OneOf<A, B> {
    First(A),
    Second(B),
}

impl<H: HostBot, A: Convert<H>, B: Convert<H>> Convert<H> for OneOf<A, B> {
    async fn convert(ctxt: &CommandCtxt<'_, H>, arg: &str) -> Result<Self, ConvertError> {
        let mut attempted = match A::convert(ctxt, arg).await {
            Ok(first) => return Ok(OneOf::First(first)),
            Err(err) if err.get_severity() == ErrorSeverity::High => return Err(err),
            // nested combinators surface their whole attempt list, so that
            // the final error names every target exactly once
            Err(ConvertError::NoConversion { attempted, .. }) => attempted,
            Err(_) => vec![A::kind()],
        };

        match B::convert(ctxt, arg).await {
            Ok(second) => Ok(OneOf::Second(second)),
            Err(err) if err.get_severity() == ErrorSeverity::High => Err(err),
            Err(ConvertError::NoConversion { attempted: mut rest, .. }) => {
                attempted.append(&mut rest);
                Err(ConvertError::NoConversion {
                    arg: arg.to_owned(),
                    attempted,
                })
            },
            Err(_) => {
                attempted.push(B::kind());
                Err(ConvertError::NoConversion {
                    arg: arg.to_owned(),
                    attempted,
                })
            },
        }
    }

    fn kind() -> &'static str {
        "one of"
    }
}
