use anyhow::anyhow;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, MessageMarker};

use crate::command::TCommand;

/// External host for the command system.
///
/// It contains the lookups that are provided by the embedding bot (the
/// command registry and the guild and channel caches), plus the message
/// fetch, which is the only operation here that goes over the network.
///
/// The entity types are associated types because the host owns them; this
/// crate never inspects them, it only hands them back to the command that
/// asked for the conversion.
// 'static because commands refer back to their host: `TCommand<H>` is a
// &'static trait object parameterised over H
#[allow(async_fn_in_trait)]
pub trait HostBot: Sized + Send + Sync + 'static {
    type Guild: Send;
    type Channel: Send;
    type Message: Send;

    /// Looks up a command by its name or an alias.
    fn get_command(&self, name: &str) -> Option<TCommand<Self>>;
    /// Looks up a cached guild by its ID.
    fn get_guild(&self, id: Id<GuildMarker>) -> Option<Self::Guild>;
    /// Looks up a cached guild by its exact name.
    fn find_guild(&self, name: &str) -> Option<Self::Guild>;
    /// Looks up a cached channel by its ID.
    fn get_channel(&self, id: Id<ChannelMarker>) -> Option<Self::Channel>;
    /// Fetches a message in a channel from the host's HTTP API.
    async fn fetch_message(
        &self,
        channel: Id<ChannelMarker>,
        message: Id<MessageMarker>,
    ) -> anyhow::Result<Self::Message>;
}

/// A "no-op" host, which knows no commands, guilds or channels, and whose
/// message fetch always fails.
///
/// This is useful for testing converter plumbing when you need to provide a
/// host but don't really need its functionality.
pub struct NopHost;

fn not_implemented<T>() -> anyhow::Result<T> {
    Err(anyhow!("Not implemented"))
}

impl HostBot for NopHost {
    type Guild = ();
    type Channel = ();
    type Message = ();

    fn get_command(&self, _name: &str) -> Option<TCommand<Self>> {
        None
    }

    fn get_guild(&self, _id: Id<GuildMarker>) -> Option<Self::Guild> {
        None
    }

    fn find_guild(&self, _name: &str) -> Option<Self::Guild> {
        None
    }

    fn get_channel(&self, _id: Id<ChannelMarker>) -> Option<Self::Channel> {
        None
    }

    async fn fetch_message(
        &self,
        _channel: Id<ChannelMarker>,
        _message: Id<MessageMarker>,
    ) -> anyhow::Result<Self::Message> {
        not_implemented()
    }
}
