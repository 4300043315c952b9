//! The command system.
//!
//! The key things that make up the command system are:
//!
//! - The [`Command`] trait: Defines the `execute` method which executes the
//!   actual command, given a `CommandCtxt` and the raw argument text.
//!
//!   This is used as a trait object (`&dyn Command`), because it is stored
//!   along with all other commands in a map, in registry.rs.
//!
//! - The [`converters::Convert`] trait: Implemented for types that can be
//!   converted from a raw string argument, by consulting the host where a
//!   lookup is needed.
//!
//!   These types also compose: for example, `Option<T>` implements `Convert`
//!   if `T: Convert`, which allows recovering from low-severity errors in
//!   `T`'s converter, and [`converters::OneOf`] tries a sequence of targets
//!   in order and keeps the first success.
//!
//! - The registry: registry.rs stores the `&str -> &dyn Command` mapping that
//!   a host's command lookup is expected to consult.

use async_trait::async_trait;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker};

use self::converters::Convert;
use self::errors::ConvertError;
use crate::host::HostBot;

pub mod converters;
pub mod errors;
pub mod registry;

#[derive(Debug)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// A command that can be executed.
// This trait is used as a trait object and AFIT makes traits not object safe,
// so we still need #[async_trait] here :(
#[async_trait]
pub trait Command<H: HostBot> {
    fn metadata(&self) -> &'static CommandMetadata;

    /// Parses arguments and executes the command.
    async fn execute(&self, ctxt: CommandCtxt<'_, H>, args: &str) -> anyhow::Result<()>;
}

/// Just a type alias for a command as a trait object with other necessary
/// bounds. See [Command] for more documentation.
pub type TCommand<H> = &'static (dyn Command<H> + Send + Sync);

/// Per-invocation data that does not change while a command executes.
pub struct CommandData<'a, H: HostBot> {
    pub host: &'a H,
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub calling_prefix: String,
}

pub struct CommandCtxt<'a, H: HostBot> {
    pub data: &'a CommandData<'a, H>,
}

impl<H: HostBot> Clone for CommandCtxt<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<H: HostBot> Copy for CommandCtxt<'_, H> {}

impl<'a, H: HostBot> CommandCtxt<'a, H> {
    pub fn new(data: &'a CommandData<'a, H>) -> Self {
        Self { data }
    }

    pub fn host(&self) -> &'a H {
        self.data.host
    }

    /// Attempts to convert `arg` to a `T`.
    pub async fn convert<T: Convert<H>>(&self, arg: &str) -> Result<T, ConvertError> {
        T::convert(self, arg).await
    }
}
