//! Seams to the external connection layer
//!
//! The console consumes these as interfaces only; the wire protocol to a
//! live broker lives outside this crate. Presentation code polls
//! `ConnectionStatus` synchronously; command handlers drive `AdminClient`.

use crate::error::Result;
use crate::models::Credentials;

/// Lifecycle commands the console issues against a connected endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    Pause,
    Resume,
    Restart,
    Shutdown,
    Purge,
}

/// Connection status provider, polled by presentation code
pub trait ConnectionStatus {
    /// Returns true if the endpoint was connected successfully
    fn is_connected(&self) -> bool;

    /// Returns true if the underlying transport is still open
    fn is_open(&self) -> bool;
}

/// Remote command client for one endpoint
///
/// Implementations carry the wire protocol; callers hand over the entry's
/// registry name and address on connect and issue lifecycle verbs after.
pub trait AdminClient: ConnectionStatus {
    /// Opens a connection using the given endpoint attributes
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable or rejects the
    /// credentials.
    fn connect(&mut self, name: &str, host: &str, port: u16, credentials: &Credentials)
        -> Result<()>;

    /// Closes the connection
    ///
    /// # Errors
    ///
    /// Returns an error if the close handshake fails.
    fn disconnect(&mut self) -> Result<()>;

    /// Issues a lifecycle command
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint rejects or fails the command.
    fn execute(&mut self, command: LifecycleCommand) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake for use in command-path tests.

    use super::{AdminClient, ConnectionStatus, LifecycleCommand};
    use crate::error::Result;
    use crate::models::Credentials;

    /// An `AdminClient` that records every call and always succeeds
    #[derive(Debug, Default)]
    pub struct RecordingClient {
        pub connected: bool,
        pub commands: Vec<LifecycleCommand>,
        pub last_target: Option<(String, String, u16)>,
    }

    impl ConnectionStatus for RecordingClient {
        fn is_connected(&self) -> bool {
            self.connected
        }

        fn is_open(&self) -> bool {
            self.connected
        }
    }

    impl AdminClient for RecordingClient {
        fn connect(
            &mut self,
            name: &str,
            host: &str,
            port: u16,
            _credentials: &Credentials,
        ) -> Result<()> {
            self.connected = true;
            self.last_target = Some((name.to_string(), host.to_string(), port));
            Ok(())
        }

        fn disconnect(&mut self) -> Result<()> {
            self.connected = false;
            Ok(())
        }

        fn execute(&mut self, command: LifecycleCommand) -> Result<()> {
            self.commands.push(command);
            Ok(())
        }
    }
}
