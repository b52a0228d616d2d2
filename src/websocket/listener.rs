use super::types::ConnectionState;

/// Receives every state transition of a [`WebsocketClient`](super::WebsocketClient).
///
/// Called synchronously, in transition order, while the client's connection
/// lock is held. Registering further listeners from a callback is allowed;
/// they are notified from the next transition on. Anything else that needs
/// the connection (`connect`, `call`, `state`, ...) must not be awaited here.
pub trait ConnectionListener: Send + Sync {
    fn on_state_changed(&self, from: ConnectionState, to: ConnectionState);
}
