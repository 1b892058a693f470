/// Host API - what the chat client exposes to a loaded plugin
///
/// All calls act on the currently focused window. Sending is fire-and-forget:
/// delivery failures belong to the host, not to the caller.
pub trait HostApi {
    /// Show a message to the local user only. Nothing goes over the network.
    fn display(&mut self, message: &str);

    /// Nickname used when announcing outgoing messages
    fn nickname(&self) -> String;

    /// Deliver a message to the contact of the focused window
    fn send(&mut self, message: &str);
}
