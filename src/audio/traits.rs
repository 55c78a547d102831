use super::commands::MediaCommand;

/// Whatever actually makes sound. Commands are fire-and-forget; the element
/// reports back through `Event::Media*` on the app channel.
pub trait MediaElement {
    fn handle_command(&mut self, cmd: MediaCommand);
}
