mod clipboard_writer;
mod completion_client;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use completion_client::{CompletionClient, CompletionRequest};
