mod clipboard_arboard;
mod model_file;
mod openrouter_client;

pub use clipboard_arboard::ArboardClipboard;
pub use model_file::{load_model, save_model};
pub use openrouter_client::{API_KEY_ENV, CompletionApiConfig, HttpCompletionClient};
