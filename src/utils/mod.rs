pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{TOKEN_ENV_VAR, default_config_path, token_from_env};
pub use paths::{attachment_basename, resolve_attachment_url, sender_dir, text_file_name};
pub use terminal::{render_banner, sanitize_for_terminal, terminal_width};
pub use timestamps::{epoch_to_system_time, format_local};
