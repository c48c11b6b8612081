//! CLI command handlers. Each command is in its own file.

mod completions;
mod edit_link;
mod encode;
mod options;
mod presets;
mod url;

pub use completions::{run_completions, run_man};
pub use edit_link::run_edit_link;
pub use encode::run_encode;
pub use options::run_options;
pub use presets::run_presets;
pub use url::run_url;
