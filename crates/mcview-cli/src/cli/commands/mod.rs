//! CLI command handlers. Each command is in its own file.

mod completions;
mod decode;
mod interactive;
mod lookup;
mod poses;
mod reroll;
mod urls;

pub use completions::run_completions;
pub use decode::run_decode;
pub use interactive::run_interactive;
pub use lookup::run_lookup;
pub use poses::run_poses;
pub use reroll::run_reroll;
pub use urls::run_urls;
