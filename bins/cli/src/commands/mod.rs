//! CLI command handlers.

pub mod collect;
pub mod divide;
pub mod hello;
pub mod info;

pub use collect::run_collect;
pub use divide::run_divide;
pub use hello::run_hello;
pub use info::run_info;
