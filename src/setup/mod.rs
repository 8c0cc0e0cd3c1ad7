//! Environment preparation: header generation from `YUNETA_VERSION` and `.config`.

mod environment;
pub mod kconfig;
mod stale;

pub use environment::{CONFIG_HEADER, OutputPaths, VERSION_HEADER, initialize};
pub use kconfig::{CompileOptions, ConfigEntry, HeaderDocument, compile};
pub use stale::is_stale;
