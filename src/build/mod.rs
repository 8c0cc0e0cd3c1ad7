mod configure;
mod core;
pub mod dirs;
pub mod runner;
mod test;

pub use configure::{BuildType, configure_all, configure_command};
pub use self::core::{
    BUILD_DIR, BuildOutcome, CMAKE_MARKER, build_all, clean_all, clean_command, install_command,
    run_in_all,
};
pub use dirs::resolve;
pub use runner::{BuildCommand, CommandRunner, SystemRunner};
pub use test::{ctest_command, run_tests};
