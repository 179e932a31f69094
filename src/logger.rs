use log::LevelFilter;

/// Initialize the logger with the specified level; RUST_LOG overrides it.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()
        .ok();
}
