use log::LevelFilter;

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .format_target(false);
    builder
}

/// Installs the `env_logger` backend. `RUST_LOG` overrides the `info` default.
pub fn init_logger() {
    builder().init();
}
