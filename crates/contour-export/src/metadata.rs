/// Log the binary name and version at startup.
pub fn log_version_info() {
    tracing::info!("{}", short_version_info());
}

pub fn short_version_info() -> String {
    format!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    )
}
