//! Facts about the environment the program runs in, as opposed to injected
//! build metadata.

/// CPU architecture the application was compiled for, e.g. `x86_64`.
pub fn arch() -> &'static str {
    std::env::consts::ARCH
}

/// Operating system the application was compiled for, e.g. `linux`.
pub fn os() -> &'static str {
    std::env::consts::OS
}

/// Version of the Rust compiler that built this crate.
pub fn rustc_version() -> &'static str {
    env!("APP_META_RUSTC_VERSION")
}
