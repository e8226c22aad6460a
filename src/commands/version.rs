//! Version command implementation

use crate::error::Result;

/// Print the version and build details
pub fn run() -> Result<()> {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    println!("skillpack {}", env!("CARGO_PKG_VERSION"));
    println!(
        "rust {} ({} build)",
        env!("CARGO_PKG_RUST_VERSION"),
        profile
    );

    Ok(())
}
