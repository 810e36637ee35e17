//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = cvforge::logging::init();
    cvforge::app::run()
}
