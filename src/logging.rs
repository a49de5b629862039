//! Debug logging
//!
//! Debug builds write `log` output to a file in the cache directory, since
//! the terminal belongs to the UI. Release builds log nothing.

use std::path::PathBuf;

const LOG_FILE_NAME: &str = "debug.log";

/// Where debug builds write their log
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("autocountry").join(LOG_FILE_NAME))
}

/// Start file logging; `RUST_LOG` overrides the default `debug` level
///
/// Failing to open the log file is not fatal, the app just runs unlogged.
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
