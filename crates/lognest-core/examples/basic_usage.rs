//! Basic usage example - named loggers with lazy configuration discovery

use lognest::{Result, Severity};

fn main() -> Result<()> {
    // Optional: point the registry at an explicit configuration file.
    // Without this, discovery walks the host root, the binary directory,
    // and the invoking directory.
    if let Some(path) = std::env::args().nth(1) {
        println!("Using configuration override: {}", path);
        lognest::set_config_path(path);
    }

    let worker = lognest::logger("Worker")?;
    worker.info("worker subsystem starting");

    let mut fields = lognest::Fields::new();
    fields.insert("attempt".to_string(), serde_json::json!(1));
    worker.log(Severity::Warn, "retrying connection", Some(&fields));

    // Repeated lookups are cache hits returning the same handle.
    let again = lognest::logger("Worker")?;
    assert!(worker.ptr_eq(&again));

    let default = lognest::default_logger()?;
    default.debug("default logger ready");

    Ok(())
}
