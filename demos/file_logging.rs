//! File logging with per-logger levels loaded from JSON

use rust_logger_bridge::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let config = BackendConfig::from_json(
        r#"{
            "root_level": "WARN",
            "levels": { "demo.orders": "DEBUG" }
        }"#,
    )?;

    let manager = Arc::new(
        BackendManager::new(config)
            .with_appender(Box::new(FileAppender::new("bridge_demo.log")?))
            .with_appender(Box::new(
                FileAppender::new("bridge_demo.jsonl")?.with_output_format(OutputFormat::Json),
            )),
    );
    let registry = AdapterRegistry::new(Arc::clone(&manager) as Arc<dyn LoggerManager>);

    let orders = registry.get_logger("demo.orders")?;
    let billing = registry.get_logger("demo.billing")?;

    for id in 0..5 {
        orders.debug_arg("order {} created", &id)?;
        billing.info_arg("invoice {} issued", &id)?; // below WARN, dropped
    }
    billing.warn("billing backlog growing")?;

    manager.flush()?;
    println!("wrote bridge_demo.log and bridge_demo.jsonl");
    Ok(())
}
