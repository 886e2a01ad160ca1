pub mod config;
pub mod structured_logging;

pub use config::ConfigLoader;
pub use structured_logging::{
    init_structured_logging, ExecutionContext, JsonLayer, LoggingConfig, PerformanceMetrics,
    StructuredLogEntry,
};
