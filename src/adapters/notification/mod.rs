pub mod console;
pub mod log_file;
pub mod tracing_channel;

pub use console::ConsoleChannel;
pub use log_file::LogFileChannel;
pub use tracing_channel::TracingChannel;
