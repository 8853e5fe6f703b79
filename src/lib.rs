pub mod config;
pub mod decode;
pub mod server;
pub mod sink;

pub use server::{WriteReceiver, run_server};
pub use sink::{ConsoleSink, LogSink, MemorySink, Sink};
