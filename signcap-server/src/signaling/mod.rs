mod connection_table;
mod event_sink;
mod relay;
mod ws_handler;

pub use connection_table::*;
pub use event_sink::*;
pub use relay::*;
pub use ws_handler::*;
