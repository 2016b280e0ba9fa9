// Interface adapters: HTTP handlers, wire protocol, and in-process store adapters.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
