//! Behaviour tests exercising the full server stack over real sockets.

mod server_behaviour;
mod support;
