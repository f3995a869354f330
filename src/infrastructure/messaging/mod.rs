//! Hosted messaging provider adapter

mod hosted;

pub use hosted::HostedMessagingClient;
