//! PushBridge - hosted push messages as desktop notifications
//!
//! This crate registers with a hosted push-messaging provider using
//! provider-issued project credentials and shows an operating-system
//! notification for every background message received.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (payload, notification request, config) and errors
//! - **Application**: The bridge use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (hosted messaging client, notify-rust, etc.)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
