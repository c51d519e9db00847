//! ChannelNotify - notification channels and the notification lifecycle
//!
//! This crate registers a fixed set of notification channels of increasing
//! importance and posts, taps and cancels notifications on them.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Channel catalog, notification value objects, config and errors
//! - **Application**: Lifecycle use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, console, XDG config, clock)
//! - **CLI**: Argument parsing, the main screen glue and the interactive session

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
