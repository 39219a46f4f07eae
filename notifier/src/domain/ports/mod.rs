//! Domain ports (traits)
//!
//! Port traits define the interfaces the pipeline requires.
//! Adapters provide concrete implementations of these traits.

pub mod chat;
pub mod directory;
pub mod team;

pub use chat::{Accessory, Block, ChatClient, ChatUser, Delivery, Text};
pub use directory::{DirectoryClient, DirectoryProfile};
pub use team::{TeamClient, TeamMember};
