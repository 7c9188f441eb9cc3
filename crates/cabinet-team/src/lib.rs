//! Cabinet Team - the specialist catalog
//!
//! Sixteen domain specialists, each a system prompt plus a model tier,
//! exposed to the dispatcher as eight grouped tools. A group tool takes an
//! `action` and a typed `params` payload, renders the action's prompt
//! template, and forwards it to the owning specialist in a single-shot
//! model call. The whole catalog is data: profiles are constants and the
//! groups are enums, not a type hierarchy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod groups;
pub mod profiles;
pub mod roster;
pub mod specialist;

pub use roster::{register_team, TeamConfig};
pub use specialist::{ModelTier, Specialist, SpecialistProfile};
