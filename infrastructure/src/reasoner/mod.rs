//! Reasoner adapters
//!
//! Two implementations of the reasoning port: a deterministic keyword
//! matcher for offline use and a scripted reasoner that replays canned raw
//! outputs through the shared decision parser.

pub mod decision;
pub mod keyword;
pub mod scripted;

pub use decision::parse_tool_call;
pub use keyword::KeywordReasoner;
pub use scripted::ScriptedReasoner;
