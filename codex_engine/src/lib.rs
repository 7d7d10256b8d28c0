//! # Codex Engine
//!
//! Query routing and content extraction for the encyclopedia. The engine sits
//! between a presentation layer and a [`codex_content::ContentStore`]: it
//! decides what a reader's input means, fetches and caches listings, resolves
//! single items, and returns structured results ready to render.
//!
//! ## Core Components
//!
//! - **query**: Classifies input as a question or a keyword search
//! - **cache**: Holds the bulk metadata bundle loaded at startup
//! - **resolver**: Fetches item text; extracts skills from the shared blob
//! - **formatter**: Splits content into paragraphs and soft-broken lines
//! - **search**: Keyword search across all category listings
//! - **events**: Request/response messages for the presentation layer
//!
//! ## Design Philosophy
//!
//! - **Resilient browsing**: Listing failures degrade to empty listings
//! - **Honest details**: A failed item lookup is reported, never shown as blank
//! - **Heuristics kept stable**: Skill extraction follows the data's existing
//!   conventions rather than a stricter grammar

pub mod cache;
pub mod config;
pub mod encyclopedia;
pub mod events;
pub mod formatter;
pub mod pages;
pub mod query;
pub mod resolver;
pub mod search;

pub use cache::*;
pub use config::*;
pub use encyclopedia::*;
pub use events::*;
pub use pages::*;
pub use query::*;
pub use resolver::*;
pub use search::SearchHit;
