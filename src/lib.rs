//! Maanasa - Indian food recommendation chat UI
//!
//! A chat-style web interface for a food-recommendation assistant. The UI
//! is composed of Leptos components rendered server-side and served by an
//! Axum HTTP server.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server rendering the Leptos shell per request
//! - **Preferences**: pure preference record plus display derivation
//! - **Thread**: view-local conversation state, never persisted
//! - **UI**: Leptos SSR components in ShadCN style
//!
//! # Modules
//!
//! - [`config`]: Layered application configuration
//! - [`prefs`]: Preference record, label tables, and summary chips
//! - [`server`]: Router, page rendering, and server startup
//! - [`thread`]: Conversation thread model
//! - [`ui`]: Application shell, chat components, and UI primitives

pub mod config;
pub mod prefs;
pub mod server;
pub mod thread;
pub mod ui;
