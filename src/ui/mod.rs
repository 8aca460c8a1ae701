//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the chat
//! surface, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Main application component and coordinator state
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat-specific components

pub mod app;
pub mod chat;
pub mod components;
