//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable, accessible UI components
//! inspired by shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardContent`], [`CardFooter`]: Card container
//! - [`Badge`]: Status pill and preference chips
//! - [`Avatar`]: Message author glyph
//! - [`ScrollArea`]: Scrollable container
//! - [`Separator`]: Visual separator line
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod button;
mod card;
mod icons;
mod scroll_area;
mod separator;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use icons::*;
pub use scroll_area::ScrollArea;
pub use separator::{Separator, SeparatorOrientation};
