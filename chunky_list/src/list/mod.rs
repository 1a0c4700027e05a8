// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bounded_segment;
pub mod chain;
pub mod chunked_list;
pub mod chunked_list_config;
pub mod growable_list;
pub mod list_api;

// Re-export.
pub use bounded_segment::*;
pub use chain::*;
pub use chunked_list::*;
pub use chunked_list_config::*;
pub use growable_list::*;
pub use list_api::*;
