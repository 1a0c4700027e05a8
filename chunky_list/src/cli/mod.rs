// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

// Attach sources.
pub mod clap_config;
pub mod list_op;
pub mod run_script;

// Re-export.
pub use clap_config::*;
pub use list_op::*;
pub use run_script::*;
