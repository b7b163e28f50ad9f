// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Lexical re-indentation engine.
//!
//! One shared string-aware scan drives the brace-family profiles; tag
//! markup runs through its own depth pass. No parsing, only trigger
//! characters and a nesting counter.

mod config;
mod diagnostics;
mod emit;
mod engine;
mod markup;
mod profile;
mod scanner;

pub use config::{ReformatConfig, ReformatConfigError};
pub use diagnostics::ReformatDiagnostic;
pub use engine::{
    FileReport, FormatMode, ReformatOutput, Reformatter, RunReport, RunSummary,
};
pub use profile::LanguageTag;
