// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the FAQ page.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. Translation files are embedded at build time, one
//! `.ftl` resource per locale; the set of embedded resources defines the set
//! of locales the page can be served in.
//!
//! # Features
//!
//! - Compile-time embedding of `.ftl` translation files
//! - Per-request locale lookup (the service answers many locales at once)
//! - Fallback to the default locale when a translation is missing

pub mod fluent;
