// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! The `liloconf` library crate.
//!
//! This keeps an in-memory model of a `lilo.conf` or GRUB legacy `menu.lst` style configuration file that can be
//! parsed, edited through dotted path expressions, and written back out without losing comments or ordering.
//!
//! The model is made up of a [`config::Document`], which owns a leading comment, a set of global options, and an
//! ordered list of [`config::section::Section`]s (one per boot entry). Every edit that a frontend makes should go
//! through the [`agent::Agent`] trait, which maps a [`agent::path::ConfPath`] onto that tree.
//!
//! A command line frontend using this crate can be found in `liloconf-cli`.
//!
//! ## MSRV
//!
//! The minimum supported rust version is 1.88.0.

/// The primary result type that wraps around [`crate::error::ConfError`].
pub type ConfResult<T> = Result<T, crate::error::ConfError>;

pub mod agent;
pub mod config;
pub mod error;
pub mod system;
