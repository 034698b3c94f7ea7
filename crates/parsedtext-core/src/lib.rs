//! Parsedtext Core
//!
//! This crate provides the data model shared by every parsedtext crate:
//! token names, token metadata, the token map, and error definitions.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`TokenName`] - The `TOKEN-<pattern>-<sequence>` identifier
//! - [`Prop`], [`TokenProp`], [`Value`], [`BoundCallback`] - Typed metadata
//! - [`Token`], [`TokenMap`], [`ParseResult`] - Tokenizer output
//! - [`ParsedTextError`] - Error types

pub mod error;
pub mod name;
pub mod prop;
pub mod token;

pub use error::{ParsedTextError, Result};
pub use name::TokenName;
pub use prop::{BoundCallback, Callback, Prop, Props, TokenProp, TokenProps, Value};
pub use token::{ParseResult, Token, TokenMap};
