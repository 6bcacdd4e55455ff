#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core of the mical arithmetic engine: parser, input guard, evaluator and
//! tree walker, tied together by [`api::Engine`].

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod evaluator;
pub mod guard;
pub mod parser;
pub mod visitor;
