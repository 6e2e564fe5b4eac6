//! HTTP handlers.

pub mod login;
pub mod pages;
pub mod upload;
