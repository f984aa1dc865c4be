//! Bitbucket Server integration module
//!
//! This module provides:
//! - The `HttpClient` capability the repository resource talks through
//! - A reqwest-backed client for Bitbucket Server
//! - Wire types for the repository endpoint

pub mod client;
pub mod models;

pub use client::{BitbucketClient, HttpClient, HttpResponse};
pub use models::{CloneLink, Links, Origin, ProjectRef, RemoteRepository};
