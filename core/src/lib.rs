// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Core components for signing AWS requests.
//!
//! This crate provides the building blocks shared by the awsauth signers.
//! It has no knowledge of any particular signing protocol: it only knows how
//! to describe an outgoing request, how to turn its body into the exact bytes
//! that will hit the wire, and how to hash them.
//!
//! ## Overview
//!
//! - [`RequestDescriptor`]: a read-only view of the request about to be signed
//! - [`Payload`] and [`WriteBody`]: the body representation and the capability that
//!   serializes structured bodies into wire bytes
//! - [`Error`] and [`ErrorKind`]: the error type returned by every fallible operation
//! - [`Env`]: environment variable access, swappable for tests
//!
//! ## Example
//!
//! ```
//! use awsauth_core::{hash::hex_sha256, Payload, RequestDescriptor};
//!
//! # fn main() -> awsauth_core::Result<()> {
//! let req = RequestDescriptor::new(
//!     http::Method::POST,
//!     &"https://runtime-v2-lex.eu-central-1.amazonaws.com/bots".parse::<http::Uri>()?,
//! )?;
//! assert_eq!(req.host(), "runtime-v2-lex.eu-central-1.amazonaws.com");
//!
//! let body = Payload::Bytes(br#"{"text":"Book Hotel"}"#).to_bytes()?;
//! assert_eq!(hex_sha256(&body).len(), 64);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: timestamp formatting used by SigV4
//! - [`utils`]: redaction of secrets in debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod body;
pub use body::{JsonBody, Payload, WriteBody};
mod request;
pub use request::RequestDescriptor;
