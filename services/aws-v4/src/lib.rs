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

//! AWS SigV4 header signer.
//!
//! Signs outgoing requests for AWS services such as Lex with the
//! `Authorization` header scheme. Only `host` and `x-amz-date` are signed.
//!
//! ## Example
//!
//! ```
//! use awsauth_core::{Payload, RequestDescriptor};
//! use awsauth_v4::{Config, Properties};
//!
//! # fn main() -> awsauth_core::Result<()> {
//! let props = Properties::new()
//!     .with("accessKey", "AKIDEXAMPLE")
//!     .with("secretKey", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
//!     .with("serviceName", "lex");
//! let config = Config::from_properties(&props)?;
//!
//! let req = RequestDescriptor::new(
//!     http::Method::POST,
//!     &"https://runtime-v2-lex.eu-central-1.amazonaws.com/bots/IMRTYQC6BN/botAliases/GXHT5U6V6K/botLocales/en_US/sessions/10/text"
//!         .parse::<http::Uri>()?,
//! )?;
//!
//! let output = config
//!     .signer()?
//!     .sign(&req, Payload::from(r#"{"text":"Book Hotel"}"#), &config.credential()?)?;
//! assert!(output.authorization.contains("/eu-central-1/lex/aws4_request"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::{
    PROPERTY_ACCESS_KEY, PROPERTY_REGION_NAME, PROPERTY_SECRET_KEY, PROPERTY_SERVICE_NAME,
};

mod config;
pub use config::{Config, Properties};
mod credential;
pub use credential::Credential;
mod region;
pub use region::{region_from_host, resolve_region};
mod content;
pub use content::{hash_payload, ContentHash};
mod canonical;
pub use canonical::{canonical_request_string, canonical_uri};
mod sign_request;
pub use sign_request::{generate_signing_key, RequestSigner, SigningOutput};
