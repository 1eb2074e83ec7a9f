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

use awsauth_core::hash::{hex_sha256, EMPTY_STRING_SHA256};
use awsauth_core::{Payload, Result};
use bytes::Bytes;

/// ContentHash is the hashed payload together with the bytes it covers.
#[derive(Debug, Clone)]
pub struct ContentHash {
    /// Lower-case hex SHA256 of `body`.
    pub hex: String,
    /// The exact bytes to transmit.
    pub body: Bytes,
}

/// Hash the payload.
///
/// Entities are written into bytes exactly once, the returned `body` is what
/// the hash covers and what must be sent.
pub fn hash_payload(payload: Payload<'_>) -> Result<ContentHash> {
    let body = payload.to_bytes()?;
    let hex = if body.is_empty() {
        EMPTY_STRING_SHA256.to_string()
    } else {
        hex_sha256(&body)
    };

    Ok(ContentHash { hex, body })
}
