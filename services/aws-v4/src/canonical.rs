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

use std::fmt::Write;

use awsauth_core::{RequestDescriptor, Result};
use percent_encoding::utf8_percent_encode;

use crate::constants::{AWS_URI_ENCODE_SET, SIGNED_HEADERS, X_AMZ_DATE};

/// Build the canonical request string.
///
/// ```text
/// POST
/// /bots/IMRTYQC6BN/botAliases/GXHT5U6V6K/botLocales/en_US/sessions/10/text
///
/// host:runtime-v2-lex.eu-central-1.amazonaws.com
/// x-amz-date:20210806T123600Z
///
/// host;x-amz-date
/// 59f766dd9d2b20aa19315a5919572e666dbb91e921488cac505763d077298efb
/// ```
///
/// Only `host` and `x-amz-date` are signed, other request headers are ignored.
/// The query string is used as is: callers with more than one parameter must
/// pass them sorted by key.
pub fn canonical_request_string(
    req: &RequestDescriptor,
    timestamp: &str,
    content_hash: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", req.method)?;
    // Insert encoded path
    writeln!(f, "{}", canonical_uri(req)?)?;
    // Insert query
    writeln!(f, "{}", req.query.as_deref().unwrap_or_default())?;
    // Insert signed headers
    writeln!(f, "host:{}", req.host_header())?;
    writeln!(f, "{X_AMZ_DATE}:{timestamp}")?;
    writeln!(f)?;
    writeln!(f, "{SIGNED_HEADERS}")?;
    // Insert payload hash
    write!(f, "{content_hash}")?;

    Ok(f)
}

/// Percent encode the request path with AWS UriEncode rules.
///
/// The path is decoded first so already encoded input isn't encoded twice.
/// An empty path becomes `/`.
pub fn canonical_uri(req: &RequestDescriptor) -> Result<String> {
    let path = req.path_percent_decoded()?;
    if path.is_empty() {
        return Ok("/".to_string());
    }

    Ok(utf8_percent_encode(&path, &AWS_URI_ENCODE_SET).to_string())
}
