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

use awsauth_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use awsauth_core::time::{format_date, format_iso8601, now, DateTime};
use awsauth_core::{Error, Payload, RequestDescriptor, Result};
use bytes::Bytes;
use http::request::Parts;
use http::{header, HeaderMap, HeaderValue};
use log::debug;

use crate::canonical::canonical_request_string;
use crate::constants::{
    AWS4, AWS4_HMAC_SHA256, AWS4_REQUEST, PROPERTY_SERVICE_NAME, SIGNED_HEADERS,
    X_AMZ_CONTENT_SHA_256, X_AMZ_DATE,
};
use crate::content::hash_payload;
use crate::region::resolve_region;
use crate::Credential;

/// RequestSigner that implement AWS SigV4 header signing.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// Only `host` and `x-amz-date` are signed. The signer holds immutable
/// configuration only and can be shared between threads.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: Option<String>,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given service, e.g. `lex`.
    ///
    /// Without [`RequestSigner::with_region`], the region is parsed from the
    /// request host.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.trim().to_string(),
            region: None,

            time: None,
        }
    }

    /// Specify the signing region.
    ///
    /// A blank region is ignored and the region is parsed from the host.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request, returning the headers to add and the body to send.
    pub fn sign(
        &self,
        req: &RequestDescriptor,
        payload: Payload<'_>,
        cred: &Credential,
    ) -> Result<SigningOutput> {
        let now = self.time.unwrap_or_else(now);
        let timestamp = format_iso8601(now);
        let date = format_date(now);

        let region = resolve_region(self.region.as_deref(), req.host())?;
        debug!("signing region: {region}");

        cred.check()?;
        if self.service.is_empty() {
            return Err(Error::config_invalid(format!(
                "Blank value configured for property {PROPERTY_SERVICE_NAME}"
            )));
        }

        let content = hash_payload(payload)?;

        // build canonical request and string to sign.
        let creq = canonical_request_string(req, &timestamp, &content.hex)?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20210806/<region>/<service>/aws4_request"
        let scope = format!("{date}/{region}/{}/{AWS4_REQUEST}", self.service);
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20210806T123600Z
        // 20210806/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{AWS4_HMAC_SHA256}")?;
            writeln!(f, "{timestamp}")?;
            writeln!(f, "{scope}")?;
            write!(f, "{encoded_req}")?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, &date, &region, &self.service)?;
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes())?;

        let authorization = format!(
            "{AWS4_HMAC_SHA256} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            cred.access_key_id
        );

        Ok(SigningOutput {
            content_sha256: content.hex,
            date: timestamp,
            authorization,
            body: content.body,
        })
    }

    /// Sign the request parts in place.
    ///
    /// The signed headers are set on `parts` and the body bytes to send are
    /// returned. On error `parts` is left untouched.
    pub fn sign_request(
        &self,
        parts: &mut Parts,
        payload: Payload<'_>,
        cred: &Credential,
    ) -> Result<Bytes> {
        let req = RequestDescriptor::from_parts(parts)?;
        let output = self.sign(&req, payload, cred)?;
        output.apply(&mut parts.headers)?;

        Ok(output.body)
    }
}

/// SigningOutput carries the headers produced by signing plus the body bytes
/// that were hashed.
#[derive(Clone)]
pub struct SigningOutput {
    /// Value of `x-amz-content-sha256`.
    pub content_sha256: String,
    /// Value of `x-amz-date`.
    pub date: String,
    /// Value of `Authorization`.
    pub authorization: String,
    /// The exact bytes covered by `content_sha256`.
    pub body: Bytes,
}

impl std::fmt::Debug for SigningOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningOutput")
            .field("content_sha256", &self.content_sha256)
            .field("date", &self.date)
            .field("authorization", &"<sensitive>")
            .field("body", &format_args!("{} bytes", self.body.len()))
            .finish()
    }
}

impl SigningOutput {
    /// Set the signed headers on `headers`, replacing existing values.
    ///
    /// `headers` is only modified if every value is valid.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        let content_sha256 = HeaderValue::from_str(&self.content_sha256)?;
        let date = HeaderValue::from_str(&self.date)?;
        let mut authorization = HeaderValue::from_str(&self.authorization)?;
        authorization.set_sensitive(true);

        headers.insert(X_AMZ_CONTENT_SHA_256, content_sha256);
        headers.insert(X_AMZ_DATE, date);
        headers.insert(header::AUTHORIZATION, authorization);
        Ok(())
    }
}

/// Derive the SigV4 signing key.
///
/// `date` is the `yyyyMMdd` date stamp of the signing instant.
pub fn generate_signing_key(
    secret: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>> {
    // Sign secret
    let secret = format!("{AWS4}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes())?;
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes())?;
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}
