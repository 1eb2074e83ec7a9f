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

use std::borrow::Cow;

use http::uri::Authority;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// RequestDescriptor is a read-only view of the request about to be signed.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme, `http` if the uri doesn't carry one.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path as it appears in the uri, still percent encoded.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    /// Headers already present on the request.
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    /// Build a descriptor from a method and an absolute uri.
    pub fn new(method: Method, uri: &Uri) -> Result<Self> {
        let authority = uri.authority().cloned().ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;

        Ok(RequestDescriptor {
            method,
            scheme: uri.scheme().cloned().unwrap_or(Scheme::HTTP),
            authority,
            path: uri.path().to_string(),
            query: uri.query().map(|v| v.to_string()),
            headers: HeaderMap::new(),
        })
    }

    /// Build a descriptor from `http::request::Parts`.
    ///
    /// Headers are cloned, the parts are left untouched.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self> {
        let mut req = Self::new(parts.method.clone(), &parts.uri)?;
        req.headers = parts.headers.clone();
        Ok(req)
    }

    /// Host without port.
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// Port if it's set explicitly and differs from the scheme default.
    pub fn non_default_port(&self) -> Option<u16> {
        let port = self.authority.port_u16()?;
        let default = if self.scheme == Scheme::HTTPS {
            443
        } else if self.scheme == Scheme::HTTP {
            80
        } else {
            return Some(port);
        };

        (port != default).then_some(port)
    }

    /// The value of the `host` header: host plus the port if it's not the default one.
    pub fn host_header(&self) -> Cow<'_, str> {
        match self.non_default_port() {
            Some(port) => Cow::Owned(format!("{}:{}", self.host(), port)),
            None => Cow::Borrowed(self.host()),
        }
    }

    /// Get the path percent decoded.
    pub fn path_percent_decoded(&self) -> Result<Cow<'_, str>> {
        percent_encoding::percent_decode_str(&self.path)
            .decode_utf8()
            .map_err(|e| {
                Error::request_invalid(format!("path {} is not valid utf-8", self.path))
                    .with_source(anyhow::Error::new(e))
            })
    }
}
