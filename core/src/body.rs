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

use std::fmt::Debug;
use std::fmt::Formatter;

use bytes::Bytes;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// WriteBody turns a structured body into the bytes sent on the wire.
///
/// Implement it with the same serializer your transport uses. The signer
/// calls it exactly once per signing and hands the produced bytes back to
/// the caller, who must send them unchanged.
pub trait WriteBody: Send + Sync {
    /// Append the wire representation of this body to `buf`.
    fn write_body(&self, buf: &mut Vec<u8>) -> Result<()>;
}

/// JsonBody writes its value as compact JSON via `serde_json`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T: Serialize + Send + Sync> WriteBody for JsonBody<T> {
    fn write_body(&self, buf: &mut Vec<u8>) -> Result<()> {
        serde_json::to_writer(buf, &self.0)
            .map_err(|e| Error::body_invalid("failed to write json body").with_source(e))
    }
}

/// Payload is the body of the request being signed.
#[derive(Clone, Copy)]
pub enum Payload<'a> {
    /// The request has no body.
    Empty,
    /// The body is already raw bytes.
    Bytes(&'a [u8]),
    /// The body must be written into bytes first.
    Entity(&'a dyn WriteBody),
}

impl Debug for Payload<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Empty => f.write_str("Empty"),
            Payload::Bytes(bs) => write!(f, "Bytes({} bytes)", bs.len()),
            Payload::Entity(_) => f.write_str("Entity"),
        }
    }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(value: &'a [u8]) -> Self {
        if value.is_empty() {
            Payload::Empty
        } else {
            Payload::Bytes(value)
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(value: &'a str) -> Self {
        Payload::from(value.as_bytes())
    }
}

impl Payload<'_> {
    /// Produce the exact bytes that will be transmitted.
    pub fn to_bytes(&self) -> Result<Bytes> {
        match self {
            Payload::Empty => Ok(Bytes::new()),
            Payload::Bytes(bs) => Ok(Bytes::copy_from_slice(bs)),
            Payload::Entity(w) => {
                let mut buf = Vec::with_capacity(128);
                w.write_body(&mut buf)?;
                Ok(Bytes::from(buf))
            }
        }
    }
}
