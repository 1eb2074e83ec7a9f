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

//! Utility functions and types.

use std::fmt::Debug;
use std::fmt::Formatter;

/// Redact hides a secret when it's printed via `Debug`.
///
/// Access key ids keep their first four characters so two different keys
/// can still be told apart in logs (`AKID***`). Everything shorter than
/// sixteen characters, and every value created with [`Redact::secret`],
/// is printed as `***` only.
pub struct Redact<'a> {
    value: &'a str,
    keep_prefix: bool,
}

impl<'a> Redact<'a> {
    /// Redact an identifier, keeping a short prefix visible.
    pub fn id(value: &'a str) -> Self {
        Self {
            value,
            keep_prefix: true,
        }
    }

    /// Redact a secret entirely.
    pub fn secret(value: &'a str) -> Self {
        Self {
            value,
            keep_prefix: false,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::secret(value)
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            return f.write_str("EMPTY");
        }
        if !self.keep_prefix || self.value.len() < 16 {
            return f.write_str("***");
        }

        match self.value.get(..4) {
            Some(prefix) => write!(f, "{prefix}***"),
            None => f.write_str("***"),
        }
    }
}
