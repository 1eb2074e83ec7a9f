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

//! Region resolution.

use awsauth_core::{Error, Result};
use log::debug;

use crate::constants::AMAZONAWS_COM_SUFFIX;

/// Resolve the signing region.
///
/// An explicit, non-blank region is used as is (trimmed). Otherwise the
/// region is parsed from the host via [`region_from_host`].
pub fn resolve_region(explicit: Option<&str>, host: &str) -> Result<String> {
    if let Some(region) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(region.to_string());
    }

    let region = region_from_host(host)?;
    debug!("region {region} parsed from host {host}");
    Ok(region)
}

/// Parse the region out of an `*.amazonaws.com` host.
///
/// The region is the last label before `.amazonaws.com`, lower-cased:
///
/// ```text
/// foo.lex.eu-central-1.amazonaws.com => eu-central-1
/// runtime-v2-lex.eu-central-1.amazonaws.com => eu-central-1
/// ```
pub fn region_from_host(host: &str) -> Result<String> {
    let Some(rest) = strip_suffix_ignore_ascii_case(host, AMAZONAWS_COM_SUFFIX) else {
        return Err(Error::config_invalid(format!(
            "No regionName configured and host {host} doesn't end with {AMAZONAWS_COM_SUFFIX}"
        )));
    };

    let region = rest.rsplit('.').next().unwrap_or_default().trim();
    if region.is_empty() {
        return Err(Error::config_invalid(format!(
            "No regionName configured and host {host} has no region label"
        )));
    }

    Ok(region.to_ascii_lowercase())
}

// Host names are case-insensitive.
fn strip_suffix_ignore_ascii_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then_some(&s[..split])
}
