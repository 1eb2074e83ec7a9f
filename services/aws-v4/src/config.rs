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

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use awsauth_core::utils::Redact;
use awsauth_core::{Env, Error, Result};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::constants::*;
use crate::{Credential, RequestSigner};

/// Config for signing aws requests.
///
/// Every field is optional here; [`Config::credential`] and
/// [`Config::signer`] validate what they need.
#[derive(Clone, Default, Deserialize)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - property: [`PROPERTY_ACCESS_KEY`]
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    #[serde(rename = "accessKey")]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - property: [`PROPERTY_SECRET_KEY`]
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    #[serde(rename = "secretKey")]
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - property: [`PROPERTY_REGION_NAME`]
    /// - env value: [`AWS_REGION`], then [`AWS_DEFAULT_REGION`]
    ///
    /// If none of them is set, the region is parsed from the request host.
    #[serde(rename = "regionName")]
    pub region: Option<String>,
    /// `service` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - property: [`PROPERTY_SERVICE_NAME`]
    #[serde(rename = "serviceName")]
    pub service: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "access_key_id",
                &self.access_key_id.as_deref().map(Redact::id),
            )
            .field(
                "secret_access_key",
                &self.secret_access_key.as_deref().map(Redact::secret),
            )
            .field("region", &self.region)
            .field("service", &self.service)
            .finish()
    }
}

impl Config {
    /// Load config from a property bag.
    ///
    /// `accessKey`, `secretKey` and `serviceName` are required, `regionName`
    /// is optional.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        Ok(Config {
            access_key_id: Some(props.require_str(PROPERTY_ACCESS_KEY)?),
            secret_access_key: Some(props.require_str(PROPERTY_SECRET_KEY)?),
            region: props.optional_str(PROPERTY_REGION_NAME)?,
            service: Some(props.require_str(PROPERTY_SERVICE_NAME)?),
        })
    }

    /// Fill unset fields from env.
    ///
    /// Fields that are already set win over env values.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        let var = |key: &str| env.var(key).filter(|v| !v.trim().is_empty());

        if self.access_key_id.is_none() {
            self.access_key_id = var(AWS_ACCESS_KEY_ID);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = var(AWS_SECRET_ACCESS_KEY);
        }
        if self.region.is_none() {
            self.region = var(AWS_REGION).or_else(|| var(AWS_DEFAULT_REGION));
        }

        debug!("config loaded from env: {self:?}");
        self
    }

    /// Build the credential from this config.
    pub fn credential(&self) -> Result<Credential> {
        let access_key_id = required(&self.access_key_id, PROPERTY_ACCESS_KEY)?;
        let secret_access_key = required(&self.secret_access_key, PROPERTY_SECRET_KEY)?;

        Ok(Credential::new(access_key_id, secret_access_key))
    }

    /// Build the request signer from this config.
    pub fn signer(&self) -> Result<RequestSigner> {
        let service = required(&self.service, PROPERTY_SERVICE_NAME)?;

        let mut signer = RequestSigner::new(service);
        if let Some(region) = &self.region {
            signer = signer.with_region(region);
        }
        Ok(signer)
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        None => Err(Error::config_invalid(format!(
            "No value configured for property {name}"
        ))),
        Some("") => Err(Error::config_invalid(format!(
            "Blank value configured for property {name}"
        ))),
        Some(v) => Ok(v),
    }
}

/// Properties is a bag of named configuration values.
///
/// It mirrors how http client frameworks expose per-client properties:
/// values are loosely typed, so every lookup checks that the value is a
/// string and errors name the available properties.
#[derive(Clone, Default)]
pub struct Properties {
    values: BTreeMap<String, Value>,
}

impl Properties {
    /// Create an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing the old value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a property, replacing the old value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Names of all configured properties, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Get a required string property, trimmed.
    pub fn require_str(&self, name: &str) -> Result<String> {
        let Some(Value::String(value)) = self.values.get(name) else {
            return Err(Error::config_invalid(format!(
                "No value configured for property {name}. Available properties are [{}]",
                self.names().join(", ")
            )));
        };

        let value = value.trim();
        if value.is_empty() {
            return Err(Error::config_invalid(format!(
                "Blank value configured for property {name}"
            )));
        }
        Ok(value.to_string())
    }

    /// Get an optional string property, trimmed.
    ///
    /// Missing, `null` and blank values are all `None`.
    pub fn optional_str(&self, name: &str) -> Result<Option<String>> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(v)) if v.trim().is_empty() => Ok(None),
            Some(Value::String(v)) => Ok(Some(v.trim().to_string())),
            Some(v) => Err(Error::config_invalid(format!(
                "Property {name} must be a string, got {}",
                value_type(v)
            ))),
        }
    }
}

fn value_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Debug for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Values may hold secrets.
        f.debug_set().entries(self.values.keys()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
