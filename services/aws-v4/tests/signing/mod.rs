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

mod compat;
mod golden;

use awsauth_core::time::{parse_iso8601, DateTime};
use awsauth_core::RequestDescriptor;
use awsauth_v4::Credential;
use http::Method;

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

pub const LEX_URL: &str = "https://runtime-v2-lex.eu-central-1.amazonaws.com/bots/IMRTYQC6BN/botAliases/GXHT5U6V6K/botLocales/en_US/sessions/10/text";
pub const LEX_BODY: &str = r#"{"text":"Book Hotel"}"#;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Credential used by the AWS signature v4 test suite.
pub fn example_credential() -> Credential {
    Credential::new(ACCESS_KEY, SECRET_KEY)
}

pub fn time(s: &str) -> DateTime {
    parse_iso8601(s).expect("time must be valid")
}

pub fn descriptor(method: Method, uri: &str) -> RequestDescriptor {
    RequestDescriptor::new(method, &uri.parse().expect("uri must be valid"))
        .expect("descriptor must be valid")
}
