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

//! Compare our output with the aws-sigv4 crate.
//!
//! aws-sigv4 signs every header present on the request, so the requests here
//! carry no headers of their own and the signed set is `host;x-amz-date` on
//! both sides.

use std::time::SystemTime;

use super::*;
use anyhow::Result;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use awsauth_core::time::now;
use awsauth_core::Payload;
use awsauth_v4::RequestSigner;
use http::{header, Request};

/// (name, method, uri, body, region, service)
type TestCase = (
    &'static str,
    Method,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

fn test_cases() -> Vec<TestCase> {
    vec![
        (
            "get_root",
            Method::GET,
            "https://example.amazonaws.com/",
            "",
            "us-east-1",
            "service",
        ),
        (
            "get_with_query",
            Method::GET,
            "https://example.amazonaws.com/?Param1=value1&Param2=value2",
            "",
            "us-east-1",
            "service",
        ),
        (
            "get_path",
            Method::GET,
            "https://iam.us-east-1.amazonaws.com/hello/world",
            "",
            "us-east-1",
            "iam",
        ),
        ("lex_post", Method::POST, LEX_URL, LEX_BODY, "eu-central-1", "lex"),
        (
            "put_body",
            Method::PUT,
            "https://example.amazonaws.com/hello",
            "Hello,World!",
            "us-west-2",
            "service",
        ),
    ]
}

fn expected_authorization(
    method: &Method,
    uri: &str,
    body: &str,
    region: &str,
    service: &str,
    time: DateTime,
) -> Result<String> {
    let ss = SigningSettings::default();
    let id = Credentials::new(ACCESS_KEY, SECRET_KEY, None, None, "test").into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region(region)
        .name(service)
        .time(SystemTime::from(time))
        .settings(ss)
        .build()
        .expect("signing params must be valid");

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            method.as_str(),
            uri,
            std::iter::empty(),
            SignableBody::Bytes(body.as_bytes()),
        )?,
        &sp.into(),
    )?;
    let (instructions, _) = output.into_parts();

    let mut req = Request::builder()
        .method(method.clone())
        .uri(uri)
        .body(())?;
    instructions.apply_to_request_http1x(&mut req);

    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .expect("aws-sigv4 must set authorization")
        .to_str()?
        .to_string();
    Ok(value)
}

fn check(time: DateTime) -> Result<()> {
    for (name, method, uri, body, region, service) in test_cases() {
        let expected = expected_authorization(&method, uri, body, region, service, time)?;

        let output = RequestSigner::new(service)
            .with_region(region)
            .with_time(time)
            .sign(
                &descriptor(method, uri),
                Payload::from(body),
                &example_credential(),
            )?;

        assert_eq!(output.authorization, expected, "{name} authorization mismatch");
    }
    Ok(())
}

#[test]
fn test_matches_aws_sigv4_at_fixed_time() -> Result<()> {
    init_logger();
    check(time("20210806T123600Z"))
}

#[test]
fn test_matches_aws_sigv4_now() -> Result<()> {
    init_logger();
    check(now())
}
