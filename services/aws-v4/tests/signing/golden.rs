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

//! Frozen signatures for fixed instants.

use super::*;
use anyhow::Result;
use awsauth_core::{JsonBody, Payload, StaticEnv};
use awsauth_v4::{Config, Properties, RequestSigner};
use http::{header, Request};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn suite_authorization(signature: &str) -> String {
    format!(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature={signature}"
    )
}

#[test_case(Method::GET, "https://example.amazonaws.com/", "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "get vanilla")]
#[test_case(Method::GET, "https://example.amazonaws.com/?Param1=value1&Param2=value2", "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"; "get vanilla query")]
#[test_case(Method::POST, "https://example.amazonaws.com/", "5da7c1a2acd57cee7505fc6676e4e544621c30862966e37dddb68e92efbe5d6b"; "post vanilla")]
#[test_case(Method::GET, "https://example.amazonaws.com", "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "empty path")]
#[test_case(Method::GET, "https://example.amazonaws.com:443/", "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"; "default port")]
#[test_case(Method::GET, "http://localhost:9000/", "301e6d0c86ec20cf823e78da79a810079b574c9715922b68e840a0aa4b300ad9"; "custom port")]
#[test_case(Method::GET, "https://example.amazonaws.com/example%20space/%2A", "95675249cdd30fd5261a40352c8d03f31878e9711a8369d8bd9556cc7bed6c63"; "encoded path")]
#[test_case(Method::GET, "https://example.amazonaws.com/example%20space/*", "95675249cdd30fd5261a40352c8d03f31878e9711a8369d8bd9556cc7bed6c63"; "raw asterisk")]
fn test_signature_suite(method: Method, uri: &str, signature: &str) {
    init_logger();

    let signer = RequestSigner::new("service")
        .with_region("us-east-1")
        .with_time(time("20150830T123600Z"));

    let output = signer
        .sign(&descriptor(method, uri), Payload::Empty, &example_credential())
        .expect("signing must succeed");

    assert_eq!(output.date, "20150830T123600Z");
    assert_eq!(
        output.content_sha256,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(output.authorization, suite_authorization(signature));
}

const LEX_AUTHORIZATION: &str = "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210806/eu-central-1/lex/aws4_request, SignedHeaders=host;x-amz-date, Signature=c15179d754994fab87dd65788f260ff873c5c35f90d90c24ff5b612b80be3576";

fn lex_signer() -> RequestSigner {
    RequestSigner::new("lex").with_time(time("20210806T123600Z"))
}

#[test]
fn test_lex_bytes() -> Result<()> {
    init_logger();

    let output = lex_signer().sign(
        &descriptor(Method::POST, LEX_URL),
        Payload::from(LEX_BODY),
        &example_credential(),
    )?;

    assert_eq!(
        output.content_sha256,
        "59f766dd9d2b20aa19315a5919572e666dbb91e921488cac505763d077298efb"
    );
    assert_eq!(output.date, "20210806T123600Z");
    assert_eq!(output.authorization, LEX_AUTHORIZATION);
    Ok(())
}

#[test]
fn test_lex_json_entity() -> Result<()> {
    init_logger();

    let entity = JsonBody(serde_json::json!({ "text": "Book Hotel" }));
    let output = lex_signer().sign(
        &descriptor(Method::POST, LEX_URL),
        Payload::Entity(&entity),
        &example_credential(),
    )?;

    assert_eq!(output.authorization, LEX_AUTHORIZATION);
    assert_eq!(output.body.as_ref(), LEX_BODY.as_bytes());
    Ok(())
}

#[test]
fn test_lex_from_properties() -> Result<()> {
    init_logger();

    let props = Properties::new()
        .with("accessKey", ACCESS_KEY)
        .with("secretKey", SECRET_KEY)
        .with("serviceName", "lex");
    let cfg = Config::from_properties(&props)?;

    let output = cfg.signer()?.with_time(time("20210806T123600Z")).sign(
        &descriptor(Method::POST, LEX_URL),
        Payload::from(LEX_BODY),
        &cfg.credential()?,
    )?;

    assert_eq!(output.authorization, LEX_AUTHORIZATION);
    Ok(())
}

#[test]
fn test_explicit_region_overrides_host() -> Result<()> {
    init_logger();

    let env = StaticEnv::from_iter([("AWS_REGION", "us-east-1")]);
    let cfg = Config {
        access_key_id: Some(ACCESS_KEY.to_string()),
        secret_access_key: Some(SECRET_KEY.to_string()),
        service: Some("lex".to_string()),
        ..Default::default()
    }
    .from_env(&env);

    let output = cfg.signer()?.with_time(time("20210806T123600Z")).sign(
        &descriptor(Method::POST, LEX_URL),
        Payload::from(LEX_BODY),
        &cfg.credential()?,
    )?;

    assert_eq!(
        output.authorization,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210806/us-east-1/lex/aws4_request, SignedHeaders=host;x-amz-date, Signature=79f6f3290da98231f0c6fdfb2a9207b5ee5e85b571ffc52e2ee3da67cb52f76a"
    );
    Ok(())
}

#[test]
fn test_lex_sign_request() -> Result<()> {
    init_logger();

    let req = Request::post(LEX_URL)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json")
        .body(())?;
    let (mut parts, _) = req.into_parts();

    let body = lex_signer().sign_request(
        &mut parts,
        Payload::from(LEX_BODY),
        &example_credential(),
    )?;

    // Unsigned headers don't change the signature.
    assert_eq!(parts.headers[header::AUTHORIZATION], LEX_AUTHORIZATION);
    assert_eq!(parts.headers["x-amz-date"], "20210806T123600Z");
    assert_eq!(
        parts.headers["x-amz-content-sha256"],
        "59f766dd9d2b20aa19315a5919572e666dbb91e921488cac505763d077298efb"
    );
    assert_eq!(body.as_ref(), LEX_BODY.as_bytes());
    Ok(())
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_signer_is_send_sync() {
    assert_send_sync::<RequestSigner>();
    assert_send_sync::<Credential>();
}

#[test]
fn test_lex_shared_signer_across_threads() {
    init_logger();

    let signer = lex_signer();
    let cred = example_credential();
    let req = descriptor(Method::POST, LEX_URL);

    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    signer
                        .sign(&req, Payload::from(LEX_BODY), &cred)
                        .expect("signing must succeed")
                        .authorization
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("signing thread must not panic"))
            .collect()
    });

    assert_eq!(outputs.len(), 8);
    for authorization in outputs {
        assert_eq!(authorization, LEX_AUTHORIZATION);
    }
}
