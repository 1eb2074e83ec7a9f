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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers produced by the signer.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Signing protocol literals.
pub const AWS4: &str = "AWS4";
pub const AWS4_REQUEST: &str = "aws4_request";
pub const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";
/// Only `host` and `x-amz-date` take part in the signature.
pub const SIGNED_HEADERS: &str = "host;x-amz-date";

/// Hosts we can derive a region from end with this suffix.
pub const AMAZONAWS_COM_SUFFIX: &str = ".amazonaws.com";

/// Property holding the access key id.
pub const PROPERTY_ACCESS_KEY: &str = "accessKey";
/// Property holding the secret access key.
pub const PROPERTY_SECRET_KEY: &str = "secretKey";
/// Property holding the region, optional.
pub const PROPERTY_REGION_NAME: &str = "regionName";
/// Property holding the service name, e.g. `lex` or `iam`.
pub const PROPERTY_SERVICE_NAME: &str = "serviceName";

// Env values used in aws services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - '/' is kept as the path separator.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
