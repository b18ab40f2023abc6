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

use std::fmt::{Debug, Formatter};

use tetsign_core::utils::Redact;
use tetsign_core::{Error, Result, SigningCredential};

use crate::constants::API_SECRET_BYTE_LENGTH;

/// Raw api secret used as the HMAC key.
///
/// Always exactly [`API_SECRET_BYTE_LENGTH`] bytes long.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret([u8; API_SECRET_BYTE_LENGTH]);

impl ApiSecret {
    /// Build an api secret from its text form.
    ///
    /// Fails with [`tetsign_core::ErrorKind::CredentialInvalid`] unless the
    /// text is exactly [`API_SECRET_BYTE_LENGTH`] bytes.
    pub fn new(api_secret: &str) -> Result<Self> {
        let raw: [u8; API_SECRET_BYTE_LENGTH] =
            api_secret.as_bytes().try_into().map_err(|_| {
                Error::credential_invalid(format!(
                    "invalid number {} of api secret bytes, required {}",
                    api_secret.len(),
                    API_SECRET_BYTE_LENGTH
                ))
            })?;

        Ok(Self(raw))
    }

    /// The raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for ApiSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

/// Credential for the Secure Workload API.
#[derive(Clone)]
pub struct Credential {
    /// Api key, sent verbatim in the `Id` header.
    pub api_key: String,
    /// Api secret, never sent.
    pub api_secret: ApiSecret,
}

impl Credential {
    /// Create a new credential.
    ///
    /// The api key is not checked here, the secret must have the required length.
    pub fn new(api_key: impl Into<String>, api_secret: &str) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            api_secret: ApiSecret::new(api_secret)?,
        })
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &self.api_secret)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        true
    }
}
