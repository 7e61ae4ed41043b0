// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Authentication tokens
//!
//! Tokens are passed through to the runtime untouched; the handshake that
//! consumes them is not part of this crate.

use crate::statement::Parameters;
use serde::Serialize;
use std::fmt;

/// Credentials presented to the server
#[derive(Clone, PartialEq, Serialize)]
pub struct AuthToken {
    pub scheme: String,
    pub principal: String,
    pub credentials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl AuthToken {
    /// Copy suitable for logs and output: credentials replaced
    pub fn redacted(&self) -> AuthToken {
        AuthToken {
            credentials: "*****".to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("scheme", &self.scheme)
            .field("principal", &self.principal)
            .field("credentials", &"*****")
            .field("realm", &self.realm)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Username and password, with an optional realm
pub fn basic(username: impl Into<String>, password: impl Into<String>, realm: Option<&str>) -> AuthToken {
    AuthToken {
        scheme: "basic".to_string(),
        principal: username.into(),
        credentials: password.into(),
        realm: realm.map(String::from),
        parameters: None,
    }
}

/// Base64 encoded Kerberos ticket
pub fn kerberos(base64_encoded_ticket: impl Into<String>) -> AuthToken {
    AuthToken {
        scheme: "kerberos".to_string(),
        // Principal is required by the handshake but unused by this scheme
        principal: String::new(),
        credentials: base64_encoded_ticket.into(),
        realm: None,
        parameters: None,
    }
}

/// Token for a custom authentication provider
pub fn custom(
    principal: impl Into<String>,
    credentials: impl Into<String>,
    realm: impl Into<String>,
    scheme: impl Into<String>,
    parameters: Option<Parameters>,
) -> AuthToken {
    AuthToken {
        scheme: scheme.into(),
        principal: principal.into(),
        credentials: credentials.into(),
        realm: Some(realm.into()),
        parameters: parameters.filter(|p| !p.is_empty()),
    }
}
