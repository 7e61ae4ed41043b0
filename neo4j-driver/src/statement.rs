// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Statements and their parameters

use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Named statement parameters
pub type Parameters = BTreeMap<String, Value>;

/// Statement text with its parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Statement {
    pub text: String,
    pub parameters: Parameters,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Parameters::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Statement::new(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Statement::new(text)
    }
}

impl<S: Into<String>> From<(S, Parameters)> for Statement {
    fn from((text, parameters): (S, Parameters)) -> Self {
        Statement::new(text).with_parameters(parameters)
    }
}
