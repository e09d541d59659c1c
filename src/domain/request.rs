use std::fmt;

use crate::domain::validation::ValidationError;
use crate::domain::value::Resource;

/// HTTP method used for a Unifonic call.
///
/// `Get` sends parameters in the query string, `Post` as an
/// `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    Get,
    #[default]
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Description of one call: method, resource, and per-call parameters.
///
/// The client adds `AppSid` on its own; do not set it here.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    resource: Resource,
    params: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, resource: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            method,
            resource: Resource::new(resource)?,
            params: Vec::new(),
        })
    }

    pub fn get(resource: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Method::Get, resource)
    }

    pub fn post(resource: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Method::Post, resource)
    }

    /// Append a parameter. Repeated names are sent repeatedly, in order.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
