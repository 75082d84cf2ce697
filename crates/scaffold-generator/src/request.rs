//! Generation requests as received from the caller.
//!
//! Identifiers are kept as raw strings here; they are validated when the
//! request is planned, before any template is touched.

use crate::framework::{ApiFramework, ComponentFramework, TestFramework};

/// Generate an API router for a plural resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Resource name, e.g. `posts`
    pub resource: String,
    /// Target framework
    pub framework: ApiFramework,
}

impl ApiRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(resource: impl Into<String>, framework: ApiFramework) -> Self {
        Self {
            resource: resource.into(),
            framework,
        }
    }
}

/// Generate a UI component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    /// `PascalCase` component name, e.g. `NavBar`
    pub name: String,
    /// Target framework
    pub framework: ComponentFramework,
    /// Also generate a test file
    pub with_test: bool,
}

impl ComponentRequest {
    /// Creates a request without a test file.
    #[must_use]
    pub fn new(name: impl Into<String>, framework: ComponentFramework) -> Self {
        Self {
            name: name.into(),
            framework,
            with_test: false,
        }
    }

    /// Sets whether to generate a test file.
    #[must_use]
    pub const fn with_test(mut self, with_test: bool) -> Self {
        self.with_test = with_test;
        self
    }
}

/// Generate a test suite for a module and its functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRequest {
    /// Module under test
    pub module: String,
    /// Functions to generate cases for; at least one
    pub functions: Vec<String>,
    /// Target framework
    pub framework: TestFramework,
}

impl TestRequest {
    /// Creates a request.
    #[must_use]
    pub fn new<I, S>(module: impl Into<String>, functions: I, framework: TestFramework) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module: module.into(),
            functions: functions.into_iter().map(Into::into).collect(),
            framework,
        }
    }
}

/// Any generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// API router
    Api(ApiRequest),
    /// UI component
    Component(ComponentRequest),
    /// Test suite
    Test(TestRequest),
}

impl From<ApiRequest> for GenerationRequest {
    fn from(request: ApiRequest) -> Self {
        Self::Api(request)
    }
}

impl From<ComponentRequest> for GenerationRequest {
    fn from(request: ComponentRequest) -> Self {
        Self::Component(request)
    }
}

impl From<TestRequest> for GenerationRequest {
    fn from(request: TestRequest) -> Self {
        Self::Test(request)
    }
}
