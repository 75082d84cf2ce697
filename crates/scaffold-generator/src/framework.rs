//! Target frameworks per artifact kind.

use scaffold_codegen::TemplateId;
use serde::Serialize;
use std::fmt;

/// Framework for API router generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFramework {
    /// Python `FastAPI` router
    #[default]
    Fastapi,
    /// TypeScript Express router
    Express,
}

impl ApiFramework {
    /// Returns the framework name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fastapi => "fastapi",
            Self::Express => "express",
        }
    }

    pub(crate) const fn template(self) -> TemplateId {
        match self {
            Self::Fastapi => TemplateId::FastapiRouter,
            Self::Express => TemplateId::ExpressRouter,
        }
    }

    pub(crate) fn file_name(self, resource: &str) -> String {
        match self {
            Self::Fastapi => format!("{resource}_router.py"),
            Self::Express => format!("{resource}.routes.ts"),
        }
    }
}

/// Framework for UI component generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentFramework {
    /// React function component in its own directory
    #[default]
    React,
    /// Vue single-file component
    Vue,
}

impl ComponentFramework {
    /// Returns the framework name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
        }
    }
}

/// Framework for test suite generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    /// Python pytest
    #[default]
    Pytest,
    /// TypeScript Jest
    Jest,
}

impl TestFramework {
    /// Returns the framework name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pytest => "pytest",
            Self::Jest => "jest",
        }
    }

    pub(crate) const fn suite_template(self) -> TemplateId {
        match self {
            Self::Pytest => TemplateId::PytestSuite,
            Self::Jest => TemplateId::JestSuite,
        }
    }

    pub(crate) const fn case_template(self) -> TemplateId {
        match self {
            Self::Pytest => TemplateId::PytestCase,
            Self::Jest => TemplateId::JestCase,
        }
    }

    pub(crate) fn file_name(self, module: &str) -> String {
        match self {
            Self::Pytest => format!("test_{module}.py"),
            Self::Jest => format!("{module}.test.ts"),
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(ApiFramework, ComponentFramework, TestFramework);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_file_names() {
        assert_eq!(ApiFramework::Fastapi.file_name("users"), "users_router.py");
        assert_eq!(ApiFramework::Express.file_name("users"), "users.routes.ts");
    }

    #[test]
    fn test_test_file_names() {
        assert_eq!(TestFramework::Pytest.file_name("user_service"), "test_user_service.py");
        assert_eq!(TestFramework::Jest.file_name("userService"), "userService.test.ts");
    }

    #[test]
    fn test_defaults_match_cli_defaults() {
        assert_eq!(ApiFramework::default(), ApiFramework::Fastapi);
        assert_eq!(ComponentFramework::default(), ComponentFramework::React);
        assert_eq!(TestFramework::default(), TestFramework::Pytest);
    }

    #[test]
    fn test_display() {
        assert_eq!(ComponentFramework::Vue.to_string(), "vue");
        assert_eq!(TestFramework::Jest.to_string(), "jest");
    }
}
