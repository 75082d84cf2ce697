//! Logical names of the bundled templates.

use std::fmt;

/// A bundled template, keyed by artifact kind.
///
/// # Examples
///
/// ```
/// use scaffold_codegen::TemplateId;
///
/// assert_eq!(TemplateId::FastapiRouter.as_str(), "fastapi_router");
/// assert_eq!(TemplateId::FastapiRouter.file_name(), "api/fastapi_router.py.hbs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// FastAPI router module
    FastapiRouter,
    /// Express router module
    ExpressRouter,
    /// React function component
    ReactComponent,
    /// React component test
    ReactTest,
    /// React component barrel file
    ReactIndex,
    /// Vue single-file component
    VueComponent,
    /// Vue component test
    VueTest,
    /// pytest suite wrapper
    PytestSuite,
    /// One pytest method per function
    PytestCase,
    /// Jest suite wrapper
    JestSuite,
    /// One Jest case per function
    JestCase,
}

impl TemplateId {
    /// Every bundled template.
    pub const ALL: [Self; 11] = [
        Self::FastapiRouter,
        Self::ExpressRouter,
        Self::ReactComponent,
        Self::ReactTest,
        Self::ReactIndex,
        Self::VueComponent,
        Self::VueTest,
        Self::PytestSuite,
        Self::PytestCase,
        Self::JestSuite,
        Self::JestCase,
    ];

    /// Returns the logical template name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FastapiRouter => "fastapi_router",
            Self::ExpressRouter => "express_router",
            Self::ReactComponent => "react_component",
            Self::ReactTest => "react_test",
            Self::ReactIndex => "react_index",
            Self::VueComponent => "vue_component",
            Self::VueTest => "vue_test",
            Self::PytestSuite => "pytest_test",
            Self::PytestCase => "pytest_method",
            Self::JestSuite => "jest_test",
            Self::JestCase => "jest_case",
        }
    }

    /// Returns the path of the template file relative to the template root.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::FastapiRouter => "api/fastapi_router.py.hbs",
            Self::ExpressRouter => "api/express_router.ts.hbs",
            Self::ReactComponent => "component/react_component.tsx.hbs",
            Self::ReactTest => "component/react_component.test.tsx.hbs",
            Self::ReactIndex => "component/react_index.ts.hbs",
            Self::VueComponent => "component/vue_component.vue.hbs",
            Self::VueTest => "component/vue_component.test.ts.hbs",
            Self::PytestSuite => "test/pytest_test.py.hbs",
            Self::PytestCase => "test/pytest_method.py.hbs",
            Self::JestSuite => "test/jest_test.ts.hbs",
            Self::JestCase => "test/jest_case.ts.hbs",
        }
    }

    /// Returns the placeholder keys this template may reference.
    #[must_use]
    pub const fn placeholder_keys(&self) -> &'static [&'static str] {
        match self {
            Self::FastapiRouter | Self::ExpressRouter => &["resource", "resource_singular", "model"],
            Self::ReactComponent
            | Self::ReactTest
            | Self::ReactIndex
            | Self::VueComponent
            | Self::VueTest => &["name", "name_lower"],
            Self::PytestSuite => &["module", "functions", "class_name", "test_methods"],
            Self::JestSuite => &["module", "functions", "class_name", "test_cases"],
            Self::PytestCase | Self::JestCase => &["func_name"],
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
