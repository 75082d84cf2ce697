//! The generation pipeline.
//!
//! A request is first *planned*: identifiers are validated, derived names are
//! computed, every required template is loaded and rendered. Nothing touches
//! the output directory until planning succeeds. The plan is then handed to
//! an [`ArtifactWriter`], which writes (or previews) files one at a time.

use crate::framework::{ComponentFramework, TestFramework};
use crate::report::{ArtifactKind, GenerationReport};
use crate::request::{ApiRequest, ComponentRequest, GenerationRequest, TestRequest};
use scaffold_codegen::{TemplateEngine, TemplateId, TemplateStore};
use scaffold_core::naming::{CaseVariant, to_singular};
use scaffold_core::{
    ComponentName, FunctionName, ModuleName, ResourceName, Result, validate_function_names,
};
use scaffold_files::{ArtifactWriter, PlannedFile, PreviewSink};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ApiContext<'a> {
    resource: &'a str,
    resource_singular: &'a str,
    model: &'a str,
}

#[derive(Debug, Serialize)]
struct ComponentContext<'a> {
    name: &'a str,
    name_lower: &'a str,
}

#[derive(Debug, Serialize)]
struct CaseContext<'a> {
    func_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SuiteContext<'a> {
    module: &'a str,
    functions: &'a str,
    class_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    test_methods: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test_cases: Option<&'a str>,
}

/// A validated, rendered request ready to be written.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Artifact kind
    pub artifact: ArtifactKind,
    /// Framework name
    pub framework: &'static str,
    /// Primary identifier after validation
    pub identifier: String,
    /// Files to write, in order
    pub files: Vec<PlannedFile>,
}

/// Runs generation requests against a template store.
///
/// # Examples
///
/// ```
/// use scaffold_files::{ArtifactWriter, CollectingPreview, WriteOptions};
/// use scaffold_generator::{ApiFramework, ApiRequest, Generator};
///
/// let generator = Generator::bundled()?;
/// let writer = ArtifactWriter::new("out", WriteOptions::new().with_preview(true));
/// let mut preview = CollectingPreview::default();
///
/// let report = generator.generate(
///     &ApiRequest::new("posts", ApiFramework::Fastapi).into(),
///     &writer,
///     &mut preview,
/// )?;
///
/// assert_eq!(report.identifier, "posts");
/// assert!(preview.entries()[0].content.contains("class Post("));
/// # Ok::<(), scaffold_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Generator {
    store: TemplateStore,
    engine: TemplateEngine,
}

impl Generator {
    /// Creates a generator reading templates from `store`.
    #[must_use]
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            engine: TemplateEngine::new(),
        }
    }

    /// Creates a generator over the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bundled directory is missing.
    pub fn bundled() -> Result<Self> {
        TemplateStore::bundled().map(Self::new)
    }

    /// Returns the template store in use.
    #[must_use]
    pub const fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Plans and executes `request`.
    ///
    /// # Errors
    ///
    /// Any error from [`Generator::plan`] (nothing written), or from
    /// [`ArtifactWriter::write_all`] (earlier files of the artifact remain).
    pub fn generate(
        &self,
        request: &GenerationRequest,
        writer: &ArtifactWriter,
        preview: &mut dyn PreviewSink,
    ) -> Result<GenerationReport> {
        let plan = self.plan(request)?;
        let files = writer.write_all(&plan.files, preview)?;

        Ok(GenerationReport {
            artifact: plan.artifact,
            framework: plan.framework,
            identifier: plan.identifier,
            output_dir: writer.output_dir().to_path_buf(),
            preview: writer.options().preview,
            files,
        })
    }

    /// Validates `request` and renders every file it produces.
    ///
    /// # Errors
    ///
    /// - Validation errors for any identifier in the request
    /// - Template confinement, not-found or render errors
    pub fn plan(&self, request: &GenerationRequest) -> Result<Plan> {
        match request {
            GenerationRequest::Api(request) => self.plan_api(request),
            GenerationRequest::Component(request) => self.plan_component(request),
            GenerationRequest::Test(request) => self.plan_test(request),
        }
    }

    fn plan_api(&self, request: &ApiRequest) -> Result<Plan> {
        let resource = ResourceName::new(&request.resource)?;
        let resource_singular = to_singular(resource.as_str());
        let model = CaseVariant::Pascal.apply(&resource_singular);
        debug!(
            resource = %resource,
            singular = %resource_singular,
            model = %model,
            "derived API names"
        );

        let id = request.framework.template();
        let template = self.store.load_id(id)?;
        let content = self.engine.render(
            id.as_str(),
            &template,
            &ApiContext {
                resource: resource.as_str(),
                resource_singular: &resource_singular,
                model: &model,
            },
        )?;

        Ok(Plan {
            artifact: ArtifactKind::Api,
            framework: request.framework.as_str(),
            files: vec![PlannedFile::new(
                request.framework.file_name(resource.as_str()),
                content,
            )],
            identifier: resource.into_inner(),
        })
    }

    fn plan_component(&self, request: &ComponentRequest) -> Result<Plan> {
        let name = ComponentName::new(&request.name)?;
        let name_lower = CaseVariant::Lower.apply(name.as_str());
        let n = name.as_str();

        let targets: Vec<(TemplateId, String)> = match request.framework {
            ComponentFramework::React => {
                let mut targets = vec![(TemplateId::ReactComponent, format!("{n}/{n}.tsx"))];
                if request.with_test {
                    targets.push((TemplateId::ReactTest, format!("{n}/{n}.test.tsx")));
                }
                targets.push((TemplateId::ReactIndex, format!("{n}/index.ts")));
                targets
            }
            ComponentFramework::Vue => {
                let mut targets = vec![(TemplateId::VueComponent, format!("{n}.vue"))];
                if request.with_test {
                    targets.push((TemplateId::VueTest, format!("{n}.test.ts")));
                }
                targets
            }
        };

        let templates = targets
            .iter()
            .map(|(id, _)| self.store.load_id(*id))
            .collect::<Result<Vec<_>>>()?;

        let context = ComponentContext {
            name: n,
            name_lower: &name_lower,
        };
        let files = targets
            .iter()
            .zip(&templates)
            .map(|((id, path), template)| {
                self.engine
                    .render(id.as_str(), template, &context)
                    .map(|content| PlannedFile::new(path, content))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(component = n, files = files.len(), "planned component");
        Ok(Plan {
            artifact: ArtifactKind::Component,
            framework: request.framework.as_str(),
            identifier: name.into_inner(),
            files,
        })
    }

    fn plan_test(&self, request: &TestRequest) -> Result<Plan> {
        let module = ModuleName::new(&request.module)?;
        let functions = validate_function_names(&request.functions)?;
        let class_name = CaseVariant::Pascal.apply(module.as_str());

        let suite_id = request.framework.suite_template();
        let case_id = request.framework.case_template();
        let suite_template = self.store.load_id(suite_id)?;
        let case_template = self.store.load_id(case_id)?;

        let cases = functions
            .iter()
            .map(|func| {
                self.engine.render(
                    case_id.as_str(),
                    &case_template,
                    &CaseContext {
                        func_name: func.as_str(),
                    },
                )
            })
            .collect::<Result<Vec<_>>>()?
            .join("\n");

        let function_list = functions
            .iter()
            .map(FunctionName::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let (test_methods, test_cases) = match request.framework {
            TestFramework::Pytest => (Some(cases.as_str()), None),
            TestFramework::Jest => (None, Some(cases.as_str())),
        };
        let content = self.engine.render(
            suite_id.as_str(),
            &suite_template,
            &SuiteContext {
                module: module.as_str(),
                functions: &function_list,
                class_name: &class_name,
                test_methods,
                test_cases,
            },
        )?;

        debug!(module = %module, cases = functions.len(), "planned test suite");
        Ok(Plan {
            artifact: ArtifactKind::Test,
            framework: request.framework.as_str(),
            files: vec![PlannedFile::new(
                request.framework.file_name(module.as_str()),
                content,
            )],
            identifier: module.into_inner(),
        })
    }
}
