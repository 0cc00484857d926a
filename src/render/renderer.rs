//! Pre-compiled template renderer.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::error::Result;

/// Name of the full-document template.
pub const PAGE_TEMPLATE: &str = "page.html";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (PAGE_TEMPLATE, include_str!("../../templates/page.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("button.html", include_str!("../../templates/button.html")),
];

/// A renderer with the page templates pre-registered.
///
/// Templates whose names end in `.html` are auto-escaped.
///
/// # Example
///
/// ```rust
/// use theme_toggle::Renderer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Banner { text: String }
///
/// let mut renderer = Renderer::new().unwrap();
/// renderer.add_template("banner.html", "<p>{{ text }}</p>").unwrap();
///
/// let html = renderer.render("banner.html", &Banner { text: "a & b".into() }).unwrap();
/// assert_eq!(html, "<p>a &amp; b</p>");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the built-in page templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        register_filters(&mut env);
        for &(name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Registers a named template, replacing any existing one of that name.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    #[test]
    fn test_renderer_add_and_render() {
        let mut renderer = Renderer::new().unwrap();
        renderer
            .add_template("test.txt", "say {{ message }}")
            .unwrap();

        let output = renderer
            .render(
                "test.txt",
                &SimpleData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert_eq!(output, "say hi");
    }

    #[test]
    fn test_renderer_escapes_html_templates() {
        let mut renderer = Renderer::new().unwrap();
        renderer
            .add_template("msg.html", "<b>{{ message }}</b>")
            .unwrap();

        let output = renderer
            .render(
                "msg.html",
                &SimpleData {
                    message: "<script>".into(),
                },
            )
            .unwrap();
        assert_eq!(output, "<b>&lt;script&gt;</b>");
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::new().unwrap();
        let result = renderer.render(
            "nonexistent",
            &SimpleData {
                message: "x".into(),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_renderer_invalid_syntax_error() {
        let mut renderer = Renderer::new().unwrap();
        assert!(renderer.add_template("bad.html", "{% if %}").is_err());
    }
}
