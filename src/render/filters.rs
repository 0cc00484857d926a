//! MiniJinja filter registration.

use minijinja::{Environment, Error, Value};

/// Registers the page filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Joins a sequence of class names into one attribute value, dropping empties.
    // Usage: class="{{ button.classes | classes }}"
    env.add_filter("classes", |value: Value| -> Result<String, Error> {
        let names: Vec<String> = value
            .try_iter()?
            .map(|v| v.to_string())
            .filter(|name| !name.trim().is_empty())
            .collect();
        Ok(names.join(" "))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_filter_joins_and_skips_empty() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let output = env
            .render_str(
                "{{ names | classes }}",
                serde_json::json!({ "names": ["flex", "", "p-4"] }),
            )
            .unwrap();
        assert_eq!(output, "flex p-4");
    }
}
