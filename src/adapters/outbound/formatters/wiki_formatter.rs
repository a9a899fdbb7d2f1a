use crate::dependency_model::domain::DependencyModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// MediaWiki table opening and header row
const TABLE_HEADER: &str = "{| class=\"wikitable\"\n\
                            ! # || Package || Version|| Repository || Dependency || Provider || Version || Repository\n\
                            |-\n";

/// MediaWiki table closing line
const TABLE_FOOTER: &str = "|}\n";

/// Row separator
const ROW_SEPARATOR: &str = "|-\n";

/// Placeholder cell for packages without (effective) dependencies
const EMPTY_CELL: &str = "| ---\n";

/// WikiFormatter adapter for the MediaWiki table report
///
/// Package cells span all provider rows of the package; each dependency cell
/// spans the rows of its own providers. Internal providers link to the
/// anchor of their package row.
pub struct WikiFormatter;

impl WikiFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Number of table rows used by a package (at least one)
    fn row_span(model: &DependencyModel, key: &str, include_external: bool) -> Result<usize> {
        let mut rows = 0;
        for dependency in model.effective_dependency_list(key, include_external)? {
            rows += model.provider_count(key, dependency)?;
        }
        Ok(rows.max(1))
    }

    /// Same-document link to an internal package, plain text otherwise
    fn provider_cell(model: &DependencyModel, name: &str) -> String {
        if model.is_internal_package(name) {
            format!("[[#{}|{}]]", name, name)
        } else {
            name.to_string()
        }
    }
}

impl Default for WikiFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for WikiFormatter {
    fn format(&self, model: &DependencyModel, include_external: bool) -> Result<String> {
        let mut output = String::from(TABLE_HEADER);

        for (index, key) in model.package_keys().enumerate() {
            let info = model.package(key)?;
            let span = Self::row_span(model, key, include_external)?;

            writeln!(output, "| rowspan=\"{}\" | {}", span, index + 1)?;
            writeln!(
                output,
                "| rowspan=\"{}\" | <span id=\"{}\">{}</span>",
                span, key, key
            )?;
            writeln!(output, "| rowspan=\"{}\" | {}", span, info.version)?;
            writeln!(output, "| rowspan=\"{}\" | {}", span, info.repository)?;

            let dependencies = model.effective_dependency_list(key, include_external)?;
            if dependencies.is_empty() {
                for _ in 0..4 {
                    output.push_str(EMPTY_CELL);
                }
                output.push_str(ROW_SEPARATOR);
                continue;
            }

            for dependency in dependencies {
                writeln!(
                    output,
                    "| rowspan=\"{}\" | {}",
                    model.provider_count(key, dependency)?,
                    dependency
                )?;
                for provider in model.provider_list(key, dependency)? {
                    // Providers outside the package set have no repository
                    let repository = model.repository(provider.name()).unwrap_or("");
                    writeln!(output, "| {}", Self::provider_cell(model, provider.name()))?;
                    writeln!(output, "| {}", provider.version())?;
                    writeln!(output, "| {}", repository)?;
                    output.push_str(ROW_SEPARATOR);
                }
            }
        }

        output.push_str(TABLE_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_model;

    #[test]
    fn test_format_header_and_footer() {
        let output = WikiFormatter::new()
            .format(&DependencyModel::new(), false)
            .unwrap();

        assert_eq!(
            output,
            "{| class=\"wikitable\"\n\
             ! # || Package || Version|| Repository || Dependency || Provider || Version || Repository\n\
             |-\n\
             |}\n"
        );
    }

    #[test]
    fn test_format_internal_only() {
        let output = WikiFormatter::new().format(&sample_model(), false).unwrap();
        let body: Vec<&str> = output.lines().skip(3).collect();

        assert_eq!(
            body,
            vec![
                "| rowspan=\"1\" | 1",
                "| rowspan=\"1\" | <span id=\"bar.noarch\">bar.noarch</span>",
                "| rowspan=\"1\" | 2.0",
                "| rowspan=\"1\" | updates",
                "| ---",
                "| ---",
                "| ---",
                "| ---",
                "|-",
                "| rowspan=\"1\" | 2",
                "| rowspan=\"1\" | <span id=\"foo.x86_64\">foo.x86_64</span>",
                "| rowspan=\"1\" | 1.0",
                "| rowspan=\"1\" | base",
                "| rowspan=\"1\" | bar",
                "| [[#bar.noarch|bar.noarch]]",
                "| 2.0-3",
                "| updates",
                "|-",
                "|}",
            ]
        );
    }

    #[test]
    fn test_format_all_dependencies_row_spans() {
        let output = WikiFormatter::new().format(&sample_model(), true).unwrap();

        // foo has three providers over two dependencies
        assert!(output.contains("| rowspan=\"3\" | <span id=\"foo.x86_64\">foo.x86_64</span>\n"));
        assert!(output.contains("| rowspan=\"2\" | libc.so.6\n"));
        // External providers are plain text with an empty repository cell
        assert!(output.contains("| glibc.x86_64\n| 2.17\n| \n|-\n"));
    }
}
