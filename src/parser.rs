//! Report parsing and defect extraction.
//!
//! A single eager pass: load the document, validate the root and project
//! sections, then extract every defect in document order. The pass either
//! yields every record or fails with the first violation; nothing partial
//! escapes.

use std::path::Path;

use roxmltree::Node;

use crate::defect::Defect;
use crate::document;
use crate::error::Result;
use crate::paths;
use crate::schema;

/// Ordered source roots declared by the report's project section.
///
/// Derived once per parse and threaded immutably through extraction; the
/// declaration order is the path-resolution search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    source_directories: Vec<String>,
}

impl ReportContext {
    pub fn new(source_directories: Vec<String>) -> Self {
        Self { source_directories }
    }

    pub fn source_directories(&self) -> &[String] {
        &self.source_directories
    }
}

/// Parse a report file into defect records.
pub fn parse_report_file(path: &Path) -> Result<Vec<Defect>> {
    let text = document::read_to_string(path)?;
    parse_report(&text)
}

/// Parse an in-memory report into defect records, in document order.
pub fn parse_report(text: &str) -> Result<Vec<Defect>> {
    let doc = document::parse_document(text)?;

    let root = schema::require_exactly_one_child(doc.root(), "BugCollection")?;
    schema::require_version(root)?;

    let project = schema::require_exactly_one_child(root, "Project")?;
    let context = ReportContext::new(schema::require_source_dirs(project)?);

    schema::children_by_tag(root, "BugInstance")
        .into_iter()
        .map(|node| extract_defect(node, &context))
        .collect()
}

fn extract_defect(node: Node<'_, '_>, context: &ReportContext) -> Result<Defect> {
    let message = document::text_content(schema::require_exactly_one_child(node, "LongMessage")?);
    let location = schema::find_primary_location(node)?;

    let category = schema::require_attribute(node, "category")?.to_string();
    let relative = schema::require_attribute(location, "relSourcepath")?;
    let source_path = paths::resolve_source_path(relative, context.source_directories())?;

    let start_line = schema::require_int_attribute(location, "start")?;
    let start_column = schema::require_int_attribute(location, "startBytecode")?;
    let priority = schema::require_int_attribute(node, "priority")?;

    Ok(Defect {
        message,
        category,
        source_path,
        start_line,
        start_column,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SchemaError};

    fn schema_error(text: &str) -> SchemaError {
        match parse_report(text).unwrap_err() {
            ParseError::Schema(error) => error,
            other => panic!("expected a schema error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_root_tag_fails() {
        assert!(matches!(
            schema_error("<foo></foo>"),
            SchemaError::TagCardinality { count: 0, .. }
        ));
    }

    #[test]
    fn two_top_level_collections_are_rejected() {
        let text = "<BugCollection version='4.5.0'></BugCollection>\
                    <BugCollection version='4.5.0'></BugCollection>";
        assert!(matches!(
            parse_report(text).unwrap_err(),
            ParseError::Syntax { .. }
        ));
    }

    #[test]
    fn missing_version_fails() {
        assert!(matches!(
            schema_error("<BugCollection></BugCollection>"),
            SchemaError::MissingAttribute { .. }
        ));
    }

    #[test]
    fn version_below_range_fails() {
        let text = "<BugCollection version='3.9.9'>\
                      <Project><SrcDir>foo</SrcDir></Project>\
                    </BugCollection>";
        assert!(matches!(
            schema_error(text),
            SchemaError::UnsupportedVersion { .. }
        ));
    }

    #[test]
    fn version_at_upper_bound_fails() {
        let text = "<BugCollection version='5.0.0'>\
                      <Project><SrcDir>foo</SrcDir></Project>\
                    </BugCollection>";
        assert!(matches!(
            schema_error(text),
            SchemaError::UnsupportedVersion { .. }
        ));
    }

    #[test]
    fn versions_within_range_are_accepted() {
        for version in ["4.0.0", "4.5.0", "4.999.999"] {
            let text = format!(
                "<BugCollection version='{}'>\
                   <Project><SrcDir>foo</SrcDir></Project>\
                 </BugCollection>",
                version
            );
            assert!(parse_report(&text).is_ok(), "version {}", version);
        }
    }

    #[test]
    fn missing_project_fails() {
        assert!(matches!(
            schema_error("<BugCollection version='4.5.0'><foo></foo></BugCollection>"),
            SchemaError::TagCardinality { count: 0, .. }
        ));
    }

    #[test]
    fn duplicate_project_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project></Project> <Project></Project>\
                    </BugCollection>";
        assert!(matches!(
            schema_error(text),
            SchemaError::TagCardinality { count: 2, .. }
        ));
    }

    #[test]
    fn project_without_source_dirs_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <foo></foo> </Project>\
                    </BugCollection>";
        assert_eq!(schema_error(text), SchemaError::NoSourceDirectories);
    }

    #[test]
    fn report_without_defects_yields_no_records() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project><SrcDir>foo</SrcDir></Project>\
                    </BugCollection>";
        assert!(parse_report(text).unwrap().is_empty());
    }

    #[test]
    fn single_defect_is_extracted() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='2' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='true' start='35' startBytecode='11' \
                                    relSourcepath='foo'>\
                          <Message>bat</Message>\
                        </SourceLine>\
                      </BugInstance>\
                    </BugCollection>";

        let defects = parse_report(text).unwrap();
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].log_entry(0), "(WARNING) foo:35:11 [bar] bat");
    }

    #[test]
    fn defects_come_out_in_document_order() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project><SrcDir>foo</SrcDir></Project>\
                      <BugInstance priority='1' category='first'>\
                        <LongMessage>a</LongMessage>\
                        <SourceLine primary='' start='1' startBytecode='2' relSourcepath='foo'/>\
                      </BugInstance>\
                      <BugInstance priority='3' category='second'>\
                        <LongMessage>b</LongMessage>\
                        <SourceLine primary='' start='3' startBytecode='4' relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";

        let defects = parse_report(text).unwrap();
        let categories: Vec<&str> = defects.iter().map(|d| d.category.as_str()).collect();
        assert_eq!(categories, vec!["first", "second"]);
    }

    #[test]
    fn defect_without_primary_location_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='2' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine start='35' startBytecode='11' relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";
        assert_eq!(schema_error(text), SchemaError::NoPrimaryLocation);
    }

    #[test]
    fn defect_with_duplicate_message_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='2' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='true' start='35' startBytecode='11' \
                                    relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";
        assert!(matches!(
            schema_error(text),
            SchemaError::TagCardinality { count: 2, .. }
        ));
    }

    #[test]
    fn non_numeric_priority_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='bad' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='true' start='35' startBytecode='11' \
                                    relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";
        assert_eq!(
            schema_error(text),
            SchemaError::InvalidInteger {
                attribute: "priority".to_string(),
                value: "bad".to_string(),
            }
        );
    }

    #[test]
    fn non_numeric_start_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='2' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='true' start='bad' startBytecode='11' \
                                    relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";
        assert_eq!(
            schema_error(text),
            SchemaError::InvalidInteger {
                attribute: "start".to_string(),
                value: "bad".to_string(),
            }
        );
    }

    #[test]
    fn non_numeric_start_bytecode_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='2' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='true' start='11' startBytecode='bad' \
                                    relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";
        assert_eq!(
            schema_error(text),
            SchemaError::InvalidInteger {
                attribute: "startBytecode".to_string(),
                value: "bad".to_string(),
            }
        );
    }

    #[test]
    fn unresolvable_source_path_fails() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project> <SrcDir>foo</SrcDir> </Project>\
                      <BugInstance priority='2' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='true' start='11' startBytecode='10' \
                                    relSourcepath='bar'/>\
                      </BugInstance>\
                    </BugCollection>";
        assert!(matches!(
            schema_error(text),
            SchemaError::UnresolvedSourcePath { .. }
        ));
    }

    #[test]
    fn priority_is_not_range_checked() {
        let text = "<BugCollection version='4.5.0'>\
                      <Project><SrcDir>foo</SrcDir></Project>\
                      <BugInstance priority='9' category='bar'>\
                        <LongMessage>bat</LongMessage>\
                        <SourceLine primary='' start='1' startBytecode='2' relSourcepath='foo'/>\
                      </BugInstance>\
                    </BugCollection>";
        let defects = parse_report(text).unwrap();
        assert_eq!(defects[0].priority, 9);
    }
}
