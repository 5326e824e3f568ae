//! Schema validation over the parsed document tree.
//!
//! Each structural assumption of the report format is checked by a typed
//! accessor exactly where it is used. Every accessor returns a `Result`;
//! the first violation aborts the whole parse, so no partial records are
//! ever produced.

use roxmltree::Node;

use crate::document;
use crate::error::SchemaError;
use crate::version::ReportVersion;

/// Direct element children of `parent` with the given tag, in document order.
pub fn children_by_tag<'a, 'input>(parent: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    parent
        .children()
        .filter(|child| child.is_element() && child.tag_name().name() == tag)
        .collect()
}

/// The single direct child of `parent` with the given tag.
///
/// Zero matches and more than one match are both schema violations. Looking
/// up the report root through this accessor also rejects documents whose
/// root element has the wrong tag.
pub fn require_exactly_one_child<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>, SchemaError> {
    let mut matches = children_by_tag(parent, tag);

    if matches.len() != 1 {
        return Err(SchemaError::TagCardinality {
            tag: tag.to_string(),
            count: matches.len(),
        });
    }

    Ok(matches.remove(0))
}

/// A mandatory attribute's raw value.
pub fn require_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, SchemaError> {
    node.attribute(name).ok_or_else(|| SchemaError::MissingAttribute {
        tag: node.tag_name().name().to_string(),
        attribute: name.to_string(),
    })
}

/// A mandatory attribute parsed as an integer.
///
/// A present-but-non-numeric value fails with the raw value preserved in
/// the error.
pub fn require_int_attribute(node: Node<'_, '_>, name: &str) -> Result<i32, SchemaError> {
    let raw = require_attribute(node, name)?;

    raw.parse().map_err(|_| SchemaError::InvalidInteger {
        attribute: name.to_string(),
        value: raw.to_string(),
    })
}

/// Check the root's `version` attribute against the supported range.
pub fn require_version(root: Node<'_, '_>) -> Result<ReportVersion, SchemaError> {
    let version: ReportVersion = require_attribute(root, "version")?.parse()?;
    version.ensure_supported()?;
    Ok(version)
}

/// All declared source directories of the project section, in document order.
///
/// At least one is mandatory: every defect path must be resolvable against
/// something.
pub fn require_source_dirs(project: Node<'_, '_>) -> Result<Vec<String>, SchemaError> {
    let dirs: Vec<String> = children_by_tag(project, "SrcDir")
        .into_iter()
        .map(document::text_content)
        .collect();

    if dirs.is_empty() {
        return Err(SchemaError::NoSourceDirectories);
    }

    Ok(dirs)
}

/// The first `SourceLine` child carrying a `primary` attribute.
///
/// Presence of the attribute is significant, not its value.
pub fn find_primary_location<'a, 'input>(
    defect: Node<'a, 'input>,
) -> Result<Node<'a, 'input>, SchemaError> {
    children_by_tag(defect, "SourceLine")
        .into_iter()
        .find(|line| line.has_attribute("primary"))
        .ok_or(SchemaError::NoPrimaryLocation)
}
