//! Output formatting utilities

use crate::application::{CheckReport, DeclarationSummary};
use crate::domain::Tag;

/// Format a single tag as `@type(attr = value, ...)`
pub fn format_tag(tag: &Tag) -> String {
    if tag.attributes().is_empty() {
        return format!("@{}", tag.type_name());
    }

    let attrs: Vec<String> = tag
        .attributes()
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect();
    format!("@{}({})", tag.type_name(), attrs.join(", "))
}

/// Format a list of tags for display, one per line
pub fn format_tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No meta tags found".to_string();
    }

    tags.iter()
        .map(format_tag)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Format the declaration listing
pub fn format_declaration_list(decls: &[DeclarationSummary]) -> String {
    if decls.is_empty() {
        return "No declarations found".to_string();
    }

    decls
        .iter()
        .map(|decl| {
            format!(
                "{}  {}  {} {}",
                decl.name,
                decl.kind,
                decl.tag_count,
                if decl.tag_count == 1 { "tag" } else { "tags" }
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Format a manifest check report
pub fn format_check_report(report: &CheckReport) -> String {
    let mut output = format!(
        "{} declarations registered (built-ins included)",
        report.declaration_count
    );

    for name in &report.unresolved_tag_types {
        output.push_str(&format!("\nwarning: unresolved tag type: {}", name));
    }

    if report.is_clean() {
        output.push_str("\nmanifest OK");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttrValue, DeclarationKind};

    #[test]
    fn test_format_tag_without_attributes() {
        let tag = Tag::new("meta.Inherited").unwrap();
        assert_eq!(format_tag(&tag), "@meta.Inherited");
    }

    #[test]
    fn test_format_tag_with_attributes() {
        let tag = Tag::new("app.Endpoint")
            .unwrap()
            .with_attribute("value", AttrValue::String("orders".to_string()))
            .with_attribute("timeout", AttrValue::Integer(30));
        // Attributes print in name order
        assert_eq!(
            format_tag(&tag),
            "@app.Endpoint(timeout = 30, value = \"orders\")"
        );
    }

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(format_tag_list(&[]), "No meta tags found");
    }

    #[test]
    fn test_format_tag_list_one_per_line() {
        let tags = vec![
            Tag::new("meta.Inherited").unwrap(),
            Tag::new("svc.Service").unwrap(),
        ];
        assert_eq!(
            format_tag_list(&tags),
            "@meta.Inherited\n@svc.Service"
        );
    }

    #[test]
    fn test_format_declaration_list() {
        let decls = vec![
            DeclarationSummary {
                name: "svc.Service".to_string(),
                kind: DeclarationKind::Type,
                tag_count: 1,
            },
            DeclarationSummary {
                name: "svc.Service.run".to_string(),
                kind: DeclarationKind::Method,
                tag_count: 2,
            },
        ];
        let output = format_declaration_list(&decls);
        assert!(output.contains("svc.Service  type  1 tag"));
        assert!(output.contains("svc.Service.run  method  2 tags"));
    }

    #[test]
    fn test_format_check_report_clean() {
        let report = CheckReport {
            declaration_count: 6,
            unresolved_tag_types: vec![],
        };
        let output = format_check_report(&report);
        assert!(output.contains("6 declarations"));
        assert!(output.contains("manifest OK"));
    }

    #[test]
    fn test_format_check_report_with_warnings() {
        let report = CheckReport {
            declaration_count: 5,
            unresolved_tag_types: vec!["ext.Typo".to_string()],
        };
        let output = format_check_report(&report);
        assert!(output.contains("warning: unresolved tag type: ext.Typo"));
        assert!(!output.contains("manifest OK"));
    }
}
