// backend_mvnpm/src/maven/pom.rs
use crate::maven::checksum;
use crate::npm::model::Package;

/// Every npm package is mirrored under this groupId.
pub const GROUP_ID: &str = "org.mavenpm";

const PACKAGING: &str = "jar";
const DEPENDENCY_SCOPE: &str = "runtime";

/// Render a `pom.xml` for an npm package-version document.
///
/// The artifactId is the npm name as-is; the Maven `name` is the npm name
/// made readable (`@scope/pkg` → `scope pkg`). Optional npm metadata maps to
/// the matching POM section and is simply omitted when absent.
pub fn to_pom_xml(package: &Package) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(concat!(
        "<project xmlns=\"http://maven.apache.org/POM/4.0.0\" ",
        "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
        "xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0 ",
        "http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n"
    ));

    tag(&mut xml, 1, "modelVersion", "4.0.0");
    tag(&mut xml, 1, "groupId", GROUP_ID);
    tag(&mut xml, 1, "artifactId", &package.name);
    tag(&mut xml, 1, "version", &clean_version(&package.version));
    tag(&mut xml, 1, "packaging", PACKAGING);
    tag(&mut xml, 1, "name", &project_name(&package.name));
    if let Some(description) = &package.description {
        tag(&mut xml, 1, "description", description);
    }
    if let Some(homepage) = &package.homepage {
        tag(&mut xml, 1, "url", homepage);
    }

    if let Some(license) = &package.license {
        open(&mut xml, 1, "licenses");
        open(&mut xml, 2, "license");
        tag(&mut xml, 3, "name", license);
        close(&mut xml, 2, "license");
        close(&mut xml, 1, "licenses");
    }

    if let Some(author) = &package.author {
        open(&mut xml, 1, "organization");
        tag(&mut xml, 2, "name", author.name());
        close(&mut xml, 1, "organization");
    }

    if let Some(repository) = &package.repository {
        open(&mut xml, 1, "scm");
        tag(&mut xml, 2, "url", repository.url());
        tag(&mut xml, 2, "connection", repository.url());
        tag(&mut xml, 2, "developerConnection", repository.url());
        close(&mut xml, 1, "scm");
    }

    if let Some(url) = package.bugs.as_ref().and_then(|bugs| bugs.url()) {
        open(&mut xml, 1, "issueManagement");
        tag(&mut xml, 2, "url", url);
        close(&mut xml, 1, "issueManagement");
    }

    if !package.maintainers.is_empty() {
        open(&mut xml, 1, "developers");
        for maintainer in &package.maintainers {
            open(&mut xml, 2, "developer");
            tag(&mut xml, 3, "name", &maintainer.name);
            if let Some(email) = &maintainer.email {
                tag(&mut xml, 3, "email", email);
            }
            close(&mut xml, 2, "developer");
        }
        close(&mut xml, 1, "developers");
    }

    if !package.dependencies.is_empty() {
        open(&mut xml, 1, "dependencies");
        for (artifact_id, version) in &package.dependencies {
            open(&mut xml, 2, "dependency");
            tag(&mut xml, 3, "groupId", GROUP_ID);
            tag(&mut xml, 3, "artifactId", artifact_id);
            tag(&mut xml, 3, "version", &clean_version(version));
            tag(&mut xml, 3, "scope", DEPENDENCY_SCOPE);
            close(&mut xml, 2, "dependency");
        }
        close(&mut xml, 1, "dependencies");
    }

    xml.push_str("</project>\n");
    xml
}

/// SHA-1 of the rendered pom, as published beside the artifact.
pub fn pom_sha1(package: &Package) -> String {
    checksum::sha1_hex(to_pom_xml(package).as_bytes())
}

/// The copy-paste `<dependency>` block shown by the UI.
pub fn dependency_snippet(artifact_id: &str, version: &str) -> String {
    let mut xml = String::new();
    xml.push_str("<dependency>\n");
    tag(&mut xml, 1, "groupId", GROUP_ID);
    tag(&mut xml, 1, "artifactId", artifact_id);
    tag(&mut xml, 1, "version", version);
    xml.push_str("</dependency>");
    xml
}

/// npm range prefixes are meaningless to Maven; an exact version remains.
pub fn clean_version(version: &str) -> String {
    version.replace('^', "").trim().to_string()
}

// "@scope/pkg" → "scope pkg"
fn project_name(name: &str) -> String {
    name.replace('@', "").replace('/', " ")
}

fn tag(xml: &mut String, depth: usize, name: &str, value: &str) {
    indent(xml, depth);
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape(value));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

fn open(xml: &mut String, depth: usize, name: &str) {
    indent(xml, depth);
    xml.push('<');
    xml.push_str(name);
    xml.push_str(">\n");
}

fn close(xml: &mut String, depth: usize, name: &str) {
    indent(xml, depth);
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

fn indent(xml: &mut String, depth: usize) {
    for _ in 0..depth {
        xml.push_str("  ");
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npm::model::Package;

    fn package(json: &str) -> Package {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn scoped_names_become_readable_project_names() {
        assert_eq!(project_name("@lit/reactive-element"), "lit reactive-element");
        assert_eq!(project_name("lit"), "lit");
    }

    #[test]
    fn carets_are_stripped_from_versions() {
        assert_eq!(clean_version("^1.3.0"), "1.3.0");
        assert_eq!(clean_version(" 2.2.5 "), "2.2.5");
        assert_eq!(clean_version("3.0.1"), "3.0.1");
    }

    #[test]
    fn renders_the_fixed_coordinates() {
        let xml = to_pom_xml(&package(r#"{"name":"lit","version":"2.2.5"}"#));
        assert!(xml.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(xml.contains("<groupId>org.mavenpm</groupId>"));
        assert!(xml.contains("<artifactId>lit</artifactId>"));
        assert!(xml.contains("<version>2.2.5</version>"));
        assert!(xml.contains("<packaging>jar</packaging>"));
        assert!(xml.contains("<name>lit</name>"));
    }

    #[test]
    fn dependencies_carry_the_group_and_runtime_scope() {
        let xml = to_pom_xml(&package(
            r#"{"name":"lit","version":"2.2.5","dependencies":{"lit-html":"^2.2.0"}}"#,
        ));
        assert!(xml.contains("<artifactId>lit-html</artifactId>"));
        assert!(xml.contains("<version>2.2.0</version>"));
        assert!(xml.contains("<scope>runtime</scope>"));
    }

    #[test]
    fn no_dependency_section_without_dependencies() {
        let xml = to_pom_xml(&package(r#"{"name":"lit","version":"2.2.5"}"#));
        assert!(!xml.contains("<dependencies>"));
    }

    #[test]
    fn optional_metadata_is_omitted_when_absent() {
        let xml = to_pom_xml(&package(r#"{"name":"tiny","version":"1.0.0"}"#));
        assert!(!xml.contains("<licenses>"));
        assert!(!xml.contains("<organization>"));
        assert!(!xml.contains("<scm>"));
        assert!(!xml.contains("<issueManagement>"));
        assert!(!xml.contains("<developers>"));
    }

    #[test]
    fn full_metadata_maps_to_the_matching_pom_sections() {
        let xml = to_pom_xml(&package(
            r#"{
                "name": "@lit/reactive-element",
                "version": "1.3.0",
                "description": "Reactive base element",
                "license": "BSD-3-Clause",
                "homepage": "https://lit.dev/",
                "author": "Google LLC",
                "repository": { "type": "git", "url": "git+https://github.com/lit/lit.git" },
                "bugs": { "url": "https://github.com/lit/lit/issues" },
                "maintainers": [ { "name": "sorvell", "email": "sorvell@google.com" } ]
            }"#,
        ));
        assert!(xml.contains("<name>lit reactive-element</name>"));
        assert!(xml.contains("<licenses>"));
        assert!(xml.contains("<name>BSD-3-Clause</name>"));
        assert!(xml.contains("<organization>"));
        assert!(xml.contains("<name>Google LLC</name>"));
        assert!(xml.contains("<connection>git+https://github.com/lit/lit.git</connection>"));
        assert!(xml.contains("<developerConnection>git+https://github.com/lit/lit.git</developerConnection>"));
        assert!(xml.contains("<issueManagement>"));
        assert!(xml.contains("<developer>"));
        assert!(xml.contains("<email>sorvell@google.com</email>"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let xml = to_pom_xml(&package(
            r#"{"name":"tiny","version":"1.0.0","description":"a < b & b > c"}"#,
        ));
        assert!(xml.contains("<description>a &lt; b &amp; b &gt; c</description>"));
    }

    #[test]
    fn output_is_deterministic() {
        let doc = r#"{"name":"lit","version":"2.2.5","dependencies":{"b":"2","a":"1"}}"#;
        assert_eq!(to_pom_xml(&package(doc)), to_pom_xml(&package(doc)));

        let xml = to_pom_xml(&package(doc));
        let a = xml.find("<artifactId>a</artifactId>").unwrap();
        let b = xml.find("<artifactId>b</artifactId>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn snippet_matches_the_documented_form() {
        let snippet = dependency_snippet("lit", "2.2.5");
        assert_eq!(
            snippet,
            "<dependency>\n  <groupId>org.mavenpm</groupId>\n  <artifactId>lit</artifactId>\n  <version>2.2.5</version>\n</dependency>"
        );
    }

    #[test]
    fn pom_sha1_matches_the_rendered_bytes() {
        let package = package(r#"{"name":"lit","version":"2.2.5"}"#);
        let expected = checksum::sha1_hex(to_pom_xml(&package).as_bytes());
        assert_eq!(pom_sha1(&package), expected);
    }
}
