//! Compiled attribute patterns.
//!
//! An attribute occurrence looks like `[assembly: AssemblyVersion("1.2.3.4")]`.
//! Matching works on raw bytes so everything outside the four numbers is
//! written back exactly as it was read.

use crate::version::AssemblyVersion;
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;

/// Attribute holding the assembly version.
pub const ASSEMBLY_VERSION_ATTRIBUTE: &str = "AssemblyVersion";

/// Attribute holding the file version.
pub const ASSEMBLY_FILE_VERSION_ATTRIBUTE: &str = "AssemblyFileVersion";

/// A compiled matcher for one attribute name.
#[derive(Debug, Clone)]
pub struct AttributePattern {
    regex: Regex,
}

impl AttributePattern {
    /// Compile the matcher for `[assembly: <attribute>("W.X.Y.Z")]`.
    pub fn new(attribute: &str) -> Self {
        let source = format!(
            r#"(?P<open>\[assembly:\s*{}\(")\d+\.\d+\.\d+\.\d+(?P<close>"\)\])"#,
            regex::escape(attribute)
        );
        // The attribute name is escaped, so the pattern is always valid.
        let regex = Regex::new(&source).expect("attribute pattern must compile");
        Self { regex }
    }

    /// Replace the version inside every occurrence of the attribute.
    ///
    /// Returns the input unchanged (borrowed) when nothing matched.
    pub fn replace<'a>(&self, content: &'a [u8], version: &AssemblyVersion) -> Cow<'a, [u8]> {
        let version = version.to_string();
        self.regex.replace_all(content, |caps: &Captures<'_>| {
            let mut out = Vec::with_capacity(caps[0].len());
            out.extend_from_slice(&caps["open"]);
            out.extend_from_slice(version.as_bytes());
            out.extend_from_slice(&caps["close"]);
            out
        })
    }
}

/// Replace the version of `attribute` in `content` without any filesystem access.
pub fn replace_version<'a>(
    content: &'a [u8],
    attribute: &str,
    version: &AssemblyVersion,
) -> Cow<'a, [u8]> {
    AttributePattern::new(attribute).replace(content, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> AssemblyVersion {
        s.parse().unwrap()
    }

    fn replace_str(content: &str, attribute: &str, version: &str) -> String {
        let out = replace_version(content.as_bytes(), attribute, &v(version));
        String::from_utf8(out.into_owned()).unwrap()
    }

    #[test]
    fn rewrites_assembly_version() {
        let out = replace_str(
            "[assembly: AssemblyVersion(\"1.0.0.0\")]",
            ASSEMBLY_VERSION_ATTRIBUTE,
            "2.3.4.5",
        );
        assert_eq!(out, "[assembly: AssemblyVersion(\"2.3.4.5\")]");
    }

    #[test]
    fn leaves_surrounding_text_untouched() {
        let input = "// header\r\n[assembly:   AssemblyVersion(\"1.0.0.0\")] // trailing\r\nfooter";
        let out = replace_str(input, ASSEMBLY_VERSION_ATTRIBUTE, "7.0.0.1");
        assert_eq!(
            out,
            "// header\r\n[assembly:   AssemblyVersion(\"7.0.0.1\")] // trailing\r\nfooter"
        );
    }

    #[test]
    fn tolerates_no_whitespace_after_colon() {
        let out = replace_str(
            "[assembly:AssemblyVersion(\"1.0.0.0\")]",
            ASSEMBLY_VERSION_ATTRIBUTE,
            "3.0.0.0",
        );
        assert_eq!(out, "[assembly:AssemblyVersion(\"3.0.0.0\")]");
    }

    #[test]
    fn version_pattern_does_not_touch_file_version() {
        let input = "[assembly: AssemblyVersion(\"1.0.0.0\")]\n[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n";
        let out = replace_str(input, ASSEMBLY_VERSION_ATTRIBUTE, "2.0.0.0");
        assert_eq!(
            out,
            "[assembly: AssemblyVersion(\"2.0.0.0\")]\n[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n"
        );
    }

    #[test]
    fn file_version_pattern_does_not_touch_version() {
        let input = "[assembly: AssemblyVersion(\"1.0.0.0\")]\n[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n";
        let out = replace_str(input, ASSEMBLY_FILE_VERSION_ATTRIBUTE, "9.9.9.9");
        assert_eq!(
            out,
            "[assembly: AssemblyVersion(\"1.0.0.0\")]\n[assembly: AssemblyFileVersion(\"9.9.9.9\")]\n"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let input = "[assembly: AssemblyVersion(\"1.0.0.0\")]\nx\n[assembly: AssemblyVersion(\"4.5.6.7\")]\n";
        let out = replace_str(input, ASSEMBLY_VERSION_ATTRIBUTE, "2.0.0.0");
        assert_eq!(
            out,
            "[assembly: AssemblyVersion(\"2.0.0.0\")]\nx\n[assembly: AssemblyVersion(\"2.0.0.0\")]\n"
        );
    }

    #[test]
    fn ignores_wildcard_and_short_versions() {
        let input = "[assembly: AssemblyVersion(\"1.0.*\")]\n[assembly: AssemblyVersion(\"1.0.0\")]\n";
        let out = replace_str(input, ASSEMBLY_VERSION_ATTRIBUTE, "2.0.0.0");
        assert_eq!(out, input);
    }

    #[test]
    fn unmatched_content_is_borrowed() {
        let input = b"no attributes here";
        let out = replace_version(input, ASSEMBLY_VERSION_ATTRIBUTE, &v("1.0.0.0"));
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn preserves_non_utf8_bytes_and_bom() {
        let mut input = vec![0xEF, 0xBB, 0xBF];
        input.extend_from_slice(b"[assembly: AssemblyVersion(\"1.0.0.0\")]\n\xff\xfe");
        let out = replace_version(&input, ASSEMBLY_VERSION_ATTRIBUTE, &v("5.5.5.5"));

        let mut expected = vec![0xEF, 0xBB, 0xBF];
        expected.extend_from_slice(b"[assembly: AssemblyVersion(\"5.5.5.5\")]\n\xff\xfe");
        assert_eq!(out.as_ref(), expected.as_slice());
    }
}
