//! Line-scoped token substitution for boilerplate templates.
//!
//! Templates are written against a placeholder project whose package is
//! `com.croot.demo` and whose database/service name is `bs_demo_server`.
//! Two literal rules rewrite them for the real package, one line at a time:
//!
//! 1. every `com.croot.demo` becomes the package name;
//! 2. on a line that mentions `bs_demo_server`, every `demo` anywhere in the
//!    line becomes the package name.
//!
//! Rule 2 is unscoped: it also rewrites unrelated `demo` substrings on the
//! same line. Templates are authored with that in mind.

use crate::domain::value_objects::PackageName;

/// Placeholder package used throughout the bundled templates.
pub const PACKAGE_PLACEHOLDER: &str = "com.croot.demo";

/// Marker that switches on the broad `demo` rewrite for a line.
pub const SERVER_MARKER: &str = "bs_demo_server";

/// Substring rewritten on marker lines.
pub const SERVER_TOKEN: &str = "demo";

/// Applies the substitution rules for one package name.
#[derive(Debug, Clone, Copy)]
pub struct TokenFilter<'a> {
    package: &'a str,
}

impl<'a> TokenFilter<'a> {
    pub fn new(package: &'a PackageName) -> Self {
        Self {
            package: package.as_str(),
        }
    }

    /// Rewrite a single line. The line must not include its terminator.
    pub fn apply(&self, line: &str) -> String {
        let mut out = if line.contains(PACKAGE_PLACEHOLDER) {
            line.replace(PACKAGE_PLACEHOLDER, self.package)
        } else {
            line.to_owned()
        };

        if out.contains(SERVER_MARKER) {
            out = out.replace(SERVER_TOKEN, self.package);
        }

        out
    }
}

/// Convenience wrapper around [`TokenFilter::apply`].
pub fn substitute(line: &str, package: &PackageName) -> String {
    TokenFilter::new(package).apply(line)
}
