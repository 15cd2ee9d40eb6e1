//! Error handling types and utilities.

/// A specialized Result type for infrastructure plumbing (config loading,
/// task joins, process spawning).
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Failures surfaced to tool callers by the retrieval functions.
///
/// The `Display` output is the complete human-readable message; callers never
/// need to inspect the variant to report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocsError {
    /// A required parameter was absent or not a string.
    #[error("{param} is required and must be a string, got: {actual}")]
    NotAString {
        param: &'static str,
        actual: &'static str,
    },
    /// A required string parameter was empty or whitespace.
    #[error("{param} is required and must be a non-empty string")]
    EmptyParameter { param: &'static str },
    #[error("Section \"{section}\" not found")]
    SectionNotFound { section: String },
    #[error("Section \"{section}\" not found for package \"{package}\"")]
    PackageSectionNotFound { section: String, package: String },
    #[error("No package documentation found")]
    NoPackageDocumentation,
    #[error("Package \"{0}\" not found")]
    PackageNotFound(String),
    #[error("Documentation for package \"{0}\" not found")]
    DocumentationNotFound(String),
    #[error("No examples found for use case \"{0}\"")]
    NoExamples(String),
    #[error("Resource \"{0}\" not found")]
    ResourceNotFound(String),
    #[error("Failed to read resource \"{uri}\": {reason}")]
    ResourceUnreadable { uri: String, reason: String },
}

/// Failures of the scaffolding CLI wrapper.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Project name can only contain letters, numbers, hyphens, and underscores")]
    InvalidName(String),
    #[error(
        "FusionKit CLI ({0}) not found. Please install it first with: npm install -g @inform-appshell/fusion-kit-cli@latest"
    )]
    CliNotFound(String),
    #[error("Command failed with code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },
    #[error("Command terminated by signal: {stderr}")]
    Terminated { stderr: String },
    /// The CLI exited successfully but reported an error on stderr.
    #[error("{stderr}")]
    Reported { stderr: String },
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
