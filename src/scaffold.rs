//! Project scaffolding through the external FusionKit CLI.
//!
//! Each operation runs `fk create <kind> -n <name> ...` in the working
//! directory and reports where the project landed. Dependency installation
//! is opt-in; dev servers and browsers are never started.

use crate::error::ScaffoldError;
use regex::Regex;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("project name pattern is valid"));

/// Exit status a POSIX shell reports for an unknown command.
const COMMAND_NOT_FOUND: i32 = 127;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Vue,
    Angular,
    #[default]
    React,
}

impl Framework {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::React => "react",
        }
    }

    /// Port the generated project's dev server listens on.
    pub const fn dev_port(self) -> u16 {
        match self {
            Self::Vue => 4300,
            Self::Angular => 4100,
            Self::React => 4200,
        }
    }

    /// Features the CLI template ships for this framework.
    pub const fn features(self) -> &'static str {
        match self {
            Self::Vue => "Elevate Design System, i18n, Linter",
            Self::Angular => "Elevate Design System, AppShell UI Components",
            Self::React => "Elevate Design System, Redux",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Shell,
    Mfe(Framework),
    Copilot,
}

impl ProjectKind {
    /// Name used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Mfe(_) => "MFE",
            Self::Copilot => "copilot",
        }
    }

    /// Arguments passed to the CLI binary.
    pub fn cli_args(self, name: &str) -> Vec<String> {
        let mut args = vec!["create".to_string()];
        match self {
            Self::Shell => args.extend(["shell", "-n", name, "--mcp"].map(String::from)),
            Self::Mfe(framework) => args.extend(
                ["mfe", "-n", name, "--mcp", "-f", framework.as_str()].map(String::from),
            ),
            Self::Copilot => args.extend(["copilot", "-n", name].map(String::from)),
        }
        args
    }

    /// Copilot projects are built by the user; only shell and mfe projects
    /// get the optional dependency install.
    const fn installs_dependencies(self) -> bool {
        !matches!(self, Self::Copilot)
    }
}

/// Result of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub kind: ProjectKind,
    pub name: String,
    pub path: PathBuf,
    pub stdout: String,
    pub dependencies_installed: bool,
}

/// Checks a project name before anything is spawned.
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }
    if !PROJECT_NAME.is_match(name) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Scaffolder {
    cli_binary: String,
    working_dir: PathBuf,
    install_dependencies: bool,
}

impl Scaffolder {
    pub fn new(cli_binary: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            cli_binary: cli_binary.into(),
            working_dir: working_dir.into(),
            install_dependencies: false,
        }
    }

    /// Runs `npm install` in shell and mfe projects after creation.
    pub fn install_dependencies(mut self, enabled: bool) -> Self {
        self.install_dependencies = enabled;
        self
    }

    /// Creates a project named `name` in the working directory.
    pub async fn create(
        &self,
        kind: ProjectKind,
        name: &str,
    ) -> Result<ScaffoldOutcome, ScaffoldError> {
        validate_name(name)?;

        let args = kind.cli_args(name);
        tracing::info!("Running {} {}", self.cli_binary, args.join(" "));

        let output = tokio::process::Command::new(&self.cli_binary)
            .current_dir(&self.working_dir)
            .args(&args)
            .output()
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => ScaffoldError::CliNotFound(self.cli_binary.clone()),
                _ => ScaffoldError::Spawn {
                    program: self.cli_binary.clone(),
                    source,
                },
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        match output.status.code() {
            Some(0) => {}
            Some(COMMAND_NOT_FOUND) => return Err(ScaffoldError::CliNotFound(self.cli_binary.clone())),
            Some(code) => {
                tracing::error!(kind = kind.label(), stderr = %stderr, "Scaffolding command failed");
                return Err(ScaffoldError::CommandFailed { code, stderr });
            }
            None => return Err(ScaffoldError::Terminated { stderr }),
        }

        if stderr.contains("error") {
            return Err(ScaffoldError::Reported { stderr });
        }

        let path = self.working_dir.join(name);
        let dependencies_installed =
            self.install_dependencies && kind.installs_dependencies() && install(&path).await;

        Ok(ScaffoldOutcome {
            kind,
            name: name.to_string(),
            path,
            stdout,
            dependencies_installed,
        })
    }
}

/// Runs `npm install` in `project`. Failures are logged, never returned.
async fn install(project: &Path) -> bool {
    let result = tokio::process::Command::new("npm")
        .current_dir(project)
        .arg("install")
        .output()
        .await;

    match result {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            tracing::warn!(
                path = %project.display(),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "npm install failed"
            );
            false
        }
        Err(e) => {
            tracing::warn!("Could not run npm install in {}: {}", project.display(), e);
            false
        }
    }
}

/// User-facing message for a scaffold failure.
pub fn failure_message(kind: ProjectKind, error: &ScaffoldError) -> String {
    match error {
        ScaffoldError::EmptyName | ScaffoldError::InvalidName(_) => {
            format!("Invalid parameters: {error}")
        }
        ScaffoldError::CliNotFound(_) => error.to_string(),
        _ => format!("Failed to create {} project: {}", kind.label(), error),
    }
}

/// User-facing report of a created project with next steps.
pub fn success_message(outcome: &ScaffoldOutcome) -> String {
    let ScaffoldOutcome {
        kind,
        name,
        path,
        stdout,
        dependencies_installed,
    } = outcome;
    let stdout = stdout.trim();
    let install_step = if *dependencies_installed {
        "Dependencies installed"
    } else {
        "Install dependencies: npm install"
    };

    match kind {
        ProjectKind::Shell => format!(
            "Successfully created FusionKit shell project \"{name}\" with copilot integration!\n\n\
             Full path: {}\n\n{stdout}\n\n\
             Next steps:\n\
             1. Navigate to the project directory: cd {name}\n\
             2. {install_step}\n\
             3. Start the development server: npm run dev\n\
             4. Open http://localhost:8080",
            path.display()
        ),
        ProjectKind::Mfe(framework) => format!(
            "Successfully created FusionKit {upper} microfrontend project \"{name}\"!\n\n\
             Full path: {}\n\n{stdout}\n\n\
             {upper} microfrontend created with {features}\n\n\
             Next steps:\n\
             1. Navigate to the project directory: cd {name}\n\
             2. {install_step}\n\
             3. Start the development server: npm run {run}\n\
             4. Open http://localhost:{port}",
            path.display(),
            upper = framework.as_str().to_uppercase(),
            features = framework.features(),
            run = match framework {
                Framework::Angular => "start",
                Framework::Vue | Framework::React => "build-and-run-mfe",
            },
            port = framework.dev_port(),
        ),
        ProjectKind::Copilot => format!(
            "Successfully created FusionKit copilot project \"{name}\"!\n\n{stdout}\n\n\
             Next steps:\n\
             1. Navigate to the project directory: cd {name}\n\
             2. Install dependencies: npm install\n\
             3. Build the project: npm run build\n\
             4. Start the MCP server: npm start"
        ),
    }
}
