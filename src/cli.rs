use crate::config::{Config, ENV_DOCS_PATH, expand_tilde};
use crate::error::Result;
use crate::scaffold::Framework;
use crate::tracing::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fusionkit-docs-mcp", version)]
#[command(about = "Serve FusionKit documentation to AI assistants over MCP", long_about = None)]
pub struct Cli {
    /// Documentation root (default: ./docs)
    #[arg(long, global = true, env = ENV_DOCS_PATH)]
    pub docs: Option<String>,

    /// Config file (default: <config dir>/fusionkit-docs-mcp/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reuse the index between calls while the docs tree is unchanged
    #[arg(long, global = true)]
    pub cache: bool,

    #[arg(long, global = true, value_enum, default_value_t)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve MCP over stdio (the default)
    Serve,
    Overview {
        section: Option<String>,
    },
    Packages {
        package_name: Option<String>,
    },
    PackageDocs {
        package_name: String,
        section: Option<String>,
    },
    Examples {
        use_case: String,
        #[arg(short, long)]
        framework: Option<String>,
    },
    Migration {
        from_version: String,
        to_version: Option<String>,
    },
    Search {
        query: String,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
    /// Create a project with the FusionKit CLI
    Scaffold {
        #[command(subcommand)]
        project: ScaffoldCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScaffoldCommand {
    Shell {
        name: String,
    },
    Mfe {
        name: String,
        #[arg(short, long, value_enum, default_value_t)]
        framework: Framework,
    },
    Copilot {
        name: String,
    },
}

impl Cli {
    /// Resolves the effective configuration: file and environment, then flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(docs) = self.docs.as_deref().filter(|d| !d.is_empty()) {
            config.docs_path = PathBuf::from(expand_tilde(docs).into_owned());
        }
        if self.cache {
            config.cache = true;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["fusionkit-docs-mcp"]).unwrap();
        check!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fusionkit-docs-mcp",
            "package-docs",
            "core",
            "api",
            "--docs",
            "/srv/docs",
            "--cache",
        ])
        .unwrap();

        check!(cli.docs.as_deref() == Some("/srv/docs"));
        check!(cli.cache);
        let_assert!(Some(Commands::PackageDocs { package_name, section }) = cli.command);
        check!(package_name == "core");
        check!(section.as_deref() == Some("api"));
    }

    #[test]
    fn test_mfe_framework_defaults_to_react() {
        let cli = Cli::try_parse_from(["fusionkit-docs-mcp", "scaffold", "mfe", "demo"]).unwrap();
        let_assert!(
            Some(Commands::Scaffold {
                project: ScaffoldCommand::Mfe { framework, .. }
            }) = cli.command
        );
        check!(framework == Framework::React);
    }
}
