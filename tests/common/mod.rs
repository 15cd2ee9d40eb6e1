//! Shared test fixtures and utilities for integration tests.
//!
//! # Test Isolation Strategy
//!
//! Every test gets its own temporary documentation tree and its own
//! `DocState`, so tests can run in parallel and never share an index cache.
//!
//! # Available Fixtures
//!
//! - `fusionkit_docs`: a docs tree shaped like the FusionKit documentation
//!   (overview, packages, migration guide, examples), caching disabled
//! - `empty_docs`: an empty docs root

use fusionkit_docs_mcp::{Config, DocState};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub const OVERVIEW_MD: &str = "\
# What is FusionKit?
FusionKit is a comprehensive foundational library for standalone and microfrontend applications.

## Key Benefits
- **Standardization** across teams
- Microfrontend Enablement
- Reduced Development Time

## Quick Start
Install globally: npm install -g @inform-appshell/fusion-kit-cli@latest

## Standalone Applications
Build and deploy a single application.

## Microfrontends in a Shell
Compose independently deployed microfrontends.
";

pub const CORE_MD: &str = "\
# Fusion Kit Core
Core foundational services and utilities for FusionKit applications.

## Purpose
Configuration management, logging and service orchestration.

## Installation
```bash
npm install @inform-appshell/fusion-kit-core
```

## API
Main exports: ConfigService, LoggingService, ServiceRegistry

## Usage
```ts
const config = new ConfigService();
config.get(\"apiUrl\");
```
";

pub const CLI_MD: &str = "\
# FusionKit CLI
Command-line interface for creating and managing FusionKit applications.

## Commands
- fk create shell -n <name>
- fk create mfe -n <name> -f <framework>
";

pub const MIGRATION_MD: &str = "\
# Migration from V1 to V2
FusionKit V2 introduces breaking changes to service initialization and configuration management.

## Breaking Changes
- ConfigService constructor now requires a configuration object
- Authentication service renamed from AuthService to KeycloakService

## Steps
- Update dependencies
- Run migration script
- Test application

## Code Changes
```javascript
// Before:
oldApi.method();

// After:
newApi.method();
```
";

pub const REACT_MD: &str = "\
# React Setup
Wrap your application in the provider.

```tsx
import { FusionKitProvider } from \"@inform-appshell/fusion-kit-react\";
```

## Authentication
Call login() on the KeycloakService before rendering protected routes.
";

/// A temporary documentation root.
///
/// Provides basic filesystem operations within a temp directory that is
/// automatically cleaned up when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempDocs {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempDocs {
    /// Creates a new empty documentation root.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Creates a docs tree mirroring the FusionKit documentation layout.
    pub fn fusionkit() -> Self {
        let docs = Self::new();
        docs.create_file("overview.md", OVERVIEW_MD);
        docs.create_file("packages/fusion-kit-core.md", CORE_MD);
        docs.create_file("packages/fusion-kit-cli.md", CLI_MD);
        docs.create_file("migration/v1-to-v2.md", MIGRATION_MD);
        docs.create_file("examples/react-setup.md", REACT_MD);
        docs
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Removes a file from the tree.
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.root.join(path))
            .unwrap_or_else(|e| panic!("Failed to remove file '{}': {}", path, e));
    }

    /// A `DocState` serving this tree.
    pub fn state(&self, cache: bool) -> Arc<DocState> {
        Arc::new(DocState::new(Config {
            docs_path: self.root.clone(),
            cache,
            ..Config::default()
        }))
    }
}

impl Default for TempDocs {
    fn default() -> Self {
        Self::new()
    }
}

/// The FusionKit docs tree with a non-caching `DocState`.
///
/// Returns the tree alongside the state because the temp directory must stay
/// alive for the duration of the test.
#[fixture]
pub fn fusionkit_docs() -> (TempDocs, Arc<DocState>) {
    let docs = TempDocs::fusionkit();
    let state = docs.state(false);
    (docs, state)
}

#[allow(dead_code)] // Used by a subset of integration test crates
#[fixture]
pub fn empty_docs() -> (TempDocs, Arc<DocState>) {
    let docs = TempDocs::new();
    let state = docs.state(false);
    (docs, state)
}
