//! Template selection and placeholder substitution.

use crate::config::SetupConfig;
use crate::config::schema::{DEFAULT_BRANCHES, DEFAULT_NODE_VERSIONS};
use crate::detect::DEFAULT_PUBLISH_DIR;
use crate::types::ProjectType;

const STATIC_TEMPLATE: &str = include_str!("templates/static.yml");
const NODE_TEMPLATE: &str = include_str!("templates/node.yml");

const BRANCHES: &str = "__BRANCHES__";
const NODE_VERSIONS: &str = "__NODE_VERSIONS__";
const PUBLISH_DIR: &str = "__PUBLISH_DIR__";
const PUBLISH_HINT: &str = "__PUBLISH_HINT__";

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowParams {
    pub branches: Vec<String>,
    pub node_versions: Vec<String>,
    pub publish_dir: String,
}

impl Default for WorkflowParams {
    fn default() -> Self {
        Self {
            branches: DEFAULT_BRANCHES.iter().map(|s| s.to_string()).collect(),
            node_versions: DEFAULT_NODE_VERSIONS.iter().map(|s| s.to_string()).collect(),
            publish_dir: DEFAULT_PUBLISH_DIR.to_string(),
        }
    }
}

impl WorkflowParams {
    /// Combine config with the detected publish directory.
    ///
    /// An explicit `publish_dir` in config wins over the detected one.
    pub fn from_config(config: &SetupConfig, detected_publish_dir: Option<&str>) -> Self {
        let publish_dir = config
            .publish_dir
            .as_deref()
            .or(detected_publish_dir)
            .unwrap_or(DEFAULT_PUBLISH_DIR)
            .to_string();

        Self {
            branches: config.branches(),
            node_versions: config.node_versions(),
            publish_dir,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowTemplate {
    Static,
    Node,
}

impl WorkflowTemplate {
    pub fn for_project(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Node => WorkflowTemplate::Node,
            ProjectType::Static => WorkflowTemplate::Static,
        }
    }

    /// Workflow `name:` as it appears in the Actions tab.
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowTemplate::Static => "Deploy static content to Pages",
            WorkflowTemplate::Node => "Build and Deploy Node.js Project",
        }
    }

    pub fn raw(&self) -> &'static str {
        match self {
            WorkflowTemplate::Static => STATIC_TEMPLATE,
            WorkflowTemplate::Node => NODE_TEMPLATE,
        }
    }

    pub fn render(&self, params: &WorkflowParams) -> String {
        let rendered = self
            .raw()
            .replace(BRANCHES, &quoted_flow_list(&params.branches));

        match self {
            WorkflowTemplate::Static => rendered,
            WorkflowTemplate::Node => rendered
                .replace(NODE_VERSIONS, &version_flow_list(&params.node_versions))
                .replace(PUBLISH_HINT, &publish_hint(&params.publish_dir))
                .replace(PUBLISH_DIR, &single_quoted(&params.publish_dir)),
        }
    }
}

/// Advice printed after generating a Node.js workflow.
pub fn publish_advice() -> [&'static str; 4] {
    [
        "Check the 'path' in the workflow file.",
        "Vite/Svelte usually uses './dist'",
        "Create React App usually uses './build'",
        "Next.js (static export) usually uses './out'",
    ]
}

fn publish_hint(publish_dir: &str) -> String {
    if publish_dir == DEFAULT_PUBLISH_DIR {
        "CHANGE THIS: If your build output is in 'build' or 'out', change './dist' below"
            .to_string()
    } else {
        format!(
            "CHANGE THIS: If your build output is not in '{}', change the path below",
            publish_dir.replace('\'', "")
        )
    }
}

/// `["main", "master"]`; JSON string quoting is valid YAML double-quoting.
fn quoted_flow_list(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| serde_json::Value::String(item.clone()).to_string())
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// `[18.x, 20.x, 'lts/*']`
///
/// Entries starting with a digit stay bare; anything else is quoted since a
/// leading `*`, `&` or `!` is YAML syntax.
fn version_flow_list(items: &[String]) -> String {
    let entries: Vec<String> = items
        .iter()
        .map(|item| {
            if item.starts_with(|c: char| c.is_ascii_digit()) {
                item.clone()
            } else {
                single_quoted(item)
            }
        })
        .collect();
    format!("[{}]", entries.join(", "))
}

fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOCK_STATIC: &str = r#"name: Deploy static content to Pages

on:
  push:
    branches: ["main", "master"]
  workflow_dispatch:

permissions:
  contents: read
  pages: write
  id-token: write

concurrency:
  group: "pages"
  cancel-in-progress: false

jobs:
  deploy:
    environment:
      name: github-pages
      url: ${{ steps.deployment.outputs.page_url }}
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
      - name: Setup Pages
        uses: actions/configure-pages@v4
      - name: Upload artifact
        uses: actions/upload-pages-artifact@v3
        with:
          # Upload entire repository
          path: '.'
      - name: Deploy to GitHub Pages
        id: deployment
        uses: actions/deploy-pages@v4
"#;

    const STOCK_NODE: &str = r#"name: Build and Deploy Node.js Project

on:
  push:
    branches: ["main", "master"]
  workflow_dispatch:

permissions:
  contents: read
  pages: write
  id-token: write

concurrency:
  group: "pages"
  cancel-in-progress: false

jobs:
  build-and-deploy:
    environment:
      name: github-pages
      url: ${{ steps.deployment.outputs.page_url }}
    runs-on: ubuntu-latest
    strategy:
      matrix:
        node-version: [18.x, 20.x]
    steps:
      - name: Checkout
        uses: actions/checkout@v4
      - name: Use Node.js ${{ matrix.node-version }}
        uses: actions/setup-node@v4
        with:
          node-version: ${{ matrix.node-version }}
          cache: 'npm'
      - name: Install Dependencies
        run: npm ci
      - name: Build Project
        run: npm run build
      - name: Setup Pages
        uses: actions/configure-pages@v4
      - name: Upload artifact
        uses: actions/upload-pages-artifact@v3
        with:
          # CHANGE THIS: If your build output is in 'build' or 'out', change './dist' below
          path: './dist'
      - name: Deploy to GitHub Pages
        id: deployment
        uses: actions/deploy-pages@v4
"#;

    fn matrix_versions(rendered: &str) -> Vec<String> {
        let doc: serde_yaml::Value = serde_yaml::from_str(rendered).unwrap();
        doc["jobs"]["build-and-deploy"]["strategy"]["matrix"]["node-version"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn default_static_render_is_stock_document() {
        assert_eq!(
            WorkflowTemplate::Static.render(&WorkflowParams::default()),
            STOCK_STATIC
        );
    }

    #[test]
    fn default_node_render_is_stock_document() {
        assert_eq!(
            WorkflowTemplate::Node.render(&WorkflowParams::default()),
            STOCK_NODE
        );
    }

    #[test]
    fn symbolic_node_versions_stay_valid_yaml() {
        let params = WorkflowParams {
            node_versions: vec!["*".to_string(), "lts/*".to_string(), "20.x".to_string()],
            ..Default::default()
        };
        let out = WorkflowTemplate::Node.render(&params);

        assert!(out.contains("node-version: ['*', 'lts/*', 20.x]"));
        assert_eq!(matrix_versions(&out), vec!["*", "lts/*", "20.x"]);
    }

    #[test]
    fn default_matrix_parses() {
        let out = WorkflowTemplate::Node.render(&WorkflowParams::default());
        assert_eq!(matrix_versions(&out), vec!["18.x", "20.x"]);
    }

    #[test]
    fn custom_params_are_substituted() {
        let params = WorkflowParams {
            branches: vec!["release".to_string()],
            node_versions: vec!["22.x".to_string()],
            publish_dir: "./out".to_string(),
        };
        let out = WorkflowTemplate::Node.render(&params);
        assert!(out.contains("branches: [\"release\"]"));
        assert!(out.contains("node-version: [22.x]"));
        assert!(out.contains("path: './out'"));
        assert!(out.contains("not in './out'"));
    }

    #[test]
    fn quotes_awkward_values() {
        let params = WorkflowParams {
            branches: vec!["feat/\"x\"".to_string()],
            publish_dir: "it's".to_string(),
            ..Default::default()
        };
        let out = WorkflowTemplate::Node.render(&params);
        assert!(out.contains(r#"branches: ["feat/\"x\""]"#));
        assert!(out.contains("path: 'it''s'"));
    }

    #[test]
    fn config_publish_dir_beats_detection() {
        let config = SetupConfig {
            publish_dir: Some("./public".to_string()),
            ..Default::default()
        };
        let params = WorkflowParams::from_config(&config, Some("./build"));
        assert_eq!(params.publish_dir, "./public");

        let params = WorkflowParams::from_config(&SetupConfig::default(), Some("./build"));
        assert_eq!(params.publish_dir, "./build");
    }
}
