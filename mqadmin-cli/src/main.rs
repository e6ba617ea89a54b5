//! mqadmin CLI - Command-line interface for the mqadmin console
//!
//! Provides commands for listing, adding, deleting, and inspecting the
//! configured broker and object-store endpoints that the graphical
//! console reads from the same registry files.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mqadmin_core::{
    Credentials, EndpointDescriptor, EndpointKind, ListKind, PersistenceError, RegistryStore,
};

/// mqadmin command-line interface for managing configured endpoints
#[derive(Parser)]
#[command(name = "mqadmin-cli")]
#[command(author, version, about = "mqadmin command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the registry file (overrides the default location)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Which endpoint list to operate on
    #[arg(short, long, global = true, default_value = "broker", value_enum)]
    pub kind: KindArg,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all configured endpoints
    #[command(about = "List all endpoints in the registry")]
    List {
        /// Output format for the endpoint list
        #[arg(short = 'o', long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Add a new endpoint
    #[command(about = "Add an endpoint to the registry")]
    Add {
        /// Name for the new endpoint
        #[arg(short, long)]
        name: String,

        /// Host address (hostname or IP)
        #[arg(short = 'H', long)]
        host: String,

        /// Port number (defaults to 7676 for brokers, 1099 for object stores)
        #[arg(short, long)]
        port: Option<u16>,

        /// Username for authentication
        #[arg(short, long)]
        user: Option<String>,

        /// Password for authentication (stored in clear text by the registry file)
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete an endpoint
    #[command(about = "Delete an endpoint from the registry")]
    Delete {
        /// Endpoint name
        name: String,
    },

    /// Show endpoint details
    #[command(about = "Show details for one endpoint")]
    Show {
        /// Endpoint name
        name: String,
    },
}

/// Endpoint list selector
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    /// The broker favourite list
    Broker,
    /// The object-store favourite list
    Objstore,
}

impl From<KindArg> for ListKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Broker => Self::Brokers,
            KindArg::Objstore => Self::ObjectStores,
        }
    }
}

/// Output format for the list command
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
    /// Output as CSV
    Csv,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = match build_store(cli.kind.into(), cli.file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::GENERAL_ERROR);
        }
    };

    let result = match cli.command {
        Commands::List { format } => cmd_list(&store, format),
        Commands::Add {
            name,
            host,
            port,
            user,
            password,
        } => cmd_add(
            &store,
            &name,
            &host,
            port,
            user.as_deref(),
            password.as_deref(),
        ),
        Commands::Delete { name } => cmd_delete(&store, &name),
        Commands::Show { name } => cmd_show(&store, &name),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Builds the registry store for the selected list and optional path override
fn build_store(kind: ListKind, file: Option<PathBuf>) -> Result<RegistryStore, CliError> {
    match file {
        Some(path) => Ok(RegistryStore::with_path(kind, path)),
        None => match kind {
            ListKind::Brokers => RegistryStore::brokers(),
            ListKind::ObjectStores => RegistryStore::object_stores(),
        }
        .map_err(|e| CliError::Registry(format!("Failed to locate registry file: {e}"))),
    }
}

/// Loads the registry, treating a missing file as empty
///
/// The GUI creates the file on first save; until then every list is empty.
/// Any other persistence failure still propagates.
fn load_or_empty(store: &RegistryStore) -> Result<mqadmin_core::ConnectionRegistry, CliError> {
    match store.load() {
        Ok(registry) => Ok(registry),
        Err(PersistenceError::NotFound(_)) => Ok(mqadmin_core::ConnectionRegistry::new()),
        Err(e) => Err(CliError::Registry(format!("Failed to load registry: {e}"))),
    }
}

/// List endpoints command handler
fn cmd_list(store: &RegistryStore, format: OutputFormat) -> Result<(), CliError> {
    let registry = load_or_empty(store)?;
    let endpoints: Vec<&EndpointDescriptor> = registry.list().collect();

    match format {
        OutputFormat::Table => println!("{}", format_table(&endpoints)),
        OutputFormat::Json => println!("{}", format_json(&endpoints)?),
        OutputFormat::Csv => println!("{}", format_csv(&endpoints)),
    }

    Ok(())
}

/// Add endpoint command handler
fn cmd_add(
    store: &RegistryStore,
    name: &str,
    host: &str,
    port: Option<u16>,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<(), CliError> {
    let kind = store.kind().endpoint_kind();
    let port = port.unwrap_or_else(|| kind.default_port());

    let credentials = match (user, password) {
        (Some(u), Some(p)) => Credentials::with_password(u, p),
        (Some(u), None) => Credentials::with_username(u),
        (None, Some(p)) => Credentials::with_password("", p),
        (None, None) => Credentials::empty(),
    };

    let endpoint = EndpointDescriptor::new(name.to_string(), kind, host.to_string(), port)
        .with_credentials(credentials);

    // Validation happens here, at the boundary; the registry itself
    // accepts anything.
    RegistryStore::validate_endpoint(&endpoint)
        .map_err(|e| CliError::Registry(format!("Invalid endpoint: {e}")))?;

    let mut registry = load_or_empty(store)?;
    let replaced = registry.exists(name);
    registry.add(endpoint);

    store
        .save(&registry)
        .map_err(|e| CliError::Registry(format!("Failed to save registry: {e}")))?;

    if replaced {
        println!("Replaced {kind} endpoint '{name}' ({host}:{port})");
    } else {
        println!("Added {kind} endpoint '{name}' ({host}:{port})");
    }

    Ok(())
}

/// Delete endpoint command handler
///
/// Stricter than the registry: deleting an unknown name is reported
/// instead of silently ignored, since nothing was selected in a tree here.
fn cmd_delete(store: &RegistryStore, name: &str) -> Result<(), CliError> {
    let mut registry = load_or_empty(store)?;

    if !registry.exists(name) {
        return Err(CliError::EndpointNotFound(name.to_string()));
    }

    registry.remove(name);
    store
        .save(&registry)
        .map_err(|e| CliError::Registry(format!("Failed to save registry: {e}")))?;

    println!("Deleted endpoint '{name}'");
    Ok(())
}

/// Show endpoint details command handler
fn cmd_show(store: &RegistryStore, name: &str) -> Result<(), CliError> {
    let registry = load_or_empty(store)?;
    let endpoint = registry
        .get(name)
        .ok_or_else(|| CliError::EndpointNotFound(name.to_string()))?;

    println!("Endpoint Details:");
    println!("  Name:     {}", endpoint.name);
    println!("  Kind:     {}", endpoint.kind);
    println!("  Host:     {}", endpoint.host);
    println!("  Port:     {}", endpoint.port);

    if !endpoint.credentials.username.is_empty() {
        println!("  Username: {}", endpoint.credentials.username);
    }
    if endpoint.credentials.has_password() {
        println!("  Password: (set)");
    }

    Ok(())
}

/// Format endpoints as a table string
#[must_use]
pub fn format_table(endpoints: &[&EndpointDescriptor]) -> String {
    if endpoints.is_empty() {
        return "No endpoints found.".to_string();
    }

    let mut output = String::new();

    let name_width = endpoints
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let host_width = endpoints
        .iter()
        .map(|e| e.host.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let kind_width = 8; // "KIND" or "broker"/"objstore"
    let port_width = 5;

    let _ = writeln!(
        output,
        "{:<name_width$}  {:<host_width$}  {:<port_width$}  {:<kind_width$}",
        "NAME", "HOST", "PORT", "KIND"
    );
    let _ = writeln!(
        output,
        "{:-<name_width$}  {:-<host_width$}  {:-<port_width$}  {:-<kind_width$}",
        "", "", "", ""
    );

    for ep in endpoints {
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<host_width$}  {:<port_width$}  {:<kind_width$}",
            ep.name,
            ep.host,
            ep.port,
            ep.kind.as_str()
        );
    }

    output.trim_end().to_string()
}

/// Format endpoints as JSON string
///
/// # Errors
///
/// Returns `CliError::Registry` if JSON serialization fails.
pub fn format_json(endpoints: &[&EndpointDescriptor]) -> Result<String, CliError> {
    let output: Vec<EndpointOutput> = endpoints.iter().map(|e| (*e).into()).collect();
    serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Registry(format!("Failed to serialize to JSON: {e}")))
}

/// Format endpoints as CSV string
#[must_use]
pub fn format_csv(endpoints: &[&EndpointDescriptor]) -> String {
    let mut output = String::new();
    output.push_str("name,host,port,kind\n");

    for ep in endpoints {
        let name = escape_csv_field(&ep.name);
        let host = escape_csv_field(&ep.host);
        let _ = writeln!(output, "{},{},{},{}", name, host, ep.port, ep.kind.as_str());
    }

    output.trim_end().to_string()
}

/// Escape a CSV field if it contains special characters
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Simplified endpoint output for CLI
///
/// Passwords are deliberately omitted from JSON output even though the
/// registry file stores them; only the file format carries that weakness.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EndpointOutput {
    pub name: String,
    pub kind: String,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl From<&EndpointDescriptor> for EndpointOutput {
    fn from(ep: &EndpointDescriptor) -> Self {
        Self {
            name: ep.name.clone(),
            kind: ep.kind.as_str().to_string(),
            host: ep.host.clone(),
            port: ep.port,
            username: if ep.credentials.username.is_empty() {
                None
            } else {
                Some(ep.credentials.username.clone())
            },
        }
    }
}

/// Exit codes for CLI operations
pub mod exit_codes {
    /// Success - operation completed successfully
    pub const SUCCESS: i32 = 0;
    /// General error - registry, validation, or I/O failure
    pub const GENERAL_ERROR: i32 = 1;
    /// Lookup failure - the named endpoint is not in the registry
    pub const NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Registry load/save or validation error
    #[error("Registry error: {0}")]
    Registry(String),

    /// Named endpoint not present in the registry
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EndpointNotFound(_) => exit_codes::NOT_FOUND,
            Self::Registry(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_endpoints() -> Vec<EndpointDescriptor> {
        vec![
            EndpointDescriptor::new_broker("broker1", "localhost")
                .with_credentials(Credentials::with_username("admin")),
            EndpointDescriptor::new_broker("broker2", "10.0.0.5").with_port(7677),
        ]
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[]), "No endpoints found.");
    }

    #[test]
    fn test_format_table_columns() {
        let endpoints = sample_endpoints();
        let refs: Vec<&EndpointDescriptor> = endpoints.iter().collect();
        let table = format_table(&refs);

        assert!(table.starts_with("NAME"));
        assert!(table.contains("broker1"));
        assert!(table.contains("localhost"));
        assert!(table.contains("7677"));
    }

    #[test]
    fn test_format_csv_escapes_fields() {
        let endpoints =
            vec![EndpointDescriptor::new_broker("a,b", "host").with_port(1)];
        let refs: Vec<&EndpointDescriptor> = endpoints.iter().collect();
        let csv = format_csv(&refs);

        assert!(csv.starts_with("name,host,port,kind"));
        assert!(csv.contains("\"a,b\",host,1,broker"));
    }

    #[test]
    fn test_format_json_omits_password() {
        let endpoints = vec![EndpointDescriptor::new_broker("b", "h")
            .with_credentials(Credentials::with_password("admin", "secret"))];
        let refs: Vec<&EndpointDescriptor> = endpoints.iter().collect();
        let json = format_json(&refs).unwrap();

        assert!(json.contains("\"admin\""));
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = RegistryStore::with_path(ListKind::Brokers, temp.path().join("props"));

        cmd_add(&store, "broker1", "localhost", None, Some("admin"), None).unwrap();
        cmd_add(&store, "broker1", "elsewhere", Some(9000), None, None).unwrap();

        let registry = store.load().unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("broker1").unwrap().host, "elsewhere");

        cmd_delete(&store, "broker1").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_delete_absent_reports_not_found() {
        let temp = TempDir::new().unwrap();
        let store = RegistryStore::with_path(ListKind::Brokers, temp.path().join("props"));

        let err = cmd_delete(&store, "ghost").unwrap_err();
        assert!(matches!(err, CliError::EndpointNotFound(_)));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_add_rejects_blank_host() {
        let temp = TempDir::new().unwrap();
        let store = RegistryStore::with_path(ListKind::Brokers, temp.path().join("props"));

        let err = cmd_add(&store, "broker1", "   ", None, None, None).unwrap_err();
        assert!(matches!(err, CliError::Registry(_)));
        // A failed validation never touches the file
        assert!(!store.path().exists());
    }
}
