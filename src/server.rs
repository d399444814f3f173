//! MCP server exposing employee search to front-desk assistants.

use crate::search::EmployeeSearch;
use crate::store::{EmployeeStore, RosterFile};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use serde::Deserialize;
use std::fmt::{Display, Write as _};
use std::sync::Arc;

/// Parameters for the search_employees tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchEmployeesRequest {
    /// Name, partial name, or email fragment of the person being visited
    pub query: String,
    /// Maximum number of employees to return (default: 3)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Include a per-term score breakdown for each result
    #[serde(default)]
    pub explain: bool,
}

/// Run a search and render it as plain text for the tool response.
pub fn handle_search_employees<S>(
    search: &EmployeeSearch<S>,
    request: &SearchEmployeesRequest,
) -> std::result::Result<String, String>
where
    S: EmployeeStore,
    S::Error: Display,
{
    let query = request.query.trim();
    let results = search
        .explain(query, request.limit)
        .map_err(|e| format!("Employee lookup failed: {}", e))?;

    if results.is_empty() {
        return Ok(format!("No employees matched '{}'.", query));
    }

    let mut output = format!(
        "Found {} employee{} matching '{}':\n\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    );
    for (rank, (employee, breakdown)) in results.iter().enumerate() {
        let _ = write!(output, "{}. {}", rank + 1, employee.full_name);
        if let Some(email) = employee.email.as_deref().filter(|e| !e.is_empty()) {
            let _ = write!(output, " <{}>", email);
        }
        if let Some(department) = &employee.department {
            let _ = write!(output, ", {}", department);
        }
        let _ = writeln!(output, " [id: {}] (score {})", employee.id, breakdown.total());
        if request.explain {
            let _ = writeln!(output, "   {}", breakdown);
        }
    }

    Ok(output)
}

/// MCP Server for employee lookups
#[derive(Clone)]
pub struct EmployeeServer {
    /// Search engine over the roster file
    search: Arc<EmployeeSearch<RosterFile>>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for EmployeeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeServer")
            .field("roster", &self.search.store().path())
            .finish()
    }
}

#[tool_router]
impl EmployeeServer {
    pub fn new(search: EmployeeSearch<RosterFile>) -> Self {
        Self {
            search: Arc::new(search),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Look up employees by name or email for visitor check-in. Tolerates typos and partial names, returning the best matches ranked by relevance.",
        input_schema = inline_schema_for_type::<SearchEmployeesRequest>()
    )]
    async fn search_employees(
        &self,
        Parameters(request): Parameters<SearchEmployeesRequest>,
    ) -> std::result::Result<String, String> {
        let search = Arc::clone(&self.search);
        // Roster reads are blocking file I/O
        tokio::task::spawn_blocking(move || handle_search_employees(&search, &request))
            .await
            .map_err(|e| format!("Search task failed: {}", e))?
    }
}

#[tool_handler]
impl ServerHandler for EmployeeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "employee-search: Find the employee a visitor is here to see. \
                 Use search_employees with a name or email fragment; results are re-read \
                 from the current roster on every call.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Sets `inline_subschemas = true` so clients render optional fields as plain
/// inputs rather than `$ref` indirections.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let json_object = match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => object,
        _ => {
            tracing::error!("Schema serialization produced non-object value");
            JsonObject::new()
        }
    };

    Arc::new(json_object)
}
