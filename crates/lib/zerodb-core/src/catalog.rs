//! Static tool catalog.
//!
//! Maps every advertised tool name to the remote operation it forwards to,
//! together with the argument shape declared to MCP clients. Arguments are not
//! validated locally; the remote API owns validation.

use serde_json::{Map, Value, json};

pub const RENEW_TOKEN_TOOL: &str = "zerodb_renew_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Memory,
    Vector,
    Quantum,
    Table,
    File,
    Event,
    Project,
    Rlhf,
    Admin,
    Utility,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Vector => "vector",
            Self::Quantum => "quantum",
            Self::Table => "table",
            Self::File => "file",
            Self::Event => "event",
            Self::Project => "project",
            Self::Rlhf => "rlhf",
            Self::Admin => "admin",
            Self::Utility => "utility",
        }
    }
}

/// Element type of an array argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Items {
    Number,
    String,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    Number,
    Boolean,
    Object,
    Array(Items),
}

impl ArgKind {
    fn schema(self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Object => json!({ "type": "object" }),
            Self::Array(items) => {
                let items = match items {
                    Items::Number => "number",
                    Items::String => "string",
                    Items::Object => "object",
                };
                json!({ "type": "array", "items": { "type": items } })
            }
        }
    }
}

/// What a tool does when called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Forward to the named remote operation.
    Remote(&'static str),
    /// Renew the bearer credential and report the new expiry.
    RenewCredential,
}

#[derive(Debug)]
pub struct ToolSpec {
    pub name: &'static str,
    pub category: Category,
    pub action: ToolAction,
    pub description: &'static str,
    pub properties: &'static [(&'static str, ArgKind)],
    pub required: &'static [&'static str],
}

impl ToolSpec {
    /// JSON-Schema object describing the tool arguments.
    #[must_use]
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, kind)| ((*name).to_string(), kind.schema()))
            .collect();
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(self.required));
        schema
    }

    #[must_use]
    pub const fn remote_operation(&self) -> Option<&'static str> {
        match self.action {
            ToolAction::Remote(operation) => Some(operation),
            ToolAction::RenewCredential => None,
        }
    }
}

#[must_use]
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "zerodb_store_memory",
        category: Category::Memory,
        action: ToolAction::Remote("store_memory"),
        description: "Store agent memory in ZeroDB for persistent context",
        properties: &[
            ("content", ArgKind::String),
            ("role", ArgKind::String),
            ("session_id", ArgKind::String),
            ("agent_id", ArgKind::String),
            ("metadata", ArgKind::Object),
        ],
        required: &["content", "role"],
    },
    ToolSpec {
        name: "zerodb_search_memory",
        category: Category::Memory,
        action: ToolAction::Remote("search_memory"),
        description: "Search agent memory using semantic similarity",
        properties: &[
            ("query", ArgKind::String),
            ("session_id", ArgKind::String),
            ("agent_id", ArgKind::String),
            ("role", ArgKind::String),
            ("limit", ArgKind::Number),
        ],
        required: &["query"],
    },
    ToolSpec {
        name: "zerodb_get_context",
        category: Category::Memory,
        action: ToolAction::Remote("get_context"),
        description: "Get agent context window for current session",
        properties: &[
            ("session_id", ArgKind::String),
            ("agent_id", ArgKind::String),
            ("max_tokens", ArgKind::Number),
        ],
        required: &["session_id"],
    },
    ToolSpec {
        name: "zerodb_upsert_vector",
        category: Category::Vector,
        action: ToolAction::Remote("upsert_vector"),
        description: "Store or update a vector embedding with metadata (1536 dimensions)",
        properties: &[
            ("vector_embedding", ArgKind::Array(Items::Number)),
            ("document", ArgKind::String),
            ("metadata", ArgKind::Object),
            ("namespace", ArgKind::String),
            ("vector_id", ArgKind::String),
        ],
        required: &["vector_embedding", "document"],
    },
    ToolSpec {
        name: "zerodb_batch_upsert_vectors",
        category: Category::Vector,
        action: ToolAction::Remote("batch_upsert_vectors"),
        description: "Batch upsert multiple vectors for efficiency",
        properties: &[
            ("vectors", ArgKind::Array(Items::Object)),
            ("namespace", ArgKind::String),
        ],
        required: &["vectors"],
    },
    ToolSpec {
        name: "zerodb_search_vectors",
        category: Category::Vector,
        action: ToolAction::Remote("search_vectors"),
        description: "Search vectors using semantic similarity",
        properties: &[
            ("query_vector", ArgKind::Array(Items::Number)),
            ("namespace", ArgKind::String),
            ("limit", ArgKind::Number),
            ("threshold", ArgKind::Number),
            ("filter_metadata", ArgKind::Object),
        ],
        required: &["query_vector"],
    },
    ToolSpec {
        name: "zerodb_delete_vector",
        category: Category::Vector,
        action: ToolAction::Remote("delete_vector"),
        description: "Delete a specific vector by ID",
        properties: &[
            ("vector_id", ArgKind::String),
            ("namespace", ArgKind::String),
        ],
        required: &["vector_id"],
    },
    ToolSpec {
        name: "zerodb_get_vector",
        category: Category::Vector,
        action: ToolAction::Remote("get_vector"),
        description: "Retrieve a specific vector by ID",
        properties: &[
            ("vector_id", ArgKind::String),
            ("namespace", ArgKind::String),
            ("include_embedding", ArgKind::Boolean),
        ],
        required: &["vector_id"],
    },
    ToolSpec {
        name: "zerodb_list_vectors",
        category: Category::Vector,
        action: ToolAction::Remote("list_vectors"),
        description: "List vectors in a project/namespace with pagination",
        properties: &[
            ("namespace", ArgKind::String),
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
            ("filter_metadata", ArgKind::Object),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_vector_stats",
        category: Category::Vector,
        action: ToolAction::Remote("vector_stats"),
        description: "Get vector statistics for a project",
        properties: &[
            ("namespace", ArgKind::String),
            ("detailed", ArgKind::Boolean),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_create_vector_index",
        category: Category::Vector,
        action: ToolAction::Remote("create_vector_index"),
        description: "Create optimized index for vector search",
        properties: &[
            ("namespace", ArgKind::String),
            ("index_type", ArgKind::String),
            ("distance_metric", ArgKind::String),
            ("index_params", ArgKind::Object),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_optimize_vectors",
        category: Category::Vector,
        action: ToolAction::Remote("optimize_vector_storage"),
        description: "Optimize vector storage for better performance",
        properties: &[
            ("namespace", ArgKind::String),
            ("optimize_type", ArgKind::String),
            ("dry_run", ArgKind::Boolean),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_export_vectors",
        category: Category::Vector,
        action: ToolAction::Remote("export_vectors"),
        description: "Export vectors to various formats (JSON, CSV, Parquet)",
        properties: &[
            ("namespace", ArgKind::String),
            ("format", ArgKind::String),
            ("filter_metadata", ArgKind::Object),
            ("include_embeddings", ArgKind::Boolean),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_quantum_compress",
        category: Category::Quantum,
        action: ToolAction::Remote("quantum_compress_vector"),
        description: "Apply quantum-inspired compression to vector (reduces dimensionality)",
        properties: &[
            ("vector_embedding", ArgKind::Array(Items::Number)),
            ("compression_ratio", ArgKind::Number),
            ("preserve_similarity", ArgKind::Boolean),
        ],
        required: &["vector_embedding"],
    },
    ToolSpec {
        name: "zerodb_quantum_decompress",
        category: Category::Quantum,
        action: ToolAction::Remote("quantum_decompress_vector"),
        description: "Decompress quantum-compressed vector back to original dimensions",
        properties: &[
            ("compressed_vector", ArgKind::Array(Items::Number)),
            ("original_dimensions", ArgKind::Number),
            ("compression_metadata", ArgKind::Object),
        ],
        required: &["compressed_vector"],
    },
    ToolSpec {
        name: "zerodb_quantum_hybrid_search",
        category: Category::Quantum,
        action: ToolAction::Remote("quantum_hybrid_similarity"),
        description: "Hybrid similarity search using quantum enhancement",
        properties: &[
            ("query_vector", ArgKind::Array(Items::Number)),
            ("namespace", ArgKind::String),
            ("quantum_weight", ArgKind::Number),
            ("classical_weight", ArgKind::Number),
            ("limit", ArgKind::Number),
        ],
        required: &["query_vector"],
    },
    ToolSpec {
        name: "zerodb_quantum_optimize",
        category: Category::Quantum,
        action: ToolAction::Remote("quantum_optimize_space"),
        description: "Optimize quantum circuits for project vectors",
        properties: &[
            ("namespace", ArgKind::String),
            ("optimization_level", ArgKind::Number),
            ("target_backend", ArgKind::String),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_quantum_feature_map",
        category: Category::Quantum,
        action: ToolAction::Remote("quantum_feature_map"),
        description: "Apply quantum feature mapping to vector",
        properties: &[
            ("vector_embedding", ArgKind::Array(Items::Number)),
            ("feature_map_type", ArgKind::String),
            ("num_qubits", ArgKind::Number),
            ("reps", ArgKind::Number),
        ],
        required: &["vector_embedding"],
    },
    ToolSpec {
        name: "zerodb_quantum_kernel",
        category: Category::Quantum,
        action: ToolAction::Remote("quantum_kernel_similarity"),
        description: "Calculate quantum kernel similarity between vectors",
        properties: &[
            ("vector_a", ArgKind::Array(Items::Number)),
            ("vector_b", ArgKind::Array(Items::Number)),
            ("kernel_type", ArgKind::String),
            ("shots", ArgKind::Number),
        ],
        required: &["vector_a", "vector_b"],
    },
    ToolSpec {
        name: "zerodb_create_table",
        category: Category::Table,
        action: ToolAction::Remote("create_table"),
        description: "Create a new NoSQL table with schema",
        properties: &[
            ("table_name", ArgKind::String),
            ("schema", ArgKind::Object),
            ("description", ArgKind::String),
        ],
        required: &["table_name", "schema"],
    },
    ToolSpec {
        name: "zerodb_list_tables",
        category: Category::Table,
        action: ToolAction::Remote("list_tables"),
        description: "List all tables in the project",
        properties: &[
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_get_table",
        category: Category::Table,
        action: ToolAction::Remote("get_table"),
        description: "Get table details and schema",
        properties: &[
            ("table_id", ArgKind::String),
            ("include_stats", ArgKind::Boolean),
        ],
        required: &["table_id"],
    },
    ToolSpec {
        name: "zerodb_delete_table",
        category: Category::Table,
        action: ToolAction::Remote("delete_table"),
        description: "Delete a table and all its data",
        properties: &[
            ("table_id", ArgKind::String),
            ("confirm", ArgKind::Boolean),
        ],
        required: &["table_id", "confirm"],
    },
    ToolSpec {
        name: "zerodb_insert_rows",
        category: Category::Table,
        action: ToolAction::Remote("insert_rows"),
        description: "Insert rows into a table",
        properties: &[
            ("table_id", ArgKind::String),
            ("rows", ArgKind::Array(Items::Object)),
            ("return_ids", ArgKind::Boolean),
        ],
        required: &["table_id", "rows"],
    },
    ToolSpec {
        name: "zerodb_query_rows",
        category: Category::Table,
        action: ToolAction::Remote("query_rows"),
        description: "Query rows from a table with filters",
        properties: &[
            ("table_id", ArgKind::String),
            ("filter", ArgKind::Object),
            ("sort", ArgKind::Object),
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
            ("projection", ArgKind::Object),
        ],
        required: &["table_id"],
    },
    ToolSpec {
        name: "zerodb_update_rows",
        category: Category::Table,
        action: ToolAction::Remote("update_rows"),
        description: "Update rows in a table",
        properties: &[
            ("table_id", ArgKind::String),
            ("filter", ArgKind::Object),
            ("update", ArgKind::Object),
            ("upsert", ArgKind::Boolean),
        ],
        required: &["table_id", "filter", "update"],
    },
    ToolSpec {
        name: "zerodb_delete_rows",
        category: Category::Table,
        action: ToolAction::Remote("delete_rows"),
        description: "Delete rows from a table",
        properties: &[
            ("table_id", ArgKind::String),
            ("filter", ArgKind::Object),
            ("limit", ArgKind::Number),
        ],
        required: &["table_id", "filter"],
    },
    ToolSpec {
        name: "zerodb_upload_file",
        category: Category::File,
        action: ToolAction::Remote("upload_file"),
        description: "Upload file to ZeroDB storage",
        properties: &[
            ("file_name", ArgKind::String),
            ("file_content", ArgKind::String),
            ("content_type", ArgKind::String),
            ("metadata", ArgKind::Object),
            ("folder", ArgKind::String),
        ],
        required: &["file_name", "file_content"],
    },
    ToolSpec {
        name: "zerodb_download_file",
        category: Category::File,
        action: ToolAction::Remote("download_file"),
        description: "Download file from ZeroDB storage",
        properties: &[
            ("file_id", ArgKind::String),
            ("return_base64", ArgKind::Boolean),
        ],
        required: &["file_id"],
    },
    ToolSpec {
        name: "zerodb_list_files",
        category: Category::File,
        action: ToolAction::Remote("list_files"),
        description: "List files in project storage",
        properties: &[
            ("folder", ArgKind::String),
            ("content_type", ArgKind::String),
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_delete_file",
        category: Category::File,
        action: ToolAction::Remote("delete_file"),
        description: "Delete file from storage",
        properties: &[
            ("file_id", ArgKind::String),
        ],
        required: &["file_id"],
    },
    ToolSpec {
        name: "zerodb_get_file_metadata",
        category: Category::File,
        action: ToolAction::Remote("get_file_metadata"),
        description: "Get file metadata without downloading content",
        properties: &[
            ("file_id", ArgKind::String),
        ],
        required: &["file_id"],
    },
    ToolSpec {
        name: "zerodb_generate_presigned_url",
        category: Category::File,
        action: ToolAction::Remote("generate_presigned_url"),
        description: "Generate presigned URL for file access",
        properties: &[
            ("file_id", ArgKind::String),
            ("expiration_seconds", ArgKind::Number),
            ("operation", ArgKind::String),
        ],
        required: &["file_id"],
    },
    ToolSpec {
        name: "zerodb_create_event",
        category: Category::Event,
        action: ToolAction::Remote("create_event"),
        description: "Create an event in the event stream",
        properties: &[
            ("event_type", ArgKind::String),
            ("event_data", ArgKind::Object),
            ("source", ArgKind::String),
            ("correlation_id", ArgKind::String),
        ],
        required: &["event_type", "event_data"],
    },
    ToolSpec {
        name: "zerodb_list_events",
        category: Category::Event,
        action: ToolAction::Remote("list_events"),
        description: "List events with filtering",
        properties: &[
            ("event_type", ArgKind::String),
            ("source", ArgKind::String),
            ("start_time", ArgKind::String),
            ("end_time", ArgKind::String),
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_get_event",
        category: Category::Event,
        action: ToolAction::Remote("get_event"),
        description: "Get event details by ID",
        properties: &[
            ("event_id", ArgKind::String),
        ],
        required: &["event_id"],
    },
    ToolSpec {
        name: "zerodb_subscribe_events",
        category: Category::Event,
        action: ToolAction::Remote("subscribe_to_events"),
        description: "Subscribe to event stream (returns subscription ID)",
        properties: &[
            ("event_types", ArgKind::Array(Items::String)),
            ("filter", ArgKind::Object),
            ("webhook_url", ArgKind::String),
        ],
        required: &["event_types"],
    },
    ToolSpec {
        name: "zerodb_event_stats",
        category: Category::Event,
        action: ToolAction::Remote("event_stats"),
        description: "Get event stream statistics",
        properties: &[
            ("event_type", ArgKind::String),
            ("time_range", ArgKind::String),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_create_project",
        category: Category::Project,
        action: ToolAction::Remote("create_project"),
        description: "Create a new ZeroDB project",
        properties: &[
            ("project_name", ArgKind::String),
            ("description", ArgKind::String),
            ("settings", ArgKind::Object),
        ],
        required: &["project_name"],
    },
    ToolSpec {
        name: "zerodb_get_project",
        category: Category::Project,
        action: ToolAction::Remote("get_project"),
        description: "Get project details",
        properties: &[
            ("project_id", ArgKind::String),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_list_projects",
        category: Category::Project,
        action: ToolAction::Remote("list_projects"),
        description: "List all accessible projects",
        properties: &[
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_update_project",
        category: Category::Project,
        action: ToolAction::Remote("update_project"),
        description: "Update project settings",
        properties: &[
            ("project_id", ArgKind::String),
            ("project_name", ArgKind::String),
            ("description", ArgKind::String),
            ("settings", ArgKind::Object),
        ],
        required: &["project_id"],
    },
    ToolSpec {
        name: "zerodb_delete_project",
        category: Category::Project,
        action: ToolAction::Remote("delete_project"),
        description: "Delete a project and all its data",
        properties: &[
            ("project_id", ArgKind::String),
            ("confirm", ArgKind::Boolean),
        ],
        required: &["project_id", "confirm"],
    },
    ToolSpec {
        name: "zerodb_get_project_stats",
        category: Category::Project,
        action: ToolAction::Remote("get_project_stats"),
        description: "Get project usage statistics",
        properties: &[
            ("project_id", ArgKind::String),
            ("include_details", ArgKind::Boolean),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_enable_database",
        category: Category::Project,
        action: ToolAction::Remote("enable_database"),
        description: "Enable database features for a project",
        properties: &[
            ("project_id", ArgKind::String),
            ("features", ArgKind::Array(Items::String)),
        ],
        required: &["project_id", "features"],
    },
    ToolSpec {
        name: "zerodb_rlhf_interaction",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_collect_interaction"),
        description: "Collect user interaction for RLHF training",
        properties: &[
            ("prompt", ArgKind::String),
            ("response", ArgKind::String),
            ("feedback", ArgKind::Number),
            ("context", ArgKind::Object),
            ("agent_id", ArgKind::String),
        ],
        required: &["prompt", "response"],
    },
    ToolSpec {
        name: "zerodb_rlhf_agent_feedback",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_collect_agent_feedback"),
        description: "Collect agent-level feedback",
        properties: &[
            ("agent_id", ArgKind::String),
            ("feedback_type", ArgKind::String),
            ("rating", ArgKind::Number),
            ("comment", ArgKind::String),
            ("context", ArgKind::Object),
        ],
        required: &["agent_id", "feedback_type"],
    },
    ToolSpec {
        name: "zerodb_rlhf_workflow",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_collect_workflow_feedback"),
        description: "Collect workflow-level feedback",
        properties: &[
            ("workflow_id", ArgKind::String),
            ("success", ArgKind::Boolean),
            ("duration_ms", ArgKind::Number),
            ("steps_completed", ArgKind::Number),
            ("feedback", ArgKind::Object),
        ],
        required: &["workflow_id", "success"],
    },
    ToolSpec {
        name: "zerodb_rlhf_error",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_collect_error_report"),
        description: "Collect error report for RLHF improvement",
        properties: &[
            ("error_type", ArgKind::String),
            ("error_message", ArgKind::String),
            ("stack_trace", ArgKind::String),
            ("context", ArgKind::Object),
            ("severity", ArgKind::String),
        ],
        required: &["error_type", "error_message"],
    },
    ToolSpec {
        name: "zerodb_rlhf_status",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_get_status"),
        description: "Get RLHF collection status",
        properties: &[
            ("session_id", ArgKind::String),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_rlhf_summary",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_get_summary"),
        description: "Get RLHF data summary and statistics",
        properties: &[
            ("time_range", ArgKind::String),
            ("agent_id", ArgKind::String),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_rlhf_start",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_start_collection"),
        description: "Start RLHF data collection for session",
        properties: &[
            ("session_id", ArgKind::String),
            ("config", ArgKind::Object),
        ],
        required: &["session_id"],
    },
    ToolSpec {
        name: "zerodb_rlhf_stop",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_stop_collection"),
        description: "Stop RLHF data collection for session",
        properties: &[
            ("session_id", ArgKind::String),
            ("export_data", ArgKind::Boolean),
        ],
        required: &["session_id"],
    },
    ToolSpec {
        name: "zerodb_rlhf_session",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_get_session_interactions"),
        description: "Get RLHF interactions for a session",
        properties: &[
            ("session_id", ArgKind::String),
            ("limit", ArgKind::Number),
        ],
        required: &["session_id"],
    },
    ToolSpec {
        name: "zerodb_rlhf_broadcast",
        category: Category::Rlhf,
        action: ToolAction::Remote("rlhf_broadcast_event"),
        description: "Broadcast RLHF event to subscribers",
        properties: &[
            ("event_type", ArgKind::String),
            ("event_data", ArgKind::Object),
            ("target_agents", ArgKind::Array(Items::String)),
        ],
        required: &["event_type", "event_data"],
    },
    ToolSpec {
        name: "zerodb_admin_system_stats",
        category: Category::Admin,
        action: ToolAction::Remote("admin_get_system_stats"),
        description: "Get system-wide statistics (admin only)",
        properties: &[
            ("include_performance", ArgKind::Boolean),
            ("include_usage", ArgKind::Boolean),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_admin_list_projects",
        category: Category::Admin,
        action: ToolAction::Remote("admin_list_all_projects"),
        description: "List all projects system-wide (admin only)",
        properties: &[
            ("limit", ArgKind::Number),
            ("offset", ArgKind::Number),
            ("filter_user", ArgKind::String),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_admin_user_usage",
        category: Category::Admin,
        action: ToolAction::Remote("admin_get_user_usage"),
        description: "Get user usage statistics (admin only)",
        properties: &[
            ("user_id", ArgKind::String),
            ("time_range", ArgKind::String),
        ],
        required: &["user_id"],
    },
    ToolSpec {
        name: "zerodb_admin_health",
        category: Category::Admin,
        action: ToolAction::Remote("admin_system_health"),
        description: "Get system health status (admin only)",
        properties: &[
            ("include_components", ArgKind::Boolean),
        ],
        required: &[],
    },
    ToolSpec {
        name: "zerodb_admin_optimize",
        category: Category::Admin,
        action: ToolAction::Remote("admin_optimize_database"),
        description: "Run database optimization (admin only)",
        properties: &[
            ("optimization_type", ArgKind::String),
            ("project_id", ArgKind::String),
            ("dry_run", ArgKind::Boolean),
        ],
        required: &["optimization_type"],
    },
    ToolSpec {
        name: "zerodb_renew_token",
        category: Category::Utility,
        action: ToolAction::RenewCredential,
        description: "Manually renew authentication token",
        properties: &[],
        required: &[],
    },
];
