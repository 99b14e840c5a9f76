use anyhow::{Context, Result};
use async_trait::async_trait;
use gcloud_gax::grpc::{Code, Status};
use gcloud_googleapis::spanner::admin::database::v1::{
    CreateDatabaseRequest, GetDatabaseDdlRequest, GetDatabaseRequest, UpdateDatabaseDdlRequest,
};
use gcloud_googleapis::spanner::admin::instance::v1::{
    CreateInstanceRequest, GetInstanceRequest, Instance,
};
use gcloud_spanner::admin::AdminClientConfig;
use gcloud_spanner::admin::client::Client as AdminClient;
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::mutation::insert_or_update;
use gcloud_spanner::row::Row;
use gcloud_spanner::statement::Statement;
use std::sync::Arc;

use super::{TODOS_TABLE, TodoStore, new_todo_id};
use crate::config::SpannerConfig;
use crate::models::{NewTodo, Todo};

const TODO_COLUMNS: [&str; 3] = ["id", "title", "description"];

/// Todo store backed by a Cloud Spanner table
#[derive(Clone)]
pub struct SpannerTodoStore {
    inner: Arc<Client>,
}

impl SpannerTodoStore {
    /// Connect to Spanner, provisioning the instance, database and table
    /// first if they are missing.
    ///
    /// gcloud-spanner picks up `SPANNER_EMULATOR_HOST` from the environment
    /// and talks to the emulator when it is set.
    pub async fn from_config(config: &SpannerConfig) -> Result<Self> {
        auto_provision(config).await?;

        let database_path = config.database_path();

        match &config.emulator_host {
            Some(host) => tracing::info!("Connecting to Spanner emulator at: {}", host),
            None => tracing::info!("Connecting to production Spanner"),
        }

        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!(
            "Successfully connected to Spanner database: {}",
            database_path
        );

        Ok(Self {
            inner: Arc::new(client),
        })
    }
}

fn todo_from_row(row: &Row) -> Result<Todo> {
    Ok(Todo {
        id: row.column_by_name("id")?,
        title: row.column_by_name("title")?,
        description: row.column_by_name("description")?,
    })
}

#[async_trait]
impl TodoStore for SpannerTodoStore {
    async fn get_one(&self, id: &str) -> Result<Option<Todo>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = @id",
            TODO_COLUMNS.join(", "),
            TODOS_TABLE
        );
        let id_param = id.to_string();

        let mut statement = Statement::new(&sql);
        statement.add_param("id", &id_param);

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to query todo from Spanner")?;

        match result_set.next().await? {
            Some(row) => {
                tracing::debug!("Read todo with id: {}", id);
                Ok(Some(todo_from_row(&row)?))
            }
            None => {
                tracing::debug!("Todo not found with id: {}", id);
                Ok(None)
            }
        }
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        let sql = format!("SELECT {} FROM {}", TODO_COLUMNS.join(", "), TODOS_TABLE);
        let statement = Statement::new(&sql);

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to scan todos from Spanner")?;

        let mut todos = Vec::new();
        while let Some(row) = result_set.next().await? {
            todos.push(todo_from_row(&row)?);
        }

        tracing::debug!("Scanned {} todos", todos.len());
        Ok(todos)
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        let todo = new_todo.into_todo(new_todo_id());

        // Ids are fresh UUIDs, so the write needs no existence check.
        let mutation = insert_or_update(
            TODOS_TABLE,
            &TODO_COLUMNS,
            &[&todo.id, &todo.title, &todo.description],
        );

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to write todo to Spanner")?;

        tracing::debug!("Stored todo with id: {}", todo.id);
        Ok(todo)
    }

    async fn health_check(&self) -> Result<()> {
        let statement = Statement::new("SELECT 1");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create health check transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to execute health check query")?;

        if result_set.next().await?.is_some() {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned no results"))
        }
    }
}

/// Create whichever of the instance, database and todos table is missing.
async fn auto_provision(config: &SpannerConfig) -> Result<()> {
    let admin = AdminClient::new(AdminClientConfig::default())
        .await
        .context("Failed to create Spanner admin client")?;

    if !instance_exists(&admin, config).await? {
        create_instance(&admin, config).await?;
    }
    if !database_exists(&admin, config).await? {
        create_database(&admin, config).await?;
    }
    if !table_exists(&admin, config).await? {
        create_table(&admin, config).await?;
    }

    tracing::debug!("Spanner resources ready under {}", config.database_path());
    Ok(())
}

/// Map an admin lookup to existence: `NotFound` is `false`, other failures
/// are errors.
fn found<T>(lookup: std::result::Result<T, Status>, what: &str) -> Result<bool> {
    match lookup {
        Ok(_) => Ok(true),
        Err(status) if status.code() == Code::NotFound => Ok(false),
        Err(status) => Err(anyhow::anyhow!(
            "Failed to check {} existence: {}",
            what,
            status.message()
        )),
    }
}

async fn instance_exists(admin: &AdminClient, config: &SpannerConfig) -> Result<bool> {
    let request = GetInstanceRequest {
        name: config.instance_path(),
        field_mask: None,
    };
    found(admin.instance().get_instance(request, None).await, "instance")
}

async fn create_instance(admin: &AdminClient, config: &SpannerConfig) -> Result<()> {
    let project_path = config.project_path();
    let instance_config = match config.emulator_host {
        Some(_) => format!("{}/instanceConfigs/emulator-config", project_path),
        None => format!("{}/instanceConfigs/regional-us-central1", project_path),
    };

    tracing::info!("Creating Spanner instance {}", config.instance_path());
    let request = CreateInstanceRequest {
        parent: project_path,
        instance_id: config.instance.clone(),
        instance: Some(Instance {
            name: config.instance_path(),
            config: instance_config,
            display_name: format!("{} instance", config.instance),
            node_count: 1,
            ..Default::default()
        }),
    };

    admin
        .instance()
        .create_instance(request, None)
        .await
        .context("Failed to start instance creation")?
        .wait(None)
        .await
        .context("Failed to create instance")?;
    Ok(())
}

async fn database_exists(admin: &AdminClient, config: &SpannerConfig) -> Result<bool> {
    let request = GetDatabaseRequest {
        name: config.database_path(),
    };
    found(admin.database().get_database(request, None).await, "database")
}

async fn create_database(admin: &AdminClient, config: &SpannerConfig) -> Result<()> {
    tracing::info!("Creating Spanner database {}", config.database_path());
    let request = CreateDatabaseRequest {
        parent: config.instance_path(),
        create_statement: format!("CREATE DATABASE `{}`", config.database),
        extra_statements: vec![],
        encryption_config: None,
        database_dialect: 1, // GoogleSQL
        proto_descriptors: vec![],
    };

    admin
        .database()
        .create_database(request, None)
        .await
        .context("Failed to start database creation")?
        .wait(None)
        .await
        .context("Failed to create database")?;
    Ok(())
}

fn create_table_ddl() -> String {
    format!(
        r#"
CREATE TABLE {} (
    id STRING(36) NOT NULL,
    title STRING(MAX) NOT NULL,
    description STRING(MAX) NOT NULL,
) PRIMARY KEY (id)
"#,
        TODOS_TABLE
    )
    .trim()
    .to_string()
}

fn ddl_has_table(statements: &[String]) -> bool {
    let plain = format!("CREATE TABLE {} ", TODOS_TABLE);
    let quoted = format!("CREATE TABLE `{}`", TODOS_TABLE);
    statements
        .iter()
        .any(|stmt| stmt.starts_with(&plain) || stmt.contains(&quoted))
}

async fn table_exists(admin: &AdminClient, config: &SpannerConfig) -> Result<bool> {
    let request = GetDatabaseDdlRequest {
        database: config.database_path(),
    };
    let ddl = admin
        .database()
        .get_database_ddl(request, None)
        .await
        .context("Failed to get database DDL")?
        .into_inner();
    Ok(ddl_has_table(&ddl.statements))
}

async fn create_table(admin: &AdminClient, config: &SpannerConfig) -> Result<()> {
    tracing::info!("Creating table '{}'", TODOS_TABLE);
    let request = UpdateDatabaseDdlRequest {
        database: config.database_path(),
        statements: vec![create_table_ddl()],
        operation_id: String::new(),
        proto_descriptors: vec![],
        throughput_mode: false,
    };

    admin
        .database()
        .update_database_ddl(request, None)
        .await
        .context("Failed to start table creation")?
        .wait(None)
        .await
        .context("Failed to create table")?;
    Ok(())
}
