use super::Config;
use crate::services::database::DatabaseLayer;
use crate::utils::schemas::all_schemas;

pub async fn setup_database(config: &Config) -> Result<DatabaseLayer, surrealdb::Error> {
    let database_layer = DatabaseLayer::new(
        config.database_url.clone(),
        config.database_user.clone(),
        config.database_pass.clone(),
        config.database_namespace.clone(),
        config.database_name.clone(),
    )
    .await?;

    database_layer.initialize_schemas(all_schemas()).await?;

    Ok(database_layer)
}
