//! Database-backed sequence catalog.
//!
//! sea-orm implementation of the [`SequenceRepo`] contract over the
//! `sequences` table.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use seqstat_core::{SequenceEntry, SequenceRepo, TERM_DELIMITER};
use seqstat_entities::sequences;
use tracing::{debug, info};
use uuid::Uuid;

/// Catalog repository over a sea-orm connection.
pub struct DatabaseSequenceRepo {
    /// Database connection for catalog queries and commits
    db: DatabaseConnection,
}

impl DatabaseSequenceRepo {
    /// Connect to the catalog database.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for DatabaseSequenceRepo");
        let db = Database::connect(database_url).await?;
        Ok(Self::new(db))
    }

    /// Wrap an existing connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the database connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn model_to_entry(model: sequences::Model) -> anyhow::Result<SequenceEntry> {
        let data = match model.data {
            Some(value) => Some(serde_json::from_value(value)?),
            None => None,
        };

        Ok(SequenceEntry {
            id: model.id,
            a_id: model.a_id,
            terms: model
                .terms
                .split(TERM_DELIMITER)
                .map(str::to_owned)
                .collect(),
            data,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

#[async_trait]
impl SequenceRepo for DatabaseSequenceRepo {
    async fn query_by_prefix(
        &self,
        pattern: &str,
        limit: u64,
    ) -> anyhow::Result<Vec<SequenceEntry>> {
        let models = sequences::Entity::find()
            .filter(sequences::Column::Terms.like(pattern))
            .limit(limit)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::model_to_entry).collect()
    }

    async fn query_by_a_id(&self, a_id: &str) -> anyhow::Result<Vec<SequenceEntry>> {
        let models = sequences::Entity::find()
            .filter(sequences::Column::AId.eq(a_id))
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::model_to_entry).collect()
    }

    async fn commit(&self, entry: &SequenceEntry) -> anyhow::Result<()> {
        let data = entry.data.as_ref().map(serde_json::to_value).transpose()?;

        let model = sequences::ActiveModel {
            id: Set(entry.id),
            data: Set(data),
            updated_at: Set(entry.updated_at.into()),
            ..Default::default()
        };
        model.update(&self.db).await?;

        debug!("Committed derived data for {}", entry.a_id);
        Ok(())
    }

    async fn upsert(&self, entry: &SequenceEntry) -> anyhow::Result<Uuid> {
        let existing = sequences::Entity::find()
            .filter(sequences::Column::AId.eq(entry.a_id.as_str()))
            .one(&self.db)
            .await?;

        if let Some(model) = existing {
            let id = model.id;
            let active = sequences::ActiveModel {
                id: Set(id),
                terms: Set(entry.canonical_terms()),
                // replaced terms invalidate any stored derived data
                data: Set(None),
                updated_at: Set(Utc::now().into()),
                ..Default::default()
            };
            active.update(&self.db).await?;

            debug!("Replaced terms for existing sequence {}", entry.a_id);
            Ok(id)
        } else {
            let now = Utc::now();
            let active = sequences::ActiveModel {
                id: Set(entry.id),
                a_id: Set(entry.a_id.clone()),
                terms: Set(entry.canonical_terms()),
                data: Set(None),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            };
            let inserted = sequences::Entity::insert(active).exec(&self.db).await?;

            debug!("Inserted new sequence {}", entry.a_id);
            Ok(inserted.last_insert_id)
        }
    }
}
