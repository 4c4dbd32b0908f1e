use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use social_core::domain::Validate;
use social_core::error::RepoError;
use social_core::ports::BaseRepository;

use super::entity::MappedEntity;

/// Generic sea-orm repository implementation.
pub struct SeaBaseRepository<E>
where
    E: EntityTrait,
{
    db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SeaBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) fn conn(&self) -> &DbConn {
        &self.db
    }
}

impl<E> Clone for SeaBaseRepository<E>
where
    E: EntityTrait,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

/// Translate a driver error, surfacing constraint failures separately.
pub(crate) fn map_db_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    let lower = err_str.to_lowercase();
    if lower.contains("duplicate") || lower.contains("unique") || lower.contains("foreign key") {
        RepoError::Constraint(err_str)
    } else if matches!(e, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
        RepoError::Connection(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl<E> BaseRepository<E::Record, E::Draft> for SeaBaseRepository<E>
where
    E: MappedEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<E::Record>, RepoError> {
        let result = E::find_by_id(id).one(self.conn()).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<E::Record>, RepoError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        let result = query.all(self.conn()).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: E::Draft) -> Result<E::Record, RepoError> {
        draft.validate()?;

        let active_model: E::ActiveModel = draft.into();
        let model = active_model.insert(self.conn()).await.map_err(map_db_err)?;
        tracing::debug!(entity = %E::KIND, "Created record");

        Ok(model.into())
    }

    async fn bulk_create(&self, drafts: Vec<E::Draft>) -> Result<u64, RepoError> {
        // Reject the whole batch before anything is written.
        for (index, draft) in drafts.iter().enumerate() {
            draft.validate().map_err(|e| {
                RepoError::Validation(format!("{} record #{index}: {e}", E::KIND))
            })?;
        }

        if drafts.is_empty() {
            return Ok(0);
        }

        let models: Vec<E::ActiveModel> = drafts.into_iter().map(Into::into).collect();
        let inserted = E::insert_many(models)
            .exec_without_returning(self.conn())
            .await
            .map_err(map_db_err)?;
        tracing::debug!(entity = %E::KIND, inserted, "Bulk insert finished");

        Ok(inserted)
    }

    async fn update(&self, entity: E::Record) -> Result<E::Record, RepoError> {
        entity.validate()?;

        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(self.conn()).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
