//! # Singer Service
//!
//! Use cases for singers. Every operation delegates to the injected
//! [`SingerRepository`] and returns its errors unchanged.

use crate::application::error::ApplicationResult;
use crate::context::RequestContext;
use crate::domain::entities::Singer;
use crate::domain::value_objects::SingerId;
use crate::infrastructure::persistence::{Repository as _, SingerRepository};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Singer use cases, as seen by the transport layer.
#[async_trait]
pub trait SingerService: Send + Sync + fmt::Debug {
    /// Lists all singers in unspecified order.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    async fn list_singers(&self, ctx: &RequestContext) -> ApplicationResult<Vec<Singer>>;

    /// Gets a singer by ID.
    ///
    /// # Errors
    ///
    /// Returns a not found error if no singer has this id.
    async fn get_singer(&self, ctx: &RequestContext, id: SingerId) -> ApplicationResult<Singer>;

    /// Adds a singer, replacing any singer with the same id.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    async fn add_singer(&self, ctx: &RequestContext, singer: &Singer) -> ApplicationResult<()>;

    /// Deletes a singer. Deleting an absent id succeeds.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    async fn delete_singer(&self, ctx: &RequestContext, id: SingerId) -> ApplicationResult<()>;
}

/// [`SingerService`] backed by any [`SingerRepository`].
#[derive(Debug, Clone)]
pub struct DefaultSingerService {
    repository: Arc<dyn SingerRepository>,
}

impl DefaultSingerService {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn SingerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SingerService for DefaultSingerService {
    async fn list_singers(&self, ctx: &RequestContext) -> ApplicationResult<Vec<Singer>> {
        Ok(self.repository.get_all(ctx).await?)
    }

    async fn get_singer(&self, ctx: &RequestContext, id: SingerId) -> ApplicationResult<Singer> {
        Ok(self.repository.get(ctx, id).await?)
    }

    async fn add_singer(&self, ctx: &RequestContext, singer: &Singer) -> ApplicationResult<()> {
        self.repository.add(ctx, singer).await?;
        debug!(request_id = %ctx.request_id(), singer_id = %singer.id, "singer stored");
        Ok(())
    }

    async fn delete_singer(&self, ctx: &RequestContext, id: SingerId) -> ApplicationResult<()> {
        let existed = self.repository.delete(ctx, id).await?;
        debug!(request_id = %ctx.request_id(), singer_id = %id, existed, "singer deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::infrastructure::persistence::in_memory::InMemorySingerRepository;
    use crate::infrastructure::persistence::{Repository, RepositoryError, RepositoryResult};

    #[derive(Debug)]
    struct UnavailableRepository;

    #[async_trait]
    impl Repository<Singer> for UnavailableRepository {
        async fn get_all(&self, _ctx: &RequestContext) -> RepositoryResult<Vec<Singer>> {
            Err(RepositoryError::connection("store offline"))
        }

        async fn get(&self, _ctx: &RequestContext, _id: SingerId) -> RepositoryResult<Singer> {
            Err(RepositoryError::connection("store offline"))
        }

        async fn add(&self, _ctx: &RequestContext, _singer: &Singer) -> RepositoryResult<()> {
            Err(RepositoryError::query("constraint violated"))
        }

        async fn delete(&self, _ctx: &RequestContext, _id: SingerId) -> RepositoryResult<bool> {
            Err(RepositoryError::connection("store offline"))
        }
    }

    fn seeded_service() -> DefaultSingerService {
        DefaultSingerService::new(Arc::new(InMemorySingerRepository::seeded()))
    }

    #[tokio::test]
    async fn lists_bootstrap_singers() {
        let service = seeded_service();
        let singers = service.list_singers(&RequestContext::new()).await.unwrap();
        assert_eq!(singers.len(), 5);
    }

    #[tokio::test]
    async fn add_then_get() {
        let service = seeded_service();
        let ctx = RequestContext::new();
        let singer = Singer::new(SingerId::new(6), "Fiona");

        service.add_singer(&ctx, &singer).await.unwrap();
        assert_eq!(service.get_singer(&ctx, SingerId::new(6)).await.unwrap(), singer);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = seeded_service();
        let ctx = RequestContext::new();

        service.delete_singer(&ctx, SingerId::new(2)).await.unwrap();
        service.delete_singer(&ctx, SingerId::new(2)).await.unwrap();

        let err = service.get_singer(&ctx, SingerId::new(2)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn repository_errors_pass_through() {
        let service = DefaultSingerService::new(Arc::new(UnavailableRepository));
        let ctx = RequestContext::new();

        let err = service.list_singers(&ctx).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Repository(RepositoryError::Connection(_))
        ));
        assert_eq!(err.to_string(), "Connection error: store offline");

        let err = service
            .add_singer(&ctx, &Singer::new(SingerId::new(1), "Alice"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Query error: constraint violated");

        assert!(service.delete_singer(&ctx, SingerId::new(1)).await.is_err());
        assert!(!service
            .get_singer(&ctx, SingerId::new(1))
            .await
            .unwrap_err()
            .is_not_found());
    }
}
