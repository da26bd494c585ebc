//! # Album Service
//!
//! Use cases for albums.
//!
//! The plain CRUD operations delegate to the album repository. The service
//! also holds a read capability on singers, which is what
//! [`AlbumService::get_album_with_owner`] uses to join an album with its
//! owner. Adding an album does not check that its `singer_id` resolves.
//!
//! The two repositories are locked independently, so a join can observe an
//! album whose owner was deleted a moment earlier. That surfaces as the
//! owner's not found error.

use crate::application::error::ApplicationResult;
use crate::context::RequestContext;
use crate::domain::entities::{Album, AlbumWithOwner};
use crate::domain::value_objects::AlbumId;
use crate::infrastructure::persistence::{AlbumRepository, Repository as _, SingerRepository};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Album use cases, as seen by the transport layer.
#[async_trait]
pub trait AlbumService: Send + Sync + fmt::Debug {
    /// Lists all albums in unspecified order.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    async fn list_albums(&self, ctx: &RequestContext) -> ApplicationResult<Vec<Album>>;

    /// Gets an album by ID.
    ///
    /// # Errors
    ///
    /// Returns a not found error if no album has this id.
    async fn get_album(&self, ctx: &RequestContext, id: AlbumId) -> ApplicationResult<Album>;

    /// Adds an album, replacing any album with the same id.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    async fn add_album(&self, ctx: &RequestContext, album: &Album) -> ApplicationResult<()>;

    /// Deletes an album. Deleting an absent id succeeds.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    async fn delete_album(&self, ctx: &RequestContext, id: AlbumId) -> ApplicationResult<()>;

    /// Gets an album together with the singer that owns it.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the album is absent, or if its
    /// `singer_id` does not resolve to a stored singer.
    async fn get_album_with_owner(
        &self,
        ctx: &RequestContext,
        id: AlbumId,
    ) -> ApplicationResult<AlbumWithOwner>;
}

/// [`AlbumService`] backed by an album repository and a singer repository.
#[derive(Debug, Clone)]
pub struct DefaultAlbumService {
    albums: Arc<dyn AlbumRepository>,
    singers: Arc<dyn SingerRepository>,
}

impl DefaultAlbumService {
    /// Creates a service over the given repositories.
    ///
    /// `singers` is only read, to resolve album owners.
    #[must_use]
    pub fn new(albums: Arc<dyn AlbumRepository>, singers: Arc<dyn SingerRepository>) -> Self {
        Self { albums, singers }
    }
}

#[async_trait]
impl AlbumService for DefaultAlbumService {
    async fn list_albums(&self, ctx: &RequestContext) -> ApplicationResult<Vec<Album>> {
        Ok(self.albums.get_all(ctx).await?)
    }

    async fn get_album(&self, ctx: &RequestContext, id: AlbumId) -> ApplicationResult<Album> {
        Ok(self.albums.get(ctx, id).await?)
    }

    async fn add_album(&self, ctx: &RequestContext, album: &Album) -> ApplicationResult<()> {
        self.albums.add(ctx, album).await?;
        debug!(
            request_id = %ctx.request_id(),
            album_id = %album.id,
            singer_id = %album.singer_id,
            "album stored"
        );
        Ok(())
    }

    async fn delete_album(&self, ctx: &RequestContext, id: AlbumId) -> ApplicationResult<()> {
        let existed = self.albums.delete(ctx, id).await?;
        debug!(request_id = %ctx.request_id(), album_id = %id, existed, "album deleted");
        Ok(())
    }

    async fn get_album_with_owner(
        &self,
        ctx: &RequestContext,
        id: AlbumId,
    ) -> ApplicationResult<AlbumWithOwner> {
        let album = self.albums.get(ctx, id).await?;
        let owner = self.singers.get(ctx, album.singer_id).await?;
        Ok(AlbumWithOwner { album, owner })
    }
}
