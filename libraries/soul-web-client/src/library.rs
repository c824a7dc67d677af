//! User library ("Your Music") operations.

use crate::client::WebApiClient;
use crate::context::RequestContext;
use crate::error::{Result, WebClientError};
use crate::types::{ContainsResult, LibraryKind};
use reqwest::Method;
use tracing::debug;

/// Library client for saved tracks and albums.
///
/// Every call makes exactly one request. IDs are sent in the order given and
/// contains checks answer in that same order.
pub struct LibraryClient<'a> {
    api: &'a WebApiClient,
}

impl<'a> LibraryClient<'a> {
    pub(crate) fn new(api: &'a WebApiClient) -> Self {
        Self { api }
    }

    /// Check whether each track is saved in the current user's library.
    pub async fn user_has_tracks<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[I],
    ) -> Result<ContainsResult> {
        self.contains(ctx, LibraryKind::Tracks, ids).await
    }

    /// Save tracks to the current user's library.
    pub async fn add_tracks_to_library<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[I],
    ) -> Result<()> {
        self.save(ctx, LibraryKind::Tracks, ids).await
    }

    /// Remove tracks from the current user's library.
    pub async fn remove_tracks_from_library<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[I],
    ) -> Result<()> {
        self.remove(ctx, LibraryKind::Tracks, ids).await
    }

    /// Check whether each album is saved in the current user's library.
    pub async fn user_has_albums<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[I],
    ) -> Result<ContainsResult> {
        self.contains(ctx, LibraryKind::Albums, ids).await
    }

    /// Save albums to the current user's library.
    pub async fn add_albums_to_library<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[I],
    ) -> Result<()> {
        self.save(ctx, LibraryKind::Albums, ids).await
    }

    /// Remove albums from the current user's library.
    pub async fn remove_albums_from_library<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        ids: &[I],
    ) -> Result<()> {
        self.remove(ctx, LibraryKind::Albums, ids).await
    }

    /// Membership check against either collection.
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the call
    /// * `kind` - Which collection to check
    /// * `ids` - Catalog IDs, sent as `?ids=id0,id1,...`
    ///
    /// # Returns
    /// One flag per ID, in input order.
    pub async fn contains<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        kind: LibraryKind,
        ids: &[I],
    ) -> Result<ContainsResult> {
        let ids = collect_ids(ids)?;
        debug!(kind = %kind, ids = ids.len(), "Checking library");

        let flags: Vec<bool> = self
            .api
            .get_json(ctx, kind.contains_path(), &[("ids", ids.join(","))])
            .await?;

        if flags.len() != ids.len() {
            return Err(WebClientError::LengthMismatch {
                expected: ids.len(),
                actual: flags.len(),
            });
        }

        Ok(ContainsResult::new(flags))
    }

    /// Save IDs to either collection.
    pub async fn save<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        kind: LibraryKind,
        ids: &[I],
    ) -> Result<()> {
        self.modify(ctx, Method::PUT, kind, ids).await
    }

    /// Remove IDs from either collection.
    pub async fn remove<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        kind: LibraryKind,
        ids: &[I],
    ) -> Result<()> {
        self.modify(ctx, Method::DELETE, kind, ids).await
    }

    async fn modify<I: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        method: Method,
        kind: LibraryKind,
        ids: &[I],
    ) -> Result<()> {
        let ids = collect_ids(ids)?;
        self.api.send_ids(ctx, method.clone(), kind.path(), &ids).await?;

        debug!(method = %method, kind = %kind, ids = ids.len(), "Library updated");
        Ok(())
    }
}

/// Borrow IDs as `&str`, rejecting an empty list or an empty ID.
fn collect_ids<I: AsRef<str>>(ids: &[I]) -> Result<Vec<&str>> {
    if ids.is_empty() {
        return Err(WebClientError::InvalidRequest("no IDs supplied".into()));
    }

    ids.iter()
        .enumerate()
        .map(|(index, id)| {
            let id = id.as_ref();
            if id.is_empty() {
                Err(WebClientError::InvalidRequest(format!(
                    "ID at position {} is empty",
                    index
                )))
            } else {
                Ok(id)
            }
        })
        .collect()
}
