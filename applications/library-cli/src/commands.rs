/// Command execution against the library endpoints
use crate::cli::Action;
use soul_web_client::{LibraryKind, RequestContext, WebApiClient};
use std::io::Write;
use tracing::info;

/// Run one library action and write its report to `out`.
///
/// `contains` prints one `id<TAB>true|false` line per ID, in input order.
pub async fn execute<W: Write>(
    client: &WebApiClient,
    ctx: &RequestContext,
    kind: LibraryKind,
    action: &Action,
    out: &mut W,
) -> anyhow::Result<()> {
    let library = client.library();
    let ids = action.ids();

    match action {
        Action::Contains { .. } => {
            let saved = match kind {
                LibraryKind::Tracks => library.user_has_tracks(ctx, ids).await?,
                LibraryKind::Albums => library.user_has_albums(ctx, ids).await?,
            };
            for (id, present) in saved.zip_ids(ids) {
                writeln!(out, "{}\t{}", id, present)?;
            }
        }
        Action::Add { .. } => {
            match kind {
                LibraryKind::Tracks => library.add_tracks_to_library(ctx, ids).await?,
                LibraryKind::Albums => library.add_albums_to_library(ctx, ids).await?,
            }
            info!(kind = %kind, count = ids.len(), "Saved to library");
            writeln!(out, "Saved {} {}", ids.len(), kind)?;
        }
        Action::Remove { .. } => {
            match kind {
                LibraryKind::Tracks => library.remove_tracks_from_library(ctx, ids).await?,
                LibraryKind::Albums => library.remove_albums_from_library(ctx, ids).await?,
            }
            info!(kind = %kind, count = ids.len(), "Removed from library");
            writeln!(out, "Removed {} {}", ids.len(), kind)?;
        }
    }

    Ok(())
}
