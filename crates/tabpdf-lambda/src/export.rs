//! Resolve a dashboard by name, render it, and hand the PDF to storage.

use tracing::info;

use tabpdf_core::models::export::{ExportRequest, SourceKind};
use tabpdf_core::params::FlattenedViewParams;
use tabpdf_core::resolve::{find_view_id, find_workbook_id};
use tabpdf_storage::ObjectSink;
use tabpdf_tableau::DashboardSession;

use crate::error::UnitError;

/// Look up the identifier of the view or workbook called `name`.
///
/// Lists the site afresh on every call.
pub async fn resolve<S: DashboardSession>(
    session: &S,
    kind: SourceKind,
    name: &str,
) -> Result<String, UnitError> {
    info!(kind = %kind, name, "obtaining dashboard id");

    let id = match kind {
        SourceKind::View => find_view_id(&session.list_views().await?, name)?,
        SourceKind::Workbook => find_workbook_id(&session.list_workbooks().await?, name)?,
    };
    Ok(id)
}

/// Render the requested dashboard as PDF and store it. Returns the size of
/// the stored PDF in bytes.
pub async fn export_to_storage<S: DashboardSession, K: ObjectSink>(
    session: &S,
    sink: &K,
    request: &ExportRequest,
    params: &FlattenedViewParams,
) -> Result<usize, UnitError> {
    info!(
        source = %request.source_kind,
        name = %request.source_name,
        "creating pdf"
    );

    let id = resolve(session, request.source_kind, &request.source_name).await?;
    let pdf = match request.source_kind {
        SourceKind::View => session.view_pdf(&id, params).await?,
        SourceKind::Workbook => session.workbook_pdf(&id, params).await?,
    };

    let size = pdf.len();
    sink.store_pdf(&request.bucket, &request.object_key, pdf)
        .await?;
    Ok(size)
}
