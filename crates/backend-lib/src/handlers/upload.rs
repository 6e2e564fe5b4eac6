//! Media upload, reachable only through the session gate.
use axum::{
    extract::{Multipart, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use mediagate_common::UPLOAD_FIELD;
use metrics::counter;
use tracing::{info, warn};

use crate::error::AppError;
use crate::metrics::UPLOAD_BYTES;
use crate::AppState;

/// `POST /api/v1/upload`
///
/// Streams the `videoFile` part to the media directory under a
/// timestamp-derived name. Other parts are skipped.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().map(str::to_owned);
        info!(
            file_name = ?original_name,
            content_type = ?field.content_type(),
            "Receiving upload"
        );

        let mut writer = state.storage.begin_upload(original_name.as_deref()).await?;
        loop {
            match field.chunk().await {
                Ok(Some(chunk)) => {
                    if let Err(e) = writer.write_chunk(&chunk).await {
                        writer.discard().await;
                        return Err(e);
                    }
                },
                Ok(None) => break,
                Err(e) => {
                    writer.discard().await;
                    return Err(e.into());
                },
            }
        }

        let (path, size) = writer.finish().await?;
        counter!(UPLOAD_BYTES).increment(size);
        info!(path = %path.display(), size, "File uploaded");

        return Ok(([(CONTENT_TYPE, "text/plain")], "File uploaded!").into_response());
    }

    warn!("error retrieving file: no {UPLOAD_FIELD} field");
    Err(AppError::NotFound(UPLOAD_FIELD.to_string()))
}
