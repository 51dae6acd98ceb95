use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::ascii::{self, RenderOptions};
use crate::error::ApiError;
use crate::server::AppState;

/// Multipart field carrying the uploaded file.
const IMAGE_FIELD: &str = "image";

/// Multipart field carrying the requested output width.
const WIDTH_FIELD: &str = "width";

/// Response from a conversion
#[derive(Debug, Serialize, Deserialize)]
pub struct AsciiResponse {
    /// Rendered art, rows joined by `\n`, or "Invalid image."
    pub ascii: String,
}

/// Convert an uploaded image to ASCII art
///
/// Expects `multipart/form-data` with a file field `image` and an optional
/// decimal `width` field. An undecodable upload still succeeds, with
/// `"Invalid image."` as the art.
pub async fn handle_ascii(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AsciiResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::Multipart(e.body_text()))?;

    let mut image: Option<Vec<u8>> = None;
    let mut width: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let is_file = field.file_name().is_some();
        match name.as_str() {
            IMAGE_FIELD if is_file => {
                image = Some(field.bytes().await?.to_vec());
            }
            WIDTH_FIELD => {
                width = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let image = image.ok_or(ApiError::NoImage)?;
    let width = parse_width(width.as_deref(), state.options.width, state.max_width)?;
    let options = RenderOptions {
        width,
        ..state.options
    };

    let size = image.len();
    let art = tokio::task::spawn_blocking(move || ascii::convert_with(&image, &options))
        .await
        .map_err(|e| ApiError::Internal(format!("conversion task failed: {e}")))?;

    log::info!(
        "Converted {} byte upload at width {} ({})",
        size,
        width,
        if art == ascii::INVALID_IMAGE { "invalid image" } else { "ok" }
    );

    Ok(Json(AsciiResponse { ascii: art }))
}

/// Validate the `width` form value.
///
/// Missing means `default`. The value must be a positive decimal integer no
/// larger than `max`.
pub fn parse_width(raw: Option<&str>, default: u32, max: u32) -> Result<u32, ApiError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let width: i64 = raw.trim().parse().map_err(|_| ApiError::InvalidWidth)?;
    if width <= 0 {
        return Err(ApiError::InvalidWidth);
    }
    if width > max as i64 {
        return Err(ApiError::WidthTooLarge(max));
    }
    Ok(width as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width_default() {
        assert_eq!(parse_width(None, 100, 500).unwrap(), 100);
    }

    #[test]
    fn test_parse_width_accepts_padded_integer() {
        assert_eq!(parse_width(Some(" 42 "), 100, 500).unwrap(), 42);
        assert_eq!(parse_width(Some("500"), 100, 500).unwrap(), 500);
    }

    #[test]
    fn test_parse_width_rejects_bad_values() {
        assert!(matches!(parse_width(Some("abc"), 100, 500), Err(ApiError::InvalidWidth)));
        assert!(matches!(parse_width(Some("12.5"), 100, 500), Err(ApiError::InvalidWidth)));
        assert!(matches!(parse_width(Some(""), 100, 500), Err(ApiError::InvalidWidth)));
        assert!(matches!(parse_width(Some("0"), 100, 500), Err(ApiError::InvalidWidth)));
        assert!(matches!(parse_width(Some("-5"), 100, 500), Err(ApiError::InvalidWidth)));
    }

    #[test]
    fn test_parse_width_enforces_max() {
        assert!(matches!(
            parse_width(Some("501"), 100, 500),
            Err(ApiError::WidthTooLarge(500))
        ));
    }
}
