//! Response bodies for found resources
//!
//! HTML documents are served as text with two tokens substituted. Images are
//! always decoded and re-encoded into the format named by their extension,
//! even when the file already is in that format.

use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::http::mime::ContentFamily;
use crate::http::resource::ResolvedResource;
use crate::http::response::format_date_in;

/// Replaced by the current date-time in the reference zone.
pub const DATE_TOKEN: &str = "<cs371date>";
/// Replaced by the server identity.
pub const SERVER_TOKEN: &str = "<cs371server>";

/// Offset of the zone `<cs371date>` is rendered in (UTC-07:00).
const REFERENCE_OFFSET_SECS: i32 = 7 * 3600;

pub fn reference_zone() -> FixedOffset {
    FixedOffset::west_opt(REFERENCE_OFFSET_SECS).unwrap_or(Utc.fix())
}

/// Substitutes every occurrence of both tokens in `contents`.
pub fn render_template(contents: &str, now: DateTime<Utc>, identity: &str) -> String {
    let date = format_date_in(now, &reference_zone());
    contents
        .replace(DATE_TOKEN, &date)
        .replace(SERVER_TOKEN, identity)
}

pub async fn render_text(path: &Path, now: DateTime<Utc>, identity: &str) -> anyhow::Result<String> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(render_template(&String::from_utf8_lossy(&raw), now, identity))
}

/// Decodes the image at `path` and encodes it as `format`.
///
/// The source format is sniffed from the file contents, so a PNG saved as
/// `.jpg` still decodes. Blocking; run it off the async workers.
pub fn reencode_image(path: &Path, format: ImageFormat) -> anyhow::Result<Vec<u8>> {
    let img = ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniffing {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?;

    let img = convert_for(img, format);

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format)
        .with_context(|| format!("encoding {} as {:?}", path.display(), format))?;

    Ok(out.into_inner())
}

/// Largest width or height an ICO entry can hold.
const MAX_ICON_SIDE: u32 = 256;

/// Converts pixels into a layout the target encoder accepts.
fn convert_for(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        ImageFormat::Gif => DynamicImage::ImageRgba8(img.to_rgba8()),
        ImageFormat::Ico => {
            let img = if img.width() > MAX_ICON_SIDE || img.height() > MAX_ICON_SIDE {
                img.thumbnail(MAX_ICON_SIDE, MAX_ICON_SIDE)
            } else {
                img
            };
            DynamicImage::ImageRgba8(img.to_rgba8())
        }
        // PNG takes 8- and 16-bit layouts but no float samples (EXR, HDR).
        ImageFormat::Png => match img {
            DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb8(img.to_rgb8()),
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba8(img.to_rgba8()),
            other => other,
        },
        _ => img,
    }
}

/// Produces the body for a found resource.
///
/// Returns `Ok(None)` when the content family has no body.
pub async fn render_body(
    resource: &ResolvedResource,
    now: DateTime<Utc>,
    identity: &str,
) -> anyhow::Result<Option<Vec<u8>>> {
    let Some(path) = resource.fs_path.as_deref() else {
        return Ok(None);
    };

    match resource.family {
        ContentFamily::Html => {
            let text = render_text(path, now, identity).await?;
            Ok(Some(text.into_bytes()))
        }
        family => match family.image_format() {
            Some(format) => {
                let path = path.to_path_buf();
                let bytes = tokio::task::spawn_blocking(move || reencode_image(&path, format))
                    .await
                    .context("image encoding task failed")??;
                Ok(Some(bytes))
            }
            None => Ok(None),
        },
    }
}
