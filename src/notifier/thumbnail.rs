use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::info;

use crate::errors::GateError;

/// Fixed thumbnail height; width scales proportionally.
pub const THUMBNAIL_HEIGHT: u32 = 400;
const JPEG_QUALITY: u8 = 90;

/// Derive the thumbnail key from an object key by replacing its extension
/// with `_small.jpg`. A dot inside a directory component is not an
/// extension.
pub fn thumbnail_key(key: &str) -> String {
    match key.rfind('.') {
        Some(dot) if !key[dot..].contains('/') => format!("{}_small.jpg", &key[..dot]),
        _ => format!("{}_small.jpg", key),
    }
}

/// Resize an encoded image to [`THUMBNAIL_HEIGHT`] (linear filter) and
/// re-encode it as JPEG.
pub fn shrink(bytes: &[u8]) -> Result<Vec<u8>, GateError> {
    let img = image::load_from_memory(bytes)?;

    let (width, height) = (img.width(), img.height());
    let scaled_width =
        (u64::from(width) * u64::from(THUMBNAIL_HEIGHT) / u64::from(height.max(1))) as u32;
    let resized = img.resize_exact(scaled_width.max(1), THUMBNAIL_HEIGHT, FilterType::Triangle);

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    resized.write_with_encoder(encoder)?;
    Ok(buf)
}

/// Download `key`, resize it, and upload the result under `out_key` with a
/// public-read ACL and `image/jpeg` content type.
pub async fn generate(
    s3: &S3Client,
    bucket: &str,
    key: &str,
    out_key: &str,
) -> Result<(), GateError> {
    info!("s3 GET object {}/{}", bucket, key);
    let resp = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| GateError::Storage(format!("Failed to get {}: {}", key, e)))?;
    let bytes = resp
        .body
        .collect()
        .await
        .map_err(|e| GateError::Storage(format!("Failed to read body of {}: {}", key, e)))?
        .into_bytes()
        .to_vec();

    let jpeg = shrink(&bytes)?;

    info!("Uploading thumbnail {}/{}", bucket, out_key);
    s3.put_object()
        .bucket(bucket)
        .key(out_key)
        .body(ByteStream::from(jpeg))
        .acl(ObjectCannedAcl::PublicRead)
        .content_type("image/jpeg")
        .send()
        .await
        .map_err(|e| GateError::Storage(format!("Failed to put {}: {}", out_key, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks::{mock, mock_client};
    use image::{DynamicImage, RgbImage};

    fn sample_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 80, 40]),
        ));
        let mut buf = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buf, 90);
        img.write_with_encoder(encoder).unwrap();
        buf
    }

    #[test]
    fn shrink_scales_to_fixed_height() {
        let jpeg = shrink(&sample_jpeg(100, 200)).unwrap();
        let out = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(out.height(), THUMBNAIL_HEIGHT);
        assert_eq!(out.width(), 200);
    }

    #[test]
    fn shrink_rejects_garbage() {
        assert!(shrink(b"not an image").is_err());
    }

    #[tokio::test]
    async fn generate_downloads_resizes_and_uploads() {
        let jpeg = sample_jpeg(80, 80);
        let get_rule = mock!(aws_sdk_s3::Client::get_object).then_output(move || {
            GetObjectOutput::builder()
                .body(ByteStream::from(jpeg.clone()))
                .build()
        });
        let put_rule =
            mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, [&get_rule, &put_rule]);

        generate(&s3, "gate-images", "detected/alice/x.jpg", "detected/alice/x_small.jpg")
            .await
            .unwrap();

        assert_eq!(get_rule.num_calls(), 1);
        assert_eq!(put_rule.num_calls(), 1);
    }
}
