use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::types::ObjectCannedAcl;
use tracing::info;

use crate::errors::GateError;

/// Move an object within `bucket` by copying it to `to` (public-read) and
/// deleting `from`. The pair is best-effort rather than transactional: S3's
/// delete is idempotent, so a retried invocation that already copied will
/// converge instead of failing, but a copy that succeeds before a delete
/// error leaves both keys in place for the trigger's retry.
pub async fn move_object(
    s3: &S3Client,
    bucket: &str,
    from: &str,
    to: &str,
) -> Result<(), GateError> {
    info!("Copying s3 object {}/{} to {}/{}", bucket, from, bucket, to);
    s3.copy_object()
        .copy_source(format!("{}/{}", bucket, from))
        .bucket(bucket)
        .key(to)
        .acl(ObjectCannedAcl::PublicRead)
        .send()
        .await
        .map_err(|e| GateError::Storage(format!("Failed to copy {} to {}: {}", from, to, e)))?;

    info!("Discarding s3 object {}/{}", bucket, from);
    s3.delete_object()
        .bucket(bucket)
        .key(from)
        .send()
        .await
        .map_err(|e| GateError::Storage(format!("Failed to delete {}: {}", from, e)))?;

    Ok(())
}
