use crate::ClientResult;
use crate::commands::common::{UploadOptions, resolve_inputs};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::dashboard;

pub fn run(uploads: UploadOptions) -> ClientResult<SuccessEnvelope> {
    let inputs = resolve_inputs(&uploads, None)?;
    success("items", dashboard::items(&inputs)?)
}
