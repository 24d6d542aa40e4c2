use crate::ClientResult;
use crate::commands::common::{UploadOptions, resolve_inputs};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::dashboard;

#[derive(Debug, Clone, Default)]
pub struct DashOptions {
    pub uploads: UploadOptions,
    pub item: Option<String>,
}

pub fn run(options: DashOptions) -> ClientResult<SuccessEnvelope> {
    let inputs = resolve_inputs(&options.uploads, options.item)?;
    let data = dashboard::build(&inputs)?;
    success("dash", data)
}
