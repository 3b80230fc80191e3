use aws_sdk_sts::error::DisplayErrorContext;
use deploy_tools_core::identity::{IdentityError, IdentityProvider};

use super::block_on;

pub struct StsIdentity {
    client: aws_sdk_sts::Client,
}

impl StsIdentity {
    pub fn new(client: aws_sdk_sts::Client) -> Self {
        Self { client }
    }
}

impl IdentityProvider for StsIdentity {
    fn caller_account_id(&self) -> Result<String, IdentityError> {
        let client = self.client.clone();

        block_on(async move {
            let output = client
                .get_caller_identity()
                .send()
                .await
                .map_err(|error| IdentityError::new(DisplayErrorContext(&error).to_string()))?;

            output
                .account()
                .map(str::to_string)
                .ok_or_else(|| IdentityError::new("caller identity response has no account id"))
        })
    }
}
