use mindwell_flows::model::BedrockModel;

use crate::config::{CredentialSource, MindwellConfig};

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(
                aws_sdk_bedrockruntime::config::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "mindwell-config",
                ),
            );
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// The model every flow command talks to.
pub async fn bedrock_model(config: &MindwellConfig) -> BedrockModel {
    let sdk_config = build_aws_config(&config.region, &config.credentials).await;
    tracing::debug!(region = %config.region, model = %config.model_id, "bedrock client ready");
    BedrockModel::new(&sdk_config, config.model_id.clone())
}
