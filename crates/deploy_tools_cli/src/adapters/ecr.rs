use aws_sdk_ecr::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ecr::operation::create_repository::CreateRepositoryError;
use aws_sdk_ecr::operation::describe_repositories::DescribeRepositoriesError;
use aws_sdk_ecr::types::{EncryptionConfiguration, EncryptionType, ImageScanningConfiguration};
use deploy_tools_core::registry::{
    EncryptionMode, RegistryError, RepositoryRegistry, RepositorySettings,
};

use super::block_on;

pub struct EcrRegistry {
    client: aws_sdk_ecr::Client,
}

impl EcrRegistry {
    pub fn new(client: aws_sdk_ecr::Client) -> Self {
        Self { client }
    }
}

fn encryption_type(mode: EncryptionMode) -> EncryptionType {
    match mode {
        EncryptionMode::Aes256 => EncryptionType::Aes256,
    }
}

fn classify<E: ProvideErrorMetadata + std::error::Error>(error: &E) -> RegistryError {
    RegistryError::from_error_code(error.code(), DisplayErrorContext(error).to_string())
}

fn classify_describe(error: DescribeRepositoriesError) -> RegistryError {
    if error.is_repository_not_found_exception() {
        return RegistryError::NotFound;
    }
    classify(&error)
}

fn classify_create(error: CreateRepositoryError) -> RegistryError {
    let message = DisplayErrorContext(&error).to_string();
    if error.is_repository_already_exists_exception() {
        RegistryError::AlreadyExists(message)
    } else if error.is_invalid_parameter_exception()
        || error.is_invalid_tag_parameter_exception()
        || error.is_too_many_tags_exception()
    {
        RegistryError::InvalidRequest(message)
    } else {
        classify(&error)
    }
}

impl RepositoryRegistry for EcrRegistry {
    fn describe_repository(&self, name: &str) -> Result<String, RegistryError> {
        let client = self.client.clone();
        let repository_name = name.to_string();

        block_on(async move {
            let output = client
                .describe_repositories()
                .repository_names(repository_name.clone())
                .send()
                .await
                .map_err(|error| classify_describe(error.into_service_error()))?;

            output
                .repositories()
                .iter()
                .find(|repository| repository.repository_name() == Some(repository_name.as_str()))
                .and_then(|repository| repository.repository_uri())
                .map(str::to_string)
                .ok_or_else(|| {
                    RegistryError::Other(format!(
                        "describe response for '{repository_name}' has no repository uri"
                    ))
                })
        })
    }

    fn create_repository(
        &self,
        name: &str,
        settings: &RepositorySettings,
    ) -> Result<String, RegistryError> {
        let client = self.client.clone();
        let repository_name = name.to_string();
        let scanning = ImageScanningConfiguration::builder()
            .scan_on_push(settings.scan_on_push)
            .build();
        let encryption = EncryptionConfiguration::builder()
            .encryption_type(encryption_type(settings.encryption))
            .build()
            .map_err(|error| {
                RegistryError::InvalidRequest(format!("invalid encryption configuration: {error}"))
            })?;

        block_on(async move {
            let output = client
                .create_repository()
                .repository_name(repository_name.clone())
                .image_scanning_configuration(scanning)
                .encryption_configuration(encryption)
                .send()
                .await
                .map_err(|error| classify_create(error.into_service_error()))?;

            output
                .repository()
                .and_then(|repository| repository.repository_uri())
                .map(str::to_string)
                .ok_or_else(|| {
                    RegistryError::Other(format!(
                        "create response for '{repository_name}' has no repository uri"
                    ))
                })
        })
    }
}
