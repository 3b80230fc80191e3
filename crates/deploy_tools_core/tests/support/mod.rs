#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use deploy_tools_core::identity::{IdentityError, IdentityProvider};
use deploy_tools_core::registry::{RegistryError, RepositoryRegistry, RepositorySettings};
use tempfile::NamedTempFile;

pub const ACCOUNT_ID: &str = "123456789012";

pub fn repository_uri(name: &str) -> String {
    format!("{ACCOUNT_ID}.dkr.ecr.us-east-1.amazonaws.com/{name}")
}

pub fn mapping_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp mapping file should be created");
    file.write_all(contents.as_bytes())
        .expect("mapping contents should be written");
    file
}

/// Identity provider that counts calls and returns a fixed result.
pub struct FakeIdentity {
    result: Result<String, IdentityError>,
    pub calls: Cell<usize>,
}

impl FakeIdentity {
    pub fn valid() -> Self {
        Self {
            result: Ok(ACCOUNT_ID.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(IdentityError::new(message)),
            calls: Cell::new(0),
        }
    }
}

impl IdentityProvider for FakeIdentity {
    fn caller_account_id(&self) -> Result<String, IdentityError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

/// In-memory registry with injectable per-name failures and call counters.
#[derive(Default)]
pub struct FakeRegistry {
    repositories: RefCell<BTreeMap<String, String>>,
    describe_failures: BTreeMap<String, RegistryError>,
    create_failures: BTreeMap<String, RegistryError>,
    pub describe_calls: Cell<usize>,
    pub created: RefCell<Vec<(String, RepositorySettings)>>,
}

impl FakeRegistry {
    pub fn with_existing(names: &[&str]) -> Self {
        let registry = Self::default();
        for name in names {
            registry
                .repositories
                .borrow_mut()
                .insert(name.to_string(), repository_uri(name));
        }
        registry
    }

    pub fn fail_describe(mut self, name: &str, error: RegistryError) -> Self {
        self.describe_failures.insert(name.to_string(), error);
        self
    }

    pub fn fail_create(mut self, name: &str, error: RegistryError) -> Self {
        self.create_failures.insert(name.to_string(), error);
        self
    }

    pub fn created_names(&self) -> BTreeSet<String> {
        self.created
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.describe_calls.get() + self.created.borrow().len()
    }
}

impl RepositoryRegistry for FakeRegistry {
    fn describe_repository(&self, name: &str) -> Result<String, RegistryError> {
        self.describe_calls.set(self.describe_calls.get() + 1);
        if let Some(error) = self.describe_failures.get(name) {
            return Err(error.clone());
        }
        self.repositories
            .borrow()
            .get(name)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    fn create_repository(
        &self,
        name: &str,
        settings: &RepositorySettings,
    ) -> Result<String, RegistryError> {
        self.created
            .borrow_mut()
            .push((name.to_string(), *settings));
        if let Some(error) = self.create_failures.get(name) {
            return Err(error.clone());
        }
        let uri = repository_uri(name);
        self.repositories
            .borrow_mut()
            .insert(name.to_string(), uri.clone());
        Ok(uri)
    }
}
