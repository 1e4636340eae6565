//! App Data

use crate::domain::{
    apps::records::AppUuid,
    validation::{ValidationError, identifier, non_blank, required, supplied},
};

/// Unvalidated app registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppInput {
    pub app_name: Option<String>,
}

/// New App Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApp {
    pub name: String,
}

impl TryFrom<AppInput> for NewApp {
    type Error = ValidationError;

    fn try_from(input: AppInput) -> Result<Self, Self::Error> {
        let name = non_blank("app_name", required("app_name", input.app_name)?)?;

        Ok(Self { name })
    }
}

/// Unvalidated app update input. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppChanges {
    pub app_name: Option<String>,
    pub is_active: Option<bool>,
}

/// App Update Data
///
/// An update with neither field set is accepted and leaves the app unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppUpdate {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl AppUpdate {
    /// Deactivation only.
    #[must_use]
    pub fn deactivate() -> Self {
        Self {
            name: None,
            is_active: Some(false),
        }
    }
}

impl TryFrom<AppChanges> for AppUpdate {
    type Error = ValidationError;

    fn try_from(changes: AppChanges) -> Result<Self, Self::Error> {
        let name = changes
            .app_name
            .map(|name| non_blank("app_name", name))
            .transpose()?;

        Ok(Self {
            name,
            is_active: changes.is_active,
        })
    }
}

/// Unvalidated app list criteria, as received from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppFilterInput {
    pub app_id: Option<String>,
    pub app_name: Option<String>,
}

/// App list criteria. `app_id` matches exactly, `name` matches any substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppFilter {
    pub app: Option<AppUuid>,
    pub name: Option<String>,
}

impl AppFilter {
    /// Whether any criterion narrows the result set.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.app.is_some() || self.name.is_some()
    }
}

impl TryFrom<AppFilterInput> for AppFilter {
    type Error = ValidationError;

    fn try_from(input: AppFilterInput) -> Result<Self, Self::Error> {
        let app = supplied(input.app_id)
            .map(|value| identifier::<AppUuid>("app_id", &value))
            .transpose()?;

        Ok(Self {
            app,
            name: supplied(input.app_name),
        })
    }
}
