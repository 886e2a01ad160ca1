//! ProductType - Category of installable equipment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of device a product represents
///
/// `None` is the unset sentinel and never passes entity validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductType {
    #[default]
    None,
    Router,
    Switch,
    AccessPoint,
    Camera,
    Sensor,
    Controller,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::None => "none",
            ProductType::Router => "router",
            ProductType::Switch => "switch",
            ProductType::AccessPoint => "access_point",
            ProductType::Camera => "camera",
            ProductType::Sensor => "sensor",
            ProductType::Controller => "controller",
        }
    }

    /// Whether a real category has been chosen
    pub fn is_set(&self) -> bool {
        *self != ProductType::None
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
