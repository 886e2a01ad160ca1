//! ManufacturerService - Business rules for device manufacturers

use std::sync::Arc;
use tracing::{debug, info};

use super::{rejected, require_found, require_list, to_json};
use crate::entities::{Manufacturer, Validate};
use crate::errors::DomainResult;
use crate::repositories::ManufacturerRepository;
use crate::validation::{check_id_argument, check_present_argument, is_guid};

pub trait ManufacturerServiceTrait: Send + Sync {
    fn list_all(&self) -> DomainResult<Vec<Manufacturer>>;

    /// Lookup by id, then by current name, then by either former name
    fn get_by_data(&self, data: &str) -> DomainResult<Manufacturer>;

    fn insert(&self, manufacturer: Manufacturer) -> DomainResult<()>;

    /// Rename keeps the replaced name as the most recent former name
    fn update(&self, manufacturer: Manufacturer) -> DomainResult<()>;

    fn delete(&self, id: &str) -> DomainResult<()>;
}

pub struct ManufacturerService<R>
where
    R: ManufacturerRepository,
{
    repository: Arc<R>,
}

impl<R> ManufacturerService<R>
where
    R: ManufacturerRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ManufacturerServiceTrait for ManufacturerService<R>
where
    R: ManufacturerRepository,
{
    fn list_all(&self) -> DomainResult<Vec<Manufacturer>> {
        info!("list_all");
        require_list(self.repository.list()?)
    }

    fn get_by_data(&self, data: &str) -> DomainResult<Manufacturer> {
        info!(data, "get_by_data");
        check_present_argument(data, "data").map_err(rejected)?;
        if is_guid(data) {
            return require_found(self.repository.get_by_id(data)?, data);
        }
        if let Some(manufacturer) = self.repository.get_by_name(data)? {
            return Ok(manufacturer);
        }
        debug!(data, "No current name matched, trying former names");
        require_found(self.repository.get_by_former_name(data)?, data)
    }

    fn insert(&self, manufacturer: Manufacturer) -> DomainResult<()> {
        info!(manufacturer = %to_json(&manufacturer), "insert");
        manufacturer.validate().map_err(rejected)?;
        self.repository.add(manufacturer)
    }

    fn update(&self, manufacturer: Manufacturer) -> DomainResult<()> {
        info!(manufacturer = %to_json(&manufacturer), "update");
        manufacturer.validate().map_err(rejected)?;
        let current = require_found(
            self.repository.get_by_id(manufacturer.id())?,
            manufacturer.id(),
        )?;
        self.repository.update(current.renamed(manufacturer.name()))
    }

    fn delete(&self, id: &str) -> DomainResult<()> {
        info!(id, "delete");
        check_id_argument(id, "id").map_err(rejected)?;
        self.repository.delete(id)
    }
}
