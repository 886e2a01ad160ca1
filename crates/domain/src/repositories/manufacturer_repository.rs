//! ManufacturerRepository - Storage contract for manufacturers

use crate::entities::Manufacturer;
use crate::errors::DomainResult;

pub trait ManufacturerRepository: Send + Sync {
    fn list(&self) -> DomainResult<Option<Vec<Manufacturer>>>;

    fn get_by_id(&self, id: &str) -> DomainResult<Option<Manufacturer>>;

    fn get_by_name(&self, name: &str) -> DomainResult<Option<Manufacturer>>;

    /// Lookup by any name the manufacturer carried before a rename
    fn get_by_former_name(&self, name: &str) -> DomainResult<Option<Manufacturer>>;

    fn add(&self, manufacturer: Manufacturer) -> DomainResult<()>;

    fn update(&self, manufacturer: Manufacturer) -> DomainResult<()>;

    fn delete(&self, id: &str) -> DomainResult<()>;
}
