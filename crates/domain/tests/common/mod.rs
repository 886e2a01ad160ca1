//! Shared fixtures for service tests: storage mocks and valid entities
#![allow(dead_code)]

use chrono::{Duration, Utc};
use domain::{
    DomainResult, Install, InstallFilter, InstallRepository, Manufacturer,
    ManufacturerRepository, Post, PostRepository, PostType, Product, ProductPriceHistory,
    ProductRepository, ProductType, Request, RequestFilter, RequestLineItem, RequestRepository,
    Salary, SalaryFilter, SalaryRepository, Worker, WorkerFilter, WorkerRepository,
};
use once_cell::sync::Lazy;
use uuid::Uuid;

static INIT_TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&INIT_TRACING);
}

mockall::mock! {
    pub InstallStorage {}

    impl InstallRepository for InstallStorage {
        fn list(&self, filter: InstallFilter) -> DomainResult<Option<Vec<Install>>>;
        fn get_by_id(&self, id: &str) -> DomainResult<Option<Install>>;
        fn add(&self, install: Install) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub RequestStorage {}

    impl RequestRepository for RequestStorage {
        fn list(&self, filter: RequestFilter) -> DomainResult<Option<Vec<Request>>>;
        fn get_by_id(&self, id: &str) -> DomainResult<Option<Request>>;
        fn add(&self, request: Request) -> DomainResult<()>;
        fn delete(&self, id: &str) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub ProductStorage {}

    impl ProductRepository for ProductStorage {
        fn list(
            &self,
            only_active: bool,
            manufacturer_id: Option<String>,
        ) -> DomainResult<Option<Vec<Product>>>;
        fn list_history(&self, product_id: &str) -> DomainResult<Option<Vec<ProductPriceHistory>>>;
        fn get_by_id(&self, id: &str) -> DomainResult<Option<Product>>;
        fn get_by_name(&self, name: &str) -> DomainResult<Option<Product>>;
        fn add(&self, product: Product) -> DomainResult<()>;
        fn update(&self, product: Product) -> DomainResult<()>;
        fn delete(&self, id: &str) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub WorkerStorage {}

    impl WorkerRepository for WorkerStorage {
        fn list(&self, filter: WorkerFilter) -> DomainResult<Option<Vec<Worker>>>;
        fn get_by_id(&self, id: &str) -> DomainResult<Option<Worker>>;
        fn get_by_name(&self, full_name: &str) -> DomainResult<Option<Worker>>;
        fn get_by_email(&self, email: &str) -> DomainResult<Option<Worker>>;
        fn add(&self, worker: Worker) -> DomainResult<()>;
        fn update(&self, worker: Worker) -> DomainResult<()>;
        fn delete(&self, id: &str) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub PostStorage {}

    impl PostRepository for PostStorage {
        fn list(&self) -> DomainResult<Option<Vec<Post>>>;
        fn list_history(&self, post_id: &str) -> DomainResult<Option<Vec<Post>>>;
        fn get_by_id(&self, id: &str) -> DomainResult<Option<Post>>;
        fn get_by_name(&self, name: &str) -> DomainResult<Option<Post>>;
        fn add(&self, post: Post) -> DomainResult<()>;
        fn update(&self, post: Post) -> DomainResult<()>;
        fn delete(&self, id: &str) -> DomainResult<()>;
        fn restore(&self, id: &str) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub ManufacturerStorage {}

    impl ManufacturerRepository for ManufacturerStorage {
        fn list(&self) -> DomainResult<Option<Vec<Manufacturer>>>;
        fn get_by_id(&self, id: &str) -> DomainResult<Option<Manufacturer>>;
        fn get_by_name(&self, name: &str) -> DomainResult<Option<Manufacturer>>;
        fn get_by_former_name(&self, name: &str) -> DomainResult<Option<Manufacturer>>;
        fn add(&self, manufacturer: Manufacturer) -> DomainResult<()>;
        fn update(&self, manufacturer: Manufacturer) -> DomainResult<()>;
        fn delete(&self, id: &str) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub SalaryStorage {}

    impl SalaryRepository for SalaryStorage {
        fn list(&self, filter: SalaryFilter) -> DomainResult<Option<Vec<Salary>>>;
        fn add(&self, salary: Salary) -> DomainResult<()>;
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn install(worker_id: &str, install_price: f64) -> Install {
    Install::new(new_id(), new_id(), worker_id, 1500.0, install_price)
}

pub fn request(line_count: usize) -> Request {
    let id = new_id();
    let line_items = (0..line_count)
        .map(|_| RequestLineItem::new(&id, new_id(), 100.0, 10.0))
        .collect();
    Request::new(id, false, line_items)
}

pub fn product(name: &str) -> Product {
    Product::new(new_id(), name, ProductType::Router, new_id(), 2500.0, 300.0, false)
}

pub fn worker(post_id: &str) -> Worker {
    let now = Utc::now();
    Worker::new(
        new_id(),
        "Ivan Petrov",
        post_id,
        now - Duration::days(365 * 30),
        now - Duration::days(365 * 5),
        "ivan.petrov@example.com",
        false,
    )
}

pub fn post(salary: f64) -> Post {
    Post::new(new_id(), "Installer", PostType::Installer, salary)
}
