//! Port mocks and fixtures for unit tests.

use async_trait::async_trait;
use mockall::mock;
use storefront_core::{
    Category, CategoryId, CategoryRecord, CategoryStorePort, CategoryUpdate, ImageRef,
    NavbarEntry, NavbarStorePort, NewCategory, StorePortResult,
};

mock! {
    pub Store {}

    #[async_trait]
    impl CategoryStorePort for Store {
        async fn list_categories(&self) -> StorePortResult<Vec<CategoryRecord>>;
        async fn create_category(&self, category: &NewCategory) -> StorePortResult<Option<Category>>;
        async fn update_category(
            &self,
            id: &CategoryId,
            update: &CategoryUpdate,
        ) -> StorePortResult<Option<Category>>;
        async fn delete_category(&self, id: &CategoryId) -> StorePortResult<()>;
    }
}

mock! {
    pub Navbar {}

    #[async_trait]
    impl NavbarStorePort for Navbar {
        async fn create_navbar_entry(&self, entry: &NavbarEntry) -> StorePortResult<()>;
    }
}

pub fn books() -> Category {
    Category {
        id: CategoryId::new("b1"),
        name: "Books".to_string(),
        subcategories: vec!["Fiction".to_string(), "NonFiction".to_string()],
        images: vec![ImageRef::from("uploads/books.jpg")],
    }
}

pub fn electronics() -> Category {
    Category {
        id: CategoryId::new("e1"),
        name: "Electronics".to_string(),
        subcategories: vec!["Phones".to_string(), "Laptops".to_string()],
        images: vec![],
    }
}
