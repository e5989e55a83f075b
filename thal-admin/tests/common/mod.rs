// thal-admin/tests/common/mod.rs
// In-memory AdminApi used by the view flow tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use thal_client::{
    AdminApi, ClientError, ClientResult, DashboardSnapshot, ImageUpload, MenuItem, MenuItemFields,
    Order, OrderStatus, Reservation,
};

/// How a faked call fails
#[derive(Debug, Clone)]
pub enum Failure {
    /// `success: false` envelope, optionally with a message
    Envelope(Option<String>),
    Timeout,
}

impl Failure {
    fn to_error(&self) -> ClientError {
        match self {
            Failure::Envelope(message) => ClientError::Api {
                status: Some(200),
                message: message.clone(),
            },
            Failure::Timeout => ClientError::Timeout,
        }
    }
}

#[derive(Debug, Default)]
pub struct Calls {
    pub dashboard: AtomicUsize,
    pub list_orders: AtomicUsize,
    pub update_order: AtomicUsize,
    pub list_menu: AtomicUsize,
    pub list_categories: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl Calls {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn hit(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn mutations(&self) -> usize {
        Self::get(&self.create) + Self::get(&self.update) + Self::get(&self.delete)
    }
}

#[derive(Debug, Default)]
pub struct FakeApi {
    pub calls: Calls,
    pub menu: Mutex<Vec<MenuItem>>,
    pub orders: Mutex<Vec<Order>>,
    pub reservations: Mutex<Vec<Reservation>>,
    pub categories: Mutex<Vec<String>>,
    pub fail_lists: Mutex<Option<Failure>>,
    pub fail_categories: Mutex<Option<Failure>>,
    pub fail_mutations: Mutex<Option<Failure>>,
    /// Last image received by create/update
    pub last_image: Mutex<Option<String>>,
}

fn check(failure: &Mutex<Option<Failure>>) -> ClientResult<()> {
    match failure.lock().unwrap().as_ref() {
        Some(f) => Err(f.to_error()),
        None => Ok(()),
    }
}

impl FakeApi {
    pub fn with_menu(items: Vec<MenuItem>) -> Self {
        let api = Self::default();
        *api.menu.lock().unwrap() = items;
        api
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let api = Self::default();
        *api.orders.lock().unwrap() = orders;
        api
    }

    pub fn fail_lists(&self, failure: Failure) {
        *self.fail_lists.lock().unwrap() = Some(failure);
    }

    pub fn fail_categories(&self, failure: Failure) {
        *self.fail_categories.lock().unwrap() = Some(failure);
    }

    pub fn fail_mutations(&self, failure: Failure) {
        *self.fail_mutations.lock().unwrap() = Some(failure);
    }

    pub fn menu_names(&self) -> Vec<String> {
        self.menu.lock().unwrap().iter().map(|i| i.name.clone()).collect()
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn dashboard(&self) -> ClientResult<DashboardSnapshot> {
        Calls::hit(&self.calls.dashboard);
        check(&self.fail_lists)?;
        Ok(DashboardSnapshot {
            recent_orders: self.orders.lock().unwrap().clone(),
            todays_reservations: self.reservations.lock().unwrap().clone(),
        })
    }

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        Calls::hit(&self.calls.list_orders);
        check(&self.fail_lists)?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        Calls::hit(&self.calls.update_order);
        check(&self.fail_mutations)?;
        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(ClientError::Api {
                status: Some(404),
                message: Some("Order not found".to_string()),
            }),
        }
    }

    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        Calls::hit(&self.calls.list_menu);
        check(&self.fail_lists)?;
        Ok(self.menu.lock().unwrap().clone())
    }

    async fn list_categories(&self) -> ClientResult<Vec<String>> {
        Calls::hit(&self.calls.list_categories);
        check(&self.fail_categories)?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create_menu_item(&self, fields: &MenuItemFields, image: ImageUpload) -> ClientResult<()> {
        Calls::hit(&self.calls.create);
        check(&self.fail_mutations)?;
        let mut menu = self.menu.lock().unwrap();
        let id = format!("new-{}", menu.len() + 1);
        menu.push(MenuItem {
            id,
            name: fields.name.clone(),
            description: fields.description.clone(),
            price: fields.price,
            category: fields.category.clone(),
            image: Some(format!("/uploads/{}", image.file_name)),
        });
        *self.last_image.lock().unwrap() = Some(image.file_name);
        Ok(())
    }

    async fn update_menu_item(
        &self,
        id: &str,
        fields: &MenuItemFields,
        image: Option<ImageUpload>,
    ) -> ClientResult<()> {
        Calls::hit(&self.calls.update);
        check(&self.fail_mutations)?;
        let mut menu = self.menu.lock().unwrap();
        let Some(item) = menu.iter_mut().find(|i| i.id == id) else {
            return Err(ClientError::Api {
                status: Some(404),
                message: Some("Menu item not found".to_string()),
            });
        };
        item.name = fields.name.clone();
        item.description = fields.description.clone();
        item.price = fields.price;
        item.category = fields.category.clone();
        if let Some(image) = image {
            item.image = Some(format!("/uploads/{}", image.file_name));
            *self.last_image.lock().unwrap() = Some(image.file_name);
        }
        Ok(())
    }

    async fn delete_menu_item(&self, id: &str) -> ClientResult<()> {
        Calls::hit(&self.calls.delete);
        check(&self.fail_mutations)?;
        let mut menu = self.menu.lock().unwrap();
        let before = menu.len();
        menu.retain(|i| i.id != id);
        if menu.len() == before {
            return Err(ClientError::Api {
                status: Some(404),
                message: Some("Menu item not found".to_string()),
            });
        }
        Ok(())
    }
}

pub fn menu_item(id: &str, name: &str, category: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price,
        category: category.to_string(),
        image: Some(format!("/uploads/{id}.jpg")),
    }
}

pub fn order(id: &str, name: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        name: Some(name.to_string()),
        items: Vec::new(),
        total: 250.0,
        status,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 13, 15, 0).unwrap(),
    }
}

pub fn png(name: &str) -> ImageUpload {
    ImageUpload::from_bytes(name, b"fake-png-bytes".to_vec()).unwrap()
}
