//! Data access façade
//!
//! [`AdminApi`] is the only way the admin views reach the backend. Every
//! operation resolves to a [`ClientResult`]; transport failures, timeouts,
//! failure envelopes and malformed bodies all come back as `Err`.

use async_trait::async_trait;
use shared::{
    ApiResponse, CategoryListResponse, DashboardSnapshot, MenuItem, MenuItemFields, Order,
    OrderStatus, OrderStatusUpdate,
};
use urlencoding::encode;

use crate::http::{into_data, into_success, menu_item_form};
use crate::{ClientError, ClientResult, HttpClient, ImageUpload};

/// Backend operations used by the admin console
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Recent orders and today's reservations
    async fn dashboard(&self) -> ClientResult<DashboardSnapshot>;

    /// All orders
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;

    /// Change the status of one order
    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<()>;

    /// All menu items
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>>;

    /// Distinct category names known to the backend
    async fn list_categories(&self) -> ClientResult<Vec<String>>;

    /// Create a menu item; an image is mandatory
    async fn create_menu_item(&self, fields: &MenuItemFields, image: ImageUpload) -> ClientResult<()>;

    /// Update a menu item; without an image the stored one is kept
    async fn update_menu_item(
        &self,
        id: &str,
        fields: &MenuItemFields,
        image: Option<ImageUpload>,
    ) -> ClientResult<()>;

    /// Delete a menu item
    async fn delete_menu_item(&self, id: &str) -> ClientResult<()>;
}

/// Log failures once, at the boundary
fn traced<T>(operation: &'static str, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "Backend call failed");
    }
    result
}

#[async_trait]
impl AdminApi for HttpClient {
    async fn dashboard(&self) -> ClientResult<DashboardSnapshot> {
        tracing::debug!("Fetching dashboard snapshot");
        traced("dashboard", self.get::<DashboardSnapshot>("/api/dashboard").await)
    }

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        tracing::debug!("Fetching orders");
        let result = self
            .get::<ApiResponse<Vec<Order>>>("/api/orders")
            .await
            .and_then(|envelope| into_data(envelope, "orders"));
        traced("list_orders", result)
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        tracing::debug!(order_id = %id, status = %status, "Updating order status");
        let body = OrderStatusUpdate { status };
        let result = self
            .put_json::<ApiResponse<serde_json::Value>, _>(&format!("/api/orders/{}", encode(id)), &body)
            .await
            .and_then(into_success)
            .map(|_| ());
        traced("update_order_status", result)
    }

    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        tracing::debug!("Fetching menu items");
        let result = self
            .get::<ApiResponse<Vec<MenuItem>>>("/api/menu")
            .await
            .and_then(|envelope| into_data(envelope, "menu"));
        traced("list_menu_items", result)
    }

    async fn list_categories(&self) -> ClientResult<Vec<String>> {
        tracing::debug!("Fetching categories");
        let result = self
            .get::<CategoryListResponse>("/api/categories")
            .await
            .and_then(|resp| {
                if resp.success {
                    Ok(resp.categories)
                } else {
                    Err(ClientError::Api {
                        status: None,
                        message: resp.message.filter(|m| !m.trim().is_empty()),
                    })
                }
            });
        traced("list_categories", result)
    }

    async fn create_menu_item(&self, fields: &MenuItemFields, image: ImageUpload) -> ClientResult<()> {
        tracing::debug!(name = %fields.name, image = %image.file_name, "Creating menu item");
        let result: ClientResult<()> = async {
            let form = menu_item_form(fields, Some(image))?;
            let envelope = self
                .post_multipart::<ApiResponse<serde_json::Value>>("/api/menu", form)
                .await?;
            into_success(envelope).map(|_| ())
        }
        .await;
        traced("create_menu_item", result)
    }

    async fn update_menu_item(
        &self,
        id: &str,
        fields: &MenuItemFields,
        image: Option<ImageUpload>,
    ) -> ClientResult<()> {
        tracing::debug!(item_id = %id, with_image = image.is_some(), "Updating menu item");
        let result: ClientResult<()> = async {
            let form = menu_item_form(fields, image)?;
            let envelope = self
                .put_multipart::<ApiResponse<serde_json::Value>>(&format!("/api/menu/{}", encode(id)), form)
                .await?;
            into_success(envelope).map(|_| ())
        }
        .await;
        traced("update_menu_item", result)
    }

    async fn delete_menu_item(&self, id: &str) -> ClientResult<()> {
        tracing::debug!(item_id = %id, "Deleting menu item");
        let result = self
            .delete::<ApiResponse<serde_json::Value>>(&format!("/api/menu/{}", encode(id)))
            .await
            .and_then(into_success)
            .map(|_| ());
        traced("delete_menu_item", result)
    }
}
