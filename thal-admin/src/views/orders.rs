//! Orders view
//!
//! Cached order list with a status filter, a search box and a row cursor.

use shared::{Order, OrderStatus};
use thal_client::{AdminApi, ClientResult};

use crate::filter::{StatusFilter, filter_orders};
use crate::list::ListState;
use crate::notify::Notifier;

#[derive(Debug, Default)]
pub struct OrdersView {
    orders: ListState<Order>,
    pub status: StatusFilter,
    pub search: String,
    selected: usize,
}

impl OrdersView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &ListState<Order> {
        &self.orders
    }

    /// Orders passing the status filter and the search box
    pub fn visible(&self) -> Vec<&Order> {
        filter_orders(self.orders.items(), self.status, &self.search)
    }

    pub fn selected(&self) -> Option<&Order> {
        self.visible().get(self.selected).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.clamp_selection();
    }

    pub fn cycle_status(&mut self) {
        self.set_status(self.status.cycle());
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn begin_load(&mut self) {
        self.orders.begin();
    }

    pub fn apply_loaded(&mut self, result: ClientResult<Vec<Order>>, notices: &mut Notifier) {
        if let Err(e) = self.orders.settle(result) {
            if e.is_transport() {
                notices.error("Server error while fetching orders");
            } else {
                notices.error(e.server_message().unwrap_or("Failed to load orders"));
            }
        }
        self.clamp_selection();
    }

    pub async fn mount(&mut self, api: &dyn AdminApi, notices: &mut Notifier) {
        self.begin_load();
        let result = api.list_orders().await;
        self.apply_loaded(result, notices);
    }

    pub fn apply_status_update(
        &mut self,
        result: ClientResult<()>,
        reload: Option<ClientResult<Vec<Order>>>,
        notices: &mut Notifier,
    ) {
        match result {
            Ok(()) => {
                notices.success("Order updated");
                if let Some(reload) = reload {
                    self.apply_loaded(reload, notices);
                }
            }
            Err(e) => notices.error(e.server_message().unwrap_or("Failed to update order")),
        }
    }

    /// Mark an order completed, then reload the list
    pub async fn mark_completed(&mut self, api: &dyn AdminApi, id: &str, notices: &mut Notifier) {
        let result = api.update_order_status(id, OrderStatus::Completed).await;
        let reload = match result {
            Ok(()) => Some(api.list_orders().await),
            Err(_) => None,
        };
        self.apply_status_update(result, reload, notices);
    }
}
