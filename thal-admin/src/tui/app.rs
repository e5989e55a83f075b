//! Terminal application state
//!
//! Key presses mutate the views directly; backend calls run on spawned tasks
//! scoped to the current page mount and come back as [`AppEvent`]s.

use std::future::Future;
use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use shared::{DashboardSnapshot, MenuItem, Order, OrderStatus};
use thal_client::{AdminApi, ClientConfig, ClientResult, ImageUpload};
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::notify::Notifier;
use crate::shell::{LOGOUT_KEY, Navigation, Page, Shell};
use crate::views::{DashboardView, MenuDraft, MenuView, OrdersView, SubmitOutcome, send_submission};

/// Capacity of the result channel
pub const EVENT_BUFFER: usize = 32;

/// Result of a background request
#[derive(Debug)]
pub enum AppEvent {
    DashboardLoaded(ClientResult<DashboardSnapshot>),
    OrdersLoaded(ClientResult<Vec<Order>>),
    MenuLoaded {
        items: ClientResult<Vec<MenuItem>>,
        categories: ClientResult<Vec<String>>,
    },
    OrderUpdated {
        result: ClientResult<()>,
        reload: Option<ClientResult<Vec<Order>>>,
    },
    MenuSaved {
        /// Editor the submission came from
        ticket: u64,
        created: bool,
        result: ClientResult<()>,
        reload: Option<ClientResult<Vec<MenuItem>>>,
    },
    MenuDeleted {
        result: ClientResult<()>,
        reload: Option<ClientResult<Vec<MenuItem>>>,
    },
    ImagePicked(ClientResult<ImageUpload>),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the page's search box
    Search,
    /// Menu item editor is open
    Editing,
}

/// Editor form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Category,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Category,
        FormField::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::Category => "Category",
            FormField::Image => "Image file",
        }
    }
}

/// Text inputs backing the editor modal
#[derive(Debug, Default)]
pub struct EditorForm {
    pub inputs: [Input; 5],
    pub focus: usize,
}

impl EditorForm {
    pub fn from_draft(draft: &MenuDraft) -> Self {
        Self {
            inputs: [
                Input::new(draft.name.clone()),
                Input::new(draft.description.clone()),
                Input::new(draft.price.clone()),
                Input::new(draft.category.clone()),
                Input::default(),
            ],
            focus: 0,
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn prev(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    pub fn value(&self, field: FormField) -> &str {
        self.inputs[field as usize].value()
    }

    /// Copy the text fields into a draft
    pub fn write_draft(&self, draft: &mut MenuDraft) {
        draft.name = self.value(FormField::Name).to_string();
        draft.description = self.value(FormField::Description).to_string();
        draft.price = self.value(FormField::Price).to_string();
        draft.category = self.value(FormField::Category).to_string();
    }

    /// Cycle the category field through the known categories
    pub fn cycle_category(&mut self, categories: &[String]) {
        if categories.is_empty() {
            return;
        }
        let current = self.value(FormField::Category);
        let next = categories
            .iter()
            .position(|c| c == current)
            .map_or(0, |i| (i + 1) % categories.len());
        self.inputs[FormField::Category as usize] = Input::new(categories[next].clone());
    }
}

pub struct App {
    api: Arc<dyn AdminApi>,
    tx: mpsc::Sender<AppEvent>,
    pub shell: Shell,
    pub dashboard: DashboardView,
    pub orders: OrdersView,
    pub menu: MenuView,
    pub notices: Notifier,
    pub input_mode: InputMode,
    /// Search box of the current page
    pub search: Input,
    pub form: Option<EditorForm>,
    /// Editor whose create/update request is in flight
    pub saving: Option<u64>,
    pub show_logs: bool,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn AdminApi>, assets: ClientConfig, tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            api,
            tx,
            shell: Shell::new(),
            dashboard: DashboardView::new(),
            orders: OrdersView::new(),
            menu: MenuView::new(assets),
            notices: Notifier::new(),
            input_mode: InputMode::Normal,
            search: Input::default(),
            form: None,
            saving: None,
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    pub fn page(&self) -> Page {
        self.shell.current()
    }

    /// The open editor has a save in flight
    pub fn is_saving(&self) -> bool {
        self.saving.is_some() && self.saving == self.menu.editor_ticket()
    }

    /// Run `fut` in the background for the current mount
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let scope = self.shell.scope().clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match scope.run(fut).await {
                Some(event) => {
                    if tx.send(event).await.is_err() {
                        tracing::debug!("UI closed before result arrived");
                    }
                }
                None => tracing::debug!("Result dropped after page change"),
            }
        });
    }

    // ========== Navigation ==========

    pub fn navigate(&mut self, key: &str) {
        self.menu.close_editor();
        self.form = None;
        self.saving = None;
        self.input_mode = InputMode::Normal;

        match self.shell.navigate(key) {
            Navigation::Logout => self.should_quit = true,
            Navigation::Switched(page) => {
                self.search = Input::new(self.page_search(page).to_string());
                self.mount(page);
            }
        }
    }

    fn page_search(&self, page: Page) -> &str {
        match page {
            Page::Dashboard => "",
            Page::Orders => &self.orders.search,
            Page::Menu => &self.menu.search,
        }
    }

    /// Fetch everything the page shows
    pub fn mount(&mut self, page: Page) {
        let api = self.api.clone();
        match page {
            Page::Dashboard => {
                self.dashboard.begin_load();
                self.spawn(async move { AppEvent::DashboardLoaded(api.dashboard().await) });
            }
            Page::Orders => {
                self.orders.begin_load();
                self.spawn(async move { AppEvent::OrdersLoaded(api.list_orders().await) });
            }
            Page::Menu => {
                self.menu.begin_load();
                self.spawn(async move {
                    let (items, categories) =
                        tokio::join!(api.list_menu_items(), api.list_categories());
                    AppEvent::MenuLoaded { items, categories }
                });
            }
        }
    }

    // ========== Results ==========

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DashboardLoaded(result) => self.dashboard.apply_snapshot(result, &mut self.notices),
            AppEvent::OrdersLoaded(result) => self.orders.apply_loaded(result, &mut self.notices),
            AppEvent::MenuLoaded { items, categories } => {
                self.menu.apply_items(items, &mut self.notices);
                self.menu.apply_categories(categories, &mut self.notices);
            }
            AppEvent::OrderUpdated { result, reload } => {
                self.orders.apply_status_update(result, reload, &mut self.notices)
            }
            AppEvent::MenuSaved {
                ticket,
                created,
                result,
                reload,
            } => {
                if self.saving == Some(ticket) {
                    self.saving = None;
                }
                let outcome = self.menu.apply_submit(ticket, created, result, reload, &mut self.notices);
                if outcome == SubmitOutcome::Saved && !self.menu.is_editing() {
                    self.form = None;
                    self.input_mode = InputMode::Normal;
                }
            }
            AppEvent::MenuDeleted { result, reload } => {
                self.menu.apply_delete(result, reload, &mut self.notices)
            }
            AppEvent::ImagePicked(result) => match (result, self.menu.editor_mut()) {
                (Ok(upload), Some(editor)) => {
                    let name = upload.file_name.clone();
                    editor.select_image(upload);
                    self.notices.info(format!("Attached {name}"));
                }
                (Ok(_), None) => tracing::debug!("Image arrived after editor closed"),
                (Err(e), _) => self.notices.error(e.to_string()),
            },
        }
    }

    // ========== Keys ==========

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Search => self.handle_search_key(key),
            InputMode::Editing => self.handle_editor_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('x') => self.navigate(LOGOUT_KEY),
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(page) = c.to_digit(10).and_then(|n| Page::from_number(n as usize)) {
                    self.navigate(page.key());
                }
            }
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::Char('r') => self.mount(self.page()),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            KeyCode::Up => match self.page() {
                Page::Orders => self.orders.select_prev(),
                Page::Menu => self.menu.select_prev(),
                Page::Dashboard => {}
            },
            KeyCode::Down => match self.page() {
                Page::Orders => self.orders.select_next(),
                Page::Menu => self.menu.select_next(),
                Page::Dashboard => {}
            },
            KeyCode::Char('/') if self.page() != Page::Dashboard => {
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('f') if self.page() == Page::Orders => self.orders.cycle_status(),
            KeyCode::Char('c') if self.page() == Page::Orders => self.mark_selected_completed(),
            KeyCode::Char('a') if self.page() == Page::Menu => self.open_create(),
            KeyCode::Char('e') if self.page() == Page::Menu => self.open_edit(),
            KeyCode::Char('d') if self.page() == Page::Menu => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                self.search.reset();
                self.apply_search();
                self.input_mode = InputMode::Normal;
            }
            _ => {
                self.search.handle_event(&Event::Key(key));
                self.apply_search();
            }
        }
    }

    fn apply_search(&mut self) {
        let term = self.search.value().to_string();
        match self.page() {
            Page::Orders => self.orders.set_search(term),
            Page::Menu => self.menu.set_search(term),
            Page::Dashboard => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit();
            return;
        }

        let categories = self.menu.categories().to_vec();
        let Some(form) = self.form.as_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.menu.close_editor();
                self.form = None;
                self.saving = None;
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => form.next(),
            KeyCode::BackTab | KeyCode::Up => form.prev(),
            KeyCode::F(2) if form.focused() == FormField::Category => form.cycle_category(&categories),
            KeyCode::Enter if form.focused() == FormField::Image => {
                let path = form.value(FormField::Image).trim().to_string();
                if path.is_empty() {
                    self.notices.warning("Enter an image path first");
                } else {
                    self.spawn(async move { AppEvent::ImagePicked(ImageUpload::from_path(path).await) });
                }
            }
            KeyCode::Enter => form.next(),
            _ => {
                form.inputs[form.focus].handle_event(&Event::Key(key));
            }
        }
    }

    // ========== Actions ==========

    fn open_create(&mut self) {
        self.menu.open_create();
        self.open_form();
    }

    fn open_edit(&mut self) {
        if self.menu.open_edit_selected() {
            self.open_form();
        } else {
            self.notices.info("No item selected");
        }
    }

    fn open_form(&mut self) {
        if let Some(editor) = self.menu.editor() {
            self.form = Some(EditorForm::from_draft(&editor.draft));
            self.input_mode = InputMode::Editing;
        }
    }

    fn submit(&mut self) {
        if self.is_saving() {
            self.notices.info("Still saving");
            return;
        }
        if let (Some(form), Some(editor)) = (self.form.as_ref(), self.menu.editor_mut()) {
            form.write_draft(&mut editor.draft);
        }
        let Some((ticket, submission)) = self.menu.prepare_submit(&mut self.notices) else {
            return;
        };

        self.saving = Some(ticket);
        let created = submission.is_create();
        let api = self.api.clone();
        self.spawn(async move {
            let result = send_submission(api.as_ref(), submission).await;
            let reload = match result {
                Ok(()) => Some(api.list_menu_items().await),
                Err(_) => None,
            };
            AppEvent::MenuSaved {
                ticket,
                created,
                result,
                reload,
            }
        });
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.menu.selected().map(|item| item.id.clone()) else {
            self.notices.info("No item selected");
            return;
        };
        let api = self.api.clone();
        self.spawn(async move {
            let result = api.delete_menu_item(&id).await;
            let reload = match result {
                Ok(()) => Some(api.list_menu_items().await),
                Err(_) => None,
            };
            AppEvent::MenuDeleted { result, reload }
        });
    }

    fn mark_selected_completed(&mut self) {
        let Some(order) = self.orders.selected() else {
            self.notices.info("No order selected");
            return;
        };
        if order.status == OrderStatus::Completed {
            self.notices.info("Order already completed");
            return;
        }
        let id = order.id.clone();
        let api = self.api.clone();
        self.spawn(async move {
            let result = api.update_order_status(&id, OrderStatus::Completed).await;
            let reload = match result {
                Ok(()) => Some(api.list_orders().await),
                Err(_) => None,
            };
            AppEvent::OrderUpdated { result, reload }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trips_draft() {
        let draft = MenuDraft {
            name: "Chai".to_string(),
            description: "Masala".to_string(),
            price: "30".to_string(),
            category: "Welcome Drinks".to_string(),
        };
        let form = EditorForm::from_draft(&draft);
        let mut copy = MenuDraft::default();
        form.write_draft(&mut copy);
        assert_eq!(copy, draft);
        assert_eq!(form.value(FormField::Image), "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = EditorForm::default();
        form.prev();
        assert_eq!(form.focused(), FormField::Image);
        form.next();
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    fn test_cycle_category() {
        let categories = vec!["Rice".to_string(), "Thali".to_string()];
        let mut form = EditorForm::default();
        form.cycle_category(&categories);
        assert_eq!(form.value(FormField::Category), "Rice");
        form.cycle_category(&categories);
        assert_eq!(form.value(FormField::Category), "Thali");
        form.cycle_category(&categories);
        assert_eq!(form.value(FormField::Category), "Rice");
    }
}
