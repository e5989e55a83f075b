//! Menu management view
//!
//! Cached menu list with search, the category set, and the add/edit modal.
//! Mutations are confirmed by the backend and followed by a full reload of
//! the list; nothing is patched locally.

use shared::{MenuItem, default_categories, merge_categories};
use thal_client::{AdminApi, ClientConfig, ClientError, ClientResult};

use crate::filter::filter_menu;
use crate::list::ListState;
use crate::notify::Notifier;
use crate::views::editor::{MenuEditor, Submission};

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No editor was open
    Idle,
    /// Draft rejected locally; the backend was not contacted
    Invalid,
    /// Backend refused or could not be reached; the editor stays open
    Failed,
    /// Saved and reloaded; the editor is closed
    Saved,
}

#[derive(Debug)]
pub struct MenuView {
    items: ListState<MenuItem>,
    categories: Vec<String>,
    pub search: String,
    editor: Option<MenuEditor>,
    /// Ticket handed to the next opened editor
    next_ticket: u64,
    selected: usize,
    assets: ClientConfig,
}

impl MenuView {
    /// `assets` resolves stored image paths into preview URLs
    pub fn new(assets: ClientConfig) -> Self {
        Self {
            items: ListState::new(),
            categories: default_categories(),
            search: String::new(),
            editor: None,
            next_ticket: 1,
            selected: 0,
            assets,
        }
    }

    pub fn items(&self) -> &ListState<MenuItem> {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items matching the current search
    pub fn visible(&self) -> Vec<&MenuItem> {
        filter_menu(self.items.items(), &self.search)
    }

    pub fn selected(&self) -> Option<&MenuItem> {
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

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // ========== Loading ==========

    /// Initial load: menu items and categories, fetched concurrently
    pub async fn mount(&mut self, api: &dyn AdminApi, notices: &mut Notifier) {
        self.items.begin();
        let (items, categories) = tokio::join!(api.list_menu_items(), api.list_categories());
        self.apply_items(items, notices);
        self.apply_categories(categories, notices);
    }

    /// Re-fetch the item list
    pub async fn reload(&mut self, api: &dyn AdminApi, notices: &mut Notifier) {
        let result = api.list_menu_items().await;
        self.apply_items(result, notices);
    }

    pub fn begin_load(&mut self) {
        self.items.begin();
    }

    pub fn apply_items(&mut self, result: ClientResult<Vec<MenuItem>>, notices: &mut Notifier) {
        if let Err(e) = self.items.settle(result) {
            notices.error(e.server_message().unwrap_or("Failed to fetch menu"));
        }
        self.clamp_selection();
    }

    /// Merge backend categories into the defaults
    ///
    /// A refused request silently keeps the defaults; an unreachable backend
    /// also tells the operator.
    pub fn apply_categories(&mut self, result: ClientResult<Vec<String>>, notices: &mut Notifier) {
        self.categories = match result {
            Ok(remote) => merge_categories(&remote),
            Err(ClientError::Api { .. }) => default_categories(),
            Err(_) => {
                notices.error("Failed to fetch categories, showing defaults");
                default_categories()
            }
        };
    }

    // ========== Editor ==========

    pub fn editor(&self) -> Option<&MenuEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut MenuEditor> {
        self.editor.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    fn take_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    /// Open an empty editor, discarding any open one
    pub fn open_create(&mut self) {
        self.close_editor();
        let ticket = self.take_ticket();
        self.editor = Some(MenuEditor::create().with_ticket(ticket));
    }

    /// Open the editor pre-filled from an item
    pub fn open_edit(&mut self, item: &MenuItem) {
        self.close_editor();
        let ticket = self.take_ticket();
        let preview_url = item.image.as_deref().map(|image| self.assets.asset_url(image));
        self.editor = Some(MenuEditor::edit(item, preview_url).with_ticket(ticket));
    }

    /// Open the editor for the selected row
    pub fn open_edit_selected(&mut self) -> bool {
        match self.selected().cloned() {
            Some(item) => {
                self.open_edit(&item);
                true
            }
            None => false,
        }
    }

    pub fn close_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.close();
        }
    }

    /// Ticket of the open editor
    pub fn editor_ticket(&self) -> Option<u64> {
        self.editor.as_ref().map(MenuEditor::ticket)
    }

    /// Validate the open editor
    ///
    /// Validation failures are reported and nothing is returned, so the
    /// backend is never contacted with an incomplete draft. The ticket names
    /// the editor the submission came from.
    pub fn prepare_submit(&self, notices: &mut Notifier) -> Option<(u64, Submission)> {
        let editor = self.editor.as_ref()?;
        match editor.validate() {
            Ok(submission) => Some((editor.ticket(), submission)),
            Err(e) => {
                notices.error(e.to_string());
                None
            }
        }
    }

    /// Apply the backend's answer to a submission
    ///
    /// On success the freshly fetched list replaces the cache in the same
    /// step that closes the editor. Only the editor holding `ticket` is
    /// closed; one opened after the request was sent keeps its draft.
    pub fn apply_submit(
        &mut self,
        ticket: u64,
        created: bool,
        result: ClientResult<()>,
        reload: Option<ClientResult<Vec<MenuItem>>>,
        notices: &mut Notifier,
    ) -> SubmitOutcome {
        match result {
            Ok(()) => {
                notices.success(if created { "Item added" } else { "Item updated" });
                if self.editor_ticket() == Some(ticket) {
                    self.close_editor();
                }
                if let Some(reload) = reload {
                    self.apply_items(reload, notices);
                }
                SubmitOutcome::Saved
            }
            Err(e) => {
                notices.error(e.server_message().unwrap_or("Server error"));
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, send, and reload
    pub async fn submit(&mut self, api: &dyn AdminApi, notices: &mut Notifier) -> SubmitOutcome {
        if self.editor.is_none() {
            return SubmitOutcome::Idle;
        }
        let Some((ticket, submission)) = self.prepare_submit(notices) else {
            return SubmitOutcome::Invalid;
        };

        let created = submission.is_create();
        let result = send_submission(api, submission).await;
        let reload = match result {
            Ok(()) => Some(api.list_menu_items().await),
            Err(_) => None,
        };
        self.apply_submit(ticket, created, result, reload, notices)
    }

    // ========== Delete ==========

    pub fn apply_delete(
        &mut self,
        result: ClientResult<()>,
        reload: Option<ClientResult<Vec<MenuItem>>>,
        notices: &mut Notifier,
    ) {
        match result {
            Ok(()) => {
                notices.success("Item deleted");
                if let Some(reload) = reload {
                    self.apply_items(reload, notices);
                }
            }
            Err(e) => notices.error(e.server_message().unwrap_or("Delete failed")),
        }
    }

    /// Delete an item, then reload the list
    pub async fn delete(&mut self, api: &dyn AdminApi, id: &str, notices: &mut Notifier) {
        let result = api.delete_menu_item(id).await;
        let reload = match result {
            Ok(()) => Some(api.list_menu_items().await),
            Err(_) => None,
        };
        self.apply_delete(result, reload, notices);
    }
}

/// Dispatch a validated submission to the façade
pub async fn send_submission(api: &dyn AdminApi, submission: Submission) -> ClientResult<()> {
    match submission {
        Submission::Create { fields, image } => api.create_menu_item(&fields, image).await,
        Submission::Update { id, fields, image } => api.update_menu_item(&id, &fields, image).await,
    }
}
