//! Cached list state
//!
//! Each list view owns one [`ListState`]: Idle → Loading → Loaded | Failed.
//! A failed load renders as an empty list.

use thal_client::ClientResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug)]
pub struct ListState<T> {
    state: LoadState,
    items: Vec<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            items: Vec::new(),
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as in flight; cached items stay visible
    pub fn begin(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Settle the list with a fetch result
    ///
    /// Success replaces the whole collection in one step, so a reload after a
    /// mutation never passes through an intermediate state. Failure clears
    /// the items and keeps the error message.
    pub fn settle(&mut self, result: ClientResult<Vec<T>>) -> ClientResult<usize> {
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.state = LoadState::Loaded;
                Ok(count)
            }
            Err(e) => {
                self.items.clear();
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thal_client::ClientError;

    #[test]
    fn test_lifecycle() {
        let mut list = ListState::<u32>::new();
        assert_eq!(list.state(), &LoadState::Idle);

        list.begin();
        assert!(list.is_loading());

        assert_eq!(list.settle(Ok(vec![1, 2, 3])).unwrap(), 3);
        assert_eq!(list.state(), &LoadState::Loaded);
        assert_eq!(list.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_failure_empties_list() {
        let mut list = ListState::new();
        list.settle(Ok(vec!["a"])).unwrap();

        list.begin();
        let err = list.settle(Err(ClientError::Timeout)).unwrap_err();
        assert!(matches!(err, ClientError::Timeout));
        assert!(list.items().is_empty());
        assert_eq!(list.state(), &LoadState::Failed("Request timed out".to_string()));
    }

    #[test]
    fn test_reload_without_begin_goes_straight_to_loaded() {
        let mut list = ListState::new();
        list.settle(Ok(vec![1])).unwrap();
        list.settle(Ok(vec![1, 2])).unwrap();
        assert_eq!(list.state(), &LoadState::Loaded);
        assert_eq!(list.items().len(), 2);
    }
}
