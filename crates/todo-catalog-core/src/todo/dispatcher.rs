//! Todo Command Dispatcher
//!
//! Each command raises a busy flag, calls the todo service and applies
//! the result to the state only after the service confirms it. Failures
//! leave the list untouched and put a fixed message in the error slot.

use crate::api::TodoApi;
use crate::domain::{NewTodo, TodoId, TodoPatch};
use crate::error::{TodoError, TodoOp};

use super::handle::StateHandle;
use super::state::{Busy, TodoAction, TodoState};
use super::tracker::{RequestTracker, Target, Ticket};

/// How a command settled when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state now reflects the server's answer
    Applied,
    /// Blank input or nothing to do; no request was sent
    Skipped,
    /// A newer request on the same target answered for it; result dropped
    Superseded,
}

pub type CommandResult = Result<Outcome, TodoError>;

/// Holds a busy flag for its lifetime
///
/// Dropping the guard settles the flag, so it is released on success,
/// failure, early return and when the command future itself is dropped.
pub struct BusyGuard<'a, H: StateHandle<TodoState>> {
    state: &'a H,
    busy: Busy,
}

impl<'a, H: StateHandle<TodoState>> BusyGuard<'a, H> {
    pub fn acquire(state: &'a H, busy: Busy) -> Self {
        state.update(|s| s.reduce(TodoAction::Begin(busy)));
        Self { state, busy }
    }
}

impl<H: StateHandle<TodoState>> Drop for BusyGuard<'_, H> {
    fn drop(&mut self) {
        let busy = self.busy;
        self.state.update(|s| s.reduce(TodoAction::Settle(busy)));
    }
}

pub struct TodoDispatcher<A, H> {
    api: A,
    state: H,
    tracker: RequestTracker,
    list_limit: usize,
}

impl<A, H> TodoDispatcher<A, H>
where
    A: TodoApi,
    H: StateHandle<TodoState>,
{
    pub fn new(api: A, state: H, list_limit: usize) -> Self {
        Self {
            api,
            state,
            tracker: RequestTracker::new(),
            list_limit,
        }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dispatch(&self, action: TodoAction) {
        self.state.update(|s| s.reduce(action));
    }

    fn busy(&self, busy: Busy) -> BusyGuard<'_, H> {
        BusyGuard::acquire(&self.state, busy)
    }

    /// Report a failure unless a newer request made it irrelevant
    fn fail(&self, ticket: &Ticket, err: TodoError) -> CommandResult {
        if !self.tracker.settle(ticket) {
            log::debug!("dropping stale failure: {}", err);
            return Ok(Outcome::Superseded);
        }
        self.report(err)
    }

    fn report(&self, err: TodoError) -> CommandResult {
        log::error!("{}", err);
        self.dispatch(TodoAction::Fail(err.user_message()));
        Err(err)
    }

    /// Replace the list with the first `list_limit` todos from the service
    pub async fn list(&self) -> CommandResult {
        let _busy = self.busy(Busy::Loading);
        let ticket = self.tracker.issue(Target::Collection);

        match self.api.list_all().await {
            Ok(mut todos) => {
                if !self.tracker.settle(&ticket) {
                    return Ok(Outcome::Superseded);
                }
                todos.truncate(self.list_limit);
                log::info!("loaded {} todos", todos.len());
                self.dispatch(TodoAction::ReplaceAll(todos));
                Ok(Outcome::Applied)
            }
            Err(e) => self.fail(&ticket, TodoError::network(TodoOp::List, e)),
        }
    }

    /// Replace the list with the service's matches for `query`
    pub async fn search(&self, query: &str) -> CommandResult {
        if query.trim().is_empty() {
            return Ok(Outcome::Skipped);
        }
        let _busy = self.busy(Busy::Searching);
        let ticket = self.tracker.issue(Target::Collection);

        match self.api.search(query).await {
            Ok(todos) => {
                if !self.tracker.settle(&ticket) {
                    return Ok(Outcome::Superseded);
                }
                log::info!("search {:?} matched {} todos", query, todos.len());
                self.dispatch(TodoAction::ReplaceAll(todos));
                Ok(Outcome::Applied)
            }
            Err(e) => self.fail(&ticket, TodoError::network(TodoOp::Search, e)),
        }
    }

    /// Search using the current search input
    pub async fn search_current(&self) -> CommandResult {
        let query = self.state.read(|s| s.search_text.clone());
        self.search(&query).await
    }

    /// Create a todo and put the server's record at the front
    pub async fn create(&self, title: &str) -> CommandResult {
        if title.trim().is_empty() {
            return Ok(Outcome::Skipped);
        }
        let owner = self.state.read(|s| s.owner);
        let _busy = self.busy(Busy::Loading);
        let ticket = self.tracker.issue(Target::Insert);

        match self.api.create(&NewTodo::new(title, owner)).await {
            Ok(todo) => {
                if !self.tracker.settle(&ticket) {
                    return Ok(Outcome::Superseded);
                }
                log::info!("created todo {}", todo.id);
                self.dispatch(TodoAction::Prepend(todo));
                Ok(Outcome::Applied)
            }
            Err(e) => self.fail(&ticket, TodoError::network(TodoOp::Create, e)),
        }
    }

    /// Create from the current add input
    pub async fn create_current(&self) -> CommandResult {
        let title = self.state.read(|s| s.new_title.clone());
        self.create(&title).await
    }

    /// Send the full merged record, then apply the same merge locally
    ///
    /// The record must be in the list; otherwise `TodoError::NotFound`
    /// is reported and nothing is sent.
    pub async fn update(&self, id: TodoId, patch: TodoPatch) -> CommandResult {
        let Some(current) = self.state.read(|s| s.find(id).cloned()) else {
            let err = TodoError::NotFound(id);
            log::warn!("{}", err);
            self.dispatch(TodoAction::Fail(err.user_message()));
            return Err(err);
        };
        let merged = current.merged(&patch);
        let _busy = self.busy(Busy::Loading);
        let ticket = self.tracker.issue(Target::Record(id));

        match self.api.replace(&merged).await {
            Ok(_) => {
                if !self.tracker.settle(&ticket) {
                    log::debug!("update of todo {} superseded", id);
                    return Ok(Outcome::Superseded);
                }
                self.dispatch(TodoAction::Merge { id, patch });
                Ok(Outcome::Applied)
            }
            Err(e) => self.fail(&ticket, TodoError::network(TodoOp::Update(id), e)),
        }
    }

    pub async fn toggle_complete(&self, id: TodoId, completed: bool) -> CommandResult {
        self.update(id, TodoPatch::completed(!completed)).await
    }

    /// Delete on the server, then drop the record locally
    ///
    /// A delete answer, confirmed or failed, is never overtaken by a
    /// newer update to the same record; only a reset discards it.
    pub async fn delete(&self, id: TodoId) -> CommandResult {
        let _busy = self.busy(Busy::Loading);
        let ticket = self.tracker.issue(Target::Record(id));

        let result = self.api.delete(id).await;
        self.tracker.settle(&ticket);
        if !self.tracker.is_live(&ticket) {
            return Ok(Outcome::Superseded);
        }
        match result {
            Ok(existed) => {
                if !existed {
                    log::warn!("todo {} was already gone on the server", id);
                }
                self.dispatch(TodoAction::Remove(id));
                Ok(Outcome::Applied)
            }
            Err(e) => self.report(TodoError::network(TodoOp::Delete(id), e)),
        }
    }

    pub fn start_edit(&self, id: TodoId, title: impl Into<String>) {
        self.dispatch(TodoAction::StartEdit {
            id,
            title: title.into(),
        });
    }

    pub fn set_edit_text(&self, text: impl Into<String>) {
        self.dispatch(TodoAction::SetEditText(text.into()));
    }

    pub fn cancel_edit(&self) {
        self.dispatch(TodoAction::CancelEdit);
    }

    /// Update the edited record's title, then close the edit session
    pub async fn save_edit(&self) -> CommandResult {
        let Some(edit) = self.state.read(|s| s.edit.clone()) else {
            return Ok(Outcome::Skipped);
        };
        if edit.text.trim().is_empty() {
            return Ok(Outcome::Skipped);
        }
        let result = self.update(edit.id, TodoPatch::title(edit.text)).await;
        self.dispatch(TodoAction::FinishEdit(edit.id));
        result
    }

    /// Forget everything: outstanding responses are ignored from now on
    pub fn reset(&self) {
        self.tracker.invalidate_all();
        self.dispatch(TodoAction::Reset);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::api::ApiResult;
    use crate::domain::{Todo, UserId};
    use crate::error::ApiError;

    /// In-memory todo service
    #[derive(Default)]
    struct FakeApi {
        todos: RefCell<Vec<Todo>>,
        next_id: Cell<TodoId>,
        fail: Cell<bool>,
        omit_id: Cell<bool>,
        replaced: RefCell<Vec<Todo>>,
        created: RefCell<Vec<NewTodo>>,
    }

    impl FakeApi {
        fn with(todos: Vec<Todo>) -> Self {
            let api = Self::default();
            api.next_id.set(100);
            *api.todos.borrow_mut() = todos;
            api
        }

        fn check(&self) -> ApiResult<()> {
            if self.fail.get() {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn list_all(&self) -> ApiResult<Vec<Todo>> {
            self.check()?;
            Ok(self.todos.borrow().clone())
        }

        async fn get(&self, id: TodoId) -> ApiResult<Todo> {
            self.check()?;
            self.todos
                .borrow()
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(ApiError::Status(404))
        }

        async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
            self.check()?;
            self.created.borrow_mut().push(todo.clone());
            if self.omit_id.get() {
                return Err(ApiError::MissingId);
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let mut created = Todo::new(id, todo.title.clone());
            created.user_id = Some(todo.user_id);
            self.todos.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn replace(&self, todo: &Todo) -> ApiResult<Todo> {
            self.check()?;
            self.replaced.borrow_mut().push(todo.clone());
            Ok(todo.clone())
        }

        async fn patch(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
            let todo = self.get(id).await?;
            Ok(todo.merged(patch))
        }

        async fn delete(&self, id: TodoId) -> ApiResult<bool> {
            self.check()?;
            let mut todos = self.todos.borrow_mut();
            let before = todos.len();
            todos.retain(|t| t.id != id);
            Ok(todos.len() != before)
        }

        async fn by_user(&self, user_id: UserId) -> ApiResult<Vec<Todo>> {
            self.check()?;
            Ok(self
                .todos
                .borrow()
                .iter()
                .filter(|t| t.user_id == Some(user_id))
                .cloned()
                .collect())
        }

        async fn search(&self, query: &str) -> ApiResult<Vec<Todo>> {
            self.check()?;
            let query = query.to_lowercase();
            Ok(self
                .todos
                .borrow()
                .iter()
                .filter(|t| t.title.to_lowercase().contains(&query))
                .cloned()
                .collect())
        }
    }

    type Dispatcher = TodoDispatcher<FakeApi, RefCell<TodoState>>;

    fn todos(n: i64) -> Vec<Todo> {
        (1..=n).map(|i| Todo::new(i, format!("Todo {}", i))).collect()
    }

    async fn loaded(n: i64) -> Dispatcher {
        let dispatcher = TodoDispatcher::new(FakeApi::with(todos(n)), RefCell::default(), 10);
        dispatcher.list().await.unwrap();
        dispatcher
    }

    fn snapshot(d: &Dispatcher) -> TodoState {
        d.state().borrow().clone()
    }

    #[tokio::test]
    async fn test_list_truncates_to_limit() {
        let d = loaded(15).await;
        let state = snapshot(&d);
        assert_eq!(state.todos.len(), 10);
        assert_eq!(state.todos[0].id, 1);
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_list_failure_keeps_store() {
        let d = loaded(3).await;
        d.api().fail.set(true);

        let err = d.list().await.unwrap_err();
        assert!(matches!(err, TodoError::Network { op: TodoOp::List, .. }));
        let state = snapshot(&d);
        assert_eq!(state.todos.len(), 3);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch todos"));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_create_prepends_server_record() {
        let d = loaded(3).await;
        d.dispatch(TodoAction::SetNewTitle("Buy milk".into()));

        assert_eq!(d.create_current().await.unwrap(), Outcome::Applied);
        let state = snapshot(&d);
        assert_eq!(state.todos.len(), 4);
        assert_eq!(state.todos[0].id, 100);
        assert_eq!(state.todos[0].title, "Buy milk");
        assert!(!state.todos[0].completed);
        assert!(state.new_title.is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_owner() {
        let d = loaded(0).await;
        d.dispatch(TodoAction::SetOwner(Some(7)));
        d.create("Walk dog").await.unwrap();
        assert_eq!(d.api().created.borrow()[0].user_id, 7);
    }

    #[tokio::test]
    async fn test_create_without_server_id_fails() {
        let d = loaded(2).await;
        d.api().omit_id.set(true);

        let err = d.create("Buy milk").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to create todo");
        assert_eq!(snapshot(&d).todos.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_input_is_skipped() {
        let d = loaded(2).await;
        assert_eq!(d.create("   ").await.unwrap(), Outcome::Skipped);
        assert_eq!(d.search("\t").await.unwrap(), Outcome::Skipped);
        assert_eq!(d.save_edit().await.unwrap(), Outcome::Skipped);
        assert!(d.api().created.borrow().is_empty());
        assert_eq!(snapshot(&d).error, None);
    }

    #[tokio::test]
    async fn test_search_replaces_store() {
        let d = loaded(12).await;
        assert_eq!(d.search("todo 1").await.unwrap(), Outcome::Applied);
        let ids: Vec<_> = snapshot(&d).todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 10, 11, 12]);
    }

    #[tokio::test]
    async fn test_search_failure_keeps_store() {
        let d = loaded(3).await;
        d.api().fail.set(true);

        let err = d.search("todo").await.unwrap_err();
        assert!(matches!(err, TodoError::Network { op: TodoOp::Search, .. }));
        let state = snapshot(&d);
        assert_eq!(state.todos, todos(3));
        assert_eq!(state.error.as_deref(), Some("Failed to search todos"));
        assert!(!state.is_searching());
    }

    #[tokio::test]
    async fn test_update_sends_full_record() {
        let d = loaded(2).await;
        d.update(2, TodoPatch::completed(true)).await.unwrap();

        let sent = d.api().replaced.borrow()[0].clone();
        assert_eq!(sent.title, "Todo 2");
        assert!(sent.completed);
        assert!(snapshot(&d).find(2).unwrap().completed);
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let d = loaded(2).await;
        d.update(1, TodoPatch::completed(true)).await.unwrap();
        d.update(1, TodoPatch::completed(false)).await.unwrap();

        let state = snapshot(&d);
        let todo = state.find(1).unwrap();
        assert_eq!(todo.title, "Todo 1");
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_an_error() {
        let d = loaded(2).await;
        assert_eq!(d.update(9, TodoPatch::title("x")).await, Err(TodoError::NotFound(9)));
        assert!(d.api().replaced.borrow().is_empty());
        assert!(snapshot(&d).error.is_some());
    }

    #[tokio::test]
    async fn test_update_failure_leaves_record() {
        let d = loaded(2).await;
        d.api().fail.set(true);
        let err = d.toggle_complete(2, false).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to update todo with ID: 2");

        let state = snapshot(&d);
        assert!(!state.find(2).unwrap().completed);
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let d = loaded(3).await;
        d.delete(2).await.unwrap();
        let ids: Vec<_> = snapshot(&d).todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        d.delete(42).await.unwrap();
        assert_eq!(snapshot(&d).todos.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_record() {
        let d = loaded(3).await;
        d.api().fail.set(true);

        let err = d.delete(2).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to delete todo with ID: 2");
        let state = snapshot(&d);
        assert_eq!(state.todos, todos(3));
        assert_eq!(state.error.as_deref(), Some("Failed to delete todo with ID: 2"));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_edit_flow() {
        let d = loaded(2).await;
        d.start_edit(1, "Todo 1");
        d.set_edit_text("Renamed");
        d.save_edit().await.unwrap();

        let state = snapshot(&d);
        assert_eq!(state.find(1).unwrap().title, "Renamed");
        assert_eq!(state.edit, None);

        d.start_edit(2, "Todo 2");
        d.set_edit_text("Never saved");
        d.cancel_edit();
        assert_eq!(snapshot(&d).find(2).unwrap().title, "Todo 2");
    }

    #[tokio::test]
    async fn test_busy_flag_released_on_every_path() {
        let d = loaded(2).await;
        d.update(1, TodoPatch::completed(true)).await.unwrap();
        d.api().fail.set(true);
        let _ = d.list().await;
        let _ = d.search("x").await;
        let _ = d.create("x").await;
        let _ = d.delete(1).await;
        assert!(!snapshot(&d).is_busy());
    }

    #[tokio::test]
    async fn test_reset_clears_state() {
        let d = loaded(3).await;
        d.dispatch(TodoAction::SetSearchText("x".into()));
        d.reset();
        assert_eq!(snapshot(&d), TodoState::default());
    }

    /// Service whose replace/list calls wait until the test releases them
    #[derive(Default)]
    struct GatedApi {
        inner: FakeApi,
        gates: RefCell<VecDeque<oneshot::Sender<()>>>,
    }

    impl GatedApi {
        async fn wait(&self) {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(tx);
            let _ = rx.await;
        }

        fn pending(&self) -> usize {
            self.gates.borrow().len()
        }

        fn release(&self, index: usize) {
            let gate = self.gates.borrow_mut().remove(index).unwrap();
            let _ = gate.send(());
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for GatedApi {
        async fn list_all(&self) -> ApiResult<Vec<Todo>> {
            self.wait().await;
            self.inner.list_all().await
        }

        async fn get(&self, id: TodoId) -> ApiResult<Todo> {
            self.inner.get(id).await
        }

        async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
            self.inner.create(todo).await
        }

        async fn replace(&self, todo: &Todo) -> ApiResult<Todo> {
            self.wait().await;
            self.inner.replace(todo).await
        }

        async fn patch(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
            self.inner.patch(id, patch).await
        }

        async fn delete(&self, id: TodoId) -> ApiResult<bool> {
            self.wait().await;
            self.inner.delete(id).await
        }

        async fn by_user(&self, user_id: UserId) -> ApiResult<Vec<Todo>> {
            self.inner.by_user(user_id).await
        }

        async fn search(&self, query: &str) -> ApiResult<Vec<Todo>> {
            self.wait().await;
            self.inner.search(query).await
        }
    }

    fn gated(n: i64) -> TodoDispatcher<GatedApi, RefCell<TodoState>> {
        let api = GatedApi {
            inner: FakeApi::with(todos(n)),
            ..Default::default()
        };
        let state = RefCell::new(TodoState::default());
        state.borrow_mut().reduce(TodoAction::ReplaceAll(todos(n)));
        TodoDispatcher::new(api, state, 10)
    }

    async fn until_pending(api: &GatedApi, n: usize) {
        while api.pending() < n {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_latest_update_wins_when_answers_arrive_out_of_order() {
        let d = gated(2);
        let api = d.api();

        let (first, second, _) = tokio::join!(
            d.update(1, TodoPatch::title("first")),
            d.update(1, TodoPatch::title("second")),
            async {
                until_pending(api, 2).await;
                api.release(1);
                tokio::task::yield_now().await;
                api.release(0);
            }
        );

        assert_eq!(second, Ok(Outcome::Applied));
        assert_eq!(first, Ok(Outcome::Superseded));
        let state = d.state().borrow().clone();
        assert_eq!(state.find(1).unwrap().title, "second");
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_delete_overtakes_pending_update() {
        let d = gated(2);
        let api = d.api();

        let (update, delete, _) = tokio::join!(
            d.update(2, TodoPatch::completed(true)),
            d.delete(2),
            async {
                until_pending(api, 2).await;
                api.release(1);
                tokio::task::yield_now().await;
                api.release(0);
            }
        );

        assert_eq!(delete, Ok(Outcome::Applied));
        assert_eq!(update, Ok(Outcome::Superseded));
        assert!(d.state().borrow().find(2).is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_reported_despite_newer_update() {
        let d = gated(2);
        let api = d.api();

        let (delete, update, _) = tokio::join!(
            d.delete(2),
            d.update(2, TodoPatch::completed(true)),
            async {
                until_pending(api, 2).await;
                api.inner.fail.set(true);
                api.release(0);
                tokio::task::yield_now().await;
                api.release(0);
            }
        );

        let err = delete.unwrap_err();
        assert!(matches!(err, TodoError::Network { op: TodoOp::Delete(2), .. }));
        assert!(update.is_err());
        let state = d.state().borrow().clone();
        assert!(state.find(2).is_some());
        assert!(!state.is_busy());
    }

    #[tokio::test]
    async fn test_stale_list_after_search_is_dropped() {
        let d = gated(12);
        let api = d.api();

        let (list, search, _) = tokio::join!(d.list(), d.search("todo 11"), async {
            until_pending(api, 2).await;
            api.release(1);
            tokio::task::yield_now().await;
            api.release(0);
        });

        assert_eq!(search, Ok(Outcome::Applied));
        assert_eq!(list, Ok(Outcome::Superseded));
        let state = d.state().borrow().clone();
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, 11);
    }

    #[tokio::test]
    async fn test_dropped_command_releases_flag() {
        let d = gated(1);
        {
            let mut pending = Box::pin(d.list());
            assert!(futures::poll!(pending.as_mut()).is_pending());
            assert!(d.state().borrow().is_loading());
        }
        assert!(!d.state().borrow().is_busy());
    }

    #[tokio::test]
    async fn test_responses_after_reset_are_ignored() {
        let d = gated(3);
        let api = d.api();

        let (list, _) = tokio::join!(d.list(), async {
            until_pending(api, 1).await;
            d.reset();
            api.release(0);
        });

        assert_eq!(list, Ok(Outcome::Superseded));
        assert!(d.state().borrow().todos.is_empty());
    }

    #[tokio::test]
    async fn test_stale_guard_keeps_newer_list_loading() {
        let d = gated(3);
        let api = d.api();

        let (first, second, still_loading) = tokio::join!(
            d.list(),
            async {
                until_pending(api, 1).await;
                d.reset();
                d.list().await
            },
            async {
                until_pending(api, 2).await;
                api.release(0);
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }
                let still_loading = d.state().borrow().is_loading();
                api.release(0);
                still_loading
            }
        );

        assert_eq!(first, Ok(Outcome::Superseded));
        assert_eq!(second, Ok(Outcome::Applied));
        assert!(still_loading);
        let state = d.state().borrow().clone();
        assert_eq!(state.todos.len(), 3);
        assert!(!state.is_busy());
    }
}
