//! Controller behaviour against an in-memory backend.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use resource_table::ResourceTable;
use resource_table::api::ResourceApi;
use resource_table::cache::VisibilityStore;
use resource_table::config::TableConfig;
use resource_table::error::ApiError;
use resource_table::error::TableError;
use resource_table::error::ValidationErrors;
use resource_table::model::Column;
use resource_table::model::FormData;
use resource_table::model::Resource;
use resource_table::model::Schema;
use resource_table::model::ScopeId;
use resource_table::model::Value;
use resource_table::notify::ChannelNotifier;
use resource_table::notify::Level;
use resource_table::notify::Notification;
use resource_table::table::DialogState;
use resource_table::table::Direction;
use resource_table::table::LoadStatus;
use resource_table::table::SortState;
use tokio::sync::Notify;
use tokio::sync::mpsc::UnboundedReceiver;

// -----------------------------------------------------------------------------
// Fixtures
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Product {
    id: u32,
    name: String,
    price: i64,
}

static SCHEMA: Schema = Schema {
    kind: "product",
    label: "Product",
    plural: "products",
    columns: &[
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
        Column::new("price", "Price").sortable(),
    ],
    filter_fields: &["name"],
};

impl Resource for Product {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn field(&self, key: &str) -> Value {
        match key {
            "id" => Value::from(self.id),
            "name" => Value::from(&self.name),
            "price" => Value::from(self.price),
            _ => Value::Null,
        }
    }

    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

#[derive(Debug, Clone)]
struct ProductForm {
    name: String,
    price: i64,
}

impl ProductForm {
    fn new(name: &str, price: i64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

impl FormData for ProductForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.into_result()
    }
}

/// In-memory backend with failure injection and call gating.
///
/// Like the real backend, it trims names before storing them.
#[derive(Default)]
struct MockApi {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicU32,
    calls: AtomicUsize,
    failures: Mutex<VecDeque<ApiError>>,
    gates: Mutex<VecDeque<Arc<Notify>>>,
}

impl MockApi {
    fn with_rows(rows: Vec<Product>) -> Arc<Self> {
        let next_id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            rows: Mutex::new(rows),
            next_id: AtomicU32::new(next_id),
            ..Self::default()
        })
    }

    /// Makes the next call fail with `error`.
    fn fail_next(&self, error: ApiError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Makes the next call wait until the returned gate is notified.
    fn hold_next(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().unwrap().push_back(Arc::clone(&gate));
        gate
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.failures.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Lets a table own a handle to a shared mock.
struct SharedApi(Arc<MockApi>);

#[async_trait]
impl ResourceApi for SharedApi {
    type Resource = Product;
    type Form = ProductForm;

    async fn list(&self, _scope: &ScopeId) -> Result<Vec<Product>, ApiError> {
        self.0.enter().await?;
        Ok(self.0.rows.lock().unwrap().clone())
    }

    async fn create(&self, _scope: &ScopeId, form: &ProductForm) -> Result<Product, ApiError> {
        self.0.enter().await?;
        let product = Product {
            id: self.0.next_id.fetch_add(1, Ordering::SeqCst),
            name: form.name.trim().to_string(),
            price: form.price,
        };
        self.0.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        _scope: &ScopeId,
        id: &u32,
        form: &ProductForm,
    ) -> Result<Product, ApiError> {
        self.0.enter().await?;
        let product = Product {
            id: *id,
            name: form.name.trim().to_string(),
            price: form.price,
        };
        let mut rows = self.0.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == *id) {
            *row = product.clone();
        }
        Ok(product)
    }

    async fn delete(&self, _scope: &ScopeId, id: &u32) -> Result<(), ApiError> {
        self.0.enter().await?;
        self.0.rows.lock().unwrap().retain(|r| r.id != *id);
        Ok(())
    }
}

fn init_logger() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Debug, simplelog::Config::default());
}

fn products(names: &[&str]) -> Vec<Product> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Product {
            id: i as u32 + 1,
            name: name.to_string(),
            price: (i as i64 + 1) * 100,
        })
        .collect()
}

fn numbered(count: u32) -> Vec<Product> {
    (1..=count)
        .map(|i| Product {
            id: i,
            name: format!("Product {i}"),
            price: i64::from(i),
        })
        .collect()
}

struct Harness {
    api: Arc<MockApi>,
    table: ResourceTable<SharedApi>,
    toasts: UnboundedReceiver<Notification>,
}

impl Harness {
    fn new(rows: Vec<Product>) -> Self {
        Self::with_config(rows, TableConfig::default(), None)
    }

    fn with_config(rows: Vec<Product>, config: TableConfig, store: Option<VisibilityStore>) -> Self {
        init_logger();
        let api = MockApi::with_rows(rows);
        let (notifier, toasts) = ChannelNotifier::new();
        let mut builder = ResourceTable::builder(SharedApi(Arc::clone(&api)))
            .notifier(notifier)
            .config(config);
        if let Some(store) = store {
            builder = builder.visibility_store(store);
        }
        Self {
            api,
            table: builder.build(),
            toasts,
        }
    }

    async fn loaded(rows: Vec<Product>) -> Self {
        let harness = Self::new(rows);
        harness.table.load(1).await.unwrap();
        harness
    }

    fn drain(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(notification) = self.toasts.try_recv() {
            out.push(notification);
        }
        out
    }

    fn page_names(&self) -> Vec<String> {
        self.table.view().rows.into_iter().map(|r| r.name).collect()
    }
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_first_page_of_loaded_collection() {
    let harness = Harness::loaded(numbered(25)).await;

    let view = harness.table.view();
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.total_count, 25);
    assert_eq!(view.status, LoadStatus::Ready);
    assert_eq!(view.page_size_options, vec![10, 20, 30, 40, 50]);
}

#[tokio::test]
async fn test_load_failure_keeps_collection() {
    let mut harness = Harness::loaded(numbered(3)).await;
    harness.api.fail_next(ApiError::http(500));

    let result = harness.table.refresh().await;

    assert!(matches!(result, Err(TableError::Api(_))));
    assert_eq!(harness.table.collection().len(), 3);
    assert_eq!(
        harness.table.status(),
        LoadStatus::Failed {
            message: "Failed to load products".to_string()
        }
    );
    assert_eq!(harness.drain(), vec![Notification::error("Failed to load products")]);
}

#[tokio::test]
async fn test_load_failure_uses_server_message() {
    let mut harness = Harness::new(numbered(3));
    harness.api.fail_next(ApiError::http_with_message(403, "Not allowed"));

    assert!(harness.table.load(1).await.is_err());
    assert_eq!(harness.drain(), vec![Notification::error("Not allowed")]);
}

#[tokio::test]
async fn test_refresh_without_scope() {
    let harness = Harness::new(numbered(3));
    assert!(matches!(harness.table.refresh().await, Err(TableError::NoScope)));
    assert_eq!(harness.api.calls(), 0);
}

#[tokio::test]
async fn test_loading_status_while_in_flight() {
    let harness = Harness::new(numbered(3));
    let gate = harness.api.hold_next();

    let (result, ()) = tokio::join!(harness.table.load(1), async {
        assert!(harness.table.is_loading());
        assert!(harness.table.view().is_loading());
        gate.notify_one();
    });

    assert!(result.is_ok());
    assert!(!harness.table.is_loading());
}

#[tokio::test]
async fn test_superseded_load_is_dropped() {
    let harness = Harness::new(numbered(3));
    let gate = harness.api.hold_next();

    let (first, second) = tokio::join!(harness.table.load(1), async {
        harness.api.rows.lock().unwrap().truncate(1);
        let second = harness.table.load(1).await;
        // The held load resolves with an empty collection.
        harness.api.rows.lock().unwrap().clear();
        gate.notify_one();
        second
    });

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(harness.table.collection().len(), 1);
    assert_eq!(harness.table.status(), LoadStatus::Ready);
}

// -----------------------------------------------------------------------------
// Filtering, sorting, pagination
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_sort_cycles_through_three_states() {
    let harness = Harness::loaded(products(&["b", "a", "c"])).await;

    assert_eq!(
        harness.table.sort("name"),
        SortState::By {
            column: "name",
            direction: Direction::Asc
        }
    );
    assert_eq!(harness.page_names(), vec!["a", "b", "c"]);

    harness.table.sort("name");
    assert_eq!(harness.page_names(), vec!["c", "b", "a"]);

    assert_eq!(harness.table.sort("name"), SortState::Unsorted);
    assert_eq!(harness.page_names(), vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_sorting_another_column_starts_ascending() {
    let harness = Harness::loaded(products(&["b", "a", "c"])).await;

    harness.table.sort("name");
    harness.table.sort("name");
    let state = harness.table.sort("price");

    assert_eq!(state.column(), Some("price"));
    assert_eq!(state.direction(), Some(Direction::Asc));
}

#[tokio::test]
async fn test_unsortable_column_is_ignored() {
    let harness = Harness::loaded(products(&["b", "a"])).await;

    assert_eq!(harness.table.sort("id"), SortState::Unsorted);
    assert_eq!(harness.table.sort("missing"), SortState::Unsorted);
}

#[tokio::test]
async fn test_filter_without_matches() {
    let mut harness = Harness::loaded(numbered(25)).await;

    harness.table.set_filter("xyz");

    let view = harness.table.view();
    assert!(view.rows.is_empty());
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.status, LoadStatus::Ready);
    assert!(harness.drain().is_empty());
}

#[tokio::test]
async fn test_filter_is_idempotent() {
    let harness = Harness::loaded(numbered(25)).await;

    harness.table.set_filter("product 2");
    let once = harness.page_names();
    harness.table.set_filter("product 2");

    assert_eq!(harness.page_names(), once);
    assert_eq!(harness.table.filter(), "product 2");
}

#[tokio::test]
async fn test_filter_clamps_current_page() {
    let harness = Harness::loaded(numbered(25)).await;
    harness.table.set_page(3);
    assert_eq!(harness.table.current_page(), 3);

    // "Product 1" and "Product 10" through "Product 19".
    harness.table.set_filter("PRODUCT 1");

    assert_eq!(harness.table.filtered().len(), 11);
    assert_eq!(harness.table.total_pages(), 2);
    assert_eq!(harness.table.current_page(), 2);
    assert_eq!(harness.table.paginated().len(), 1);
}

#[tokio::test]
async fn test_predicate_is_anded_with_filter() {
    let harness = Harness::loaded(numbered(25)).await;

    harness.table.set_filter("product 2");
    harness.table.set_predicate(Arc::new(|p: &Product| p.price % 2 == 0));
    let ids: Vec<u32> = harness.table.filtered().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 20, 22, 24]);

    harness.table.clear_predicate();
    assert_eq!(harness.table.filtered().len(), 7);
}

#[tokio::test]
async fn test_predicate_change_returns_to_first_page() {
    let harness = Harness::loaded(numbered(25)).await;
    harness.table.set_page(3);

    harness.table.set_predicate(Arc::new(|p: &Product| p.price > 0));
    assert_eq!(harness.table.current_page(), 1);

    harness.table.set_page(2);
    harness.table.clear_predicate();
    assert_eq!(harness.table.current_page(), 1);
}

#[tokio::test]
async fn test_page_size_change_returns_to_first_page() {
    let harness = Harness::loaded(numbered(45)).await;
    harness.table.set_page(3);

    harness.table.set_page_size(20);

    assert_eq!(harness.table.current_page(), 1);
    assert_eq!(harness.table.page_size(), 20);
    assert_eq!(harness.table.total_pages(), 3);
}

#[tokio::test]
async fn test_page_out_of_range_is_clamped() {
    let harness = Harness::loaded(numbered(25)).await;

    harness.table.set_page(9);
    assert_eq!(harness.table.current_page(), 3);
    assert_eq!(harness.table.paginated().len(), 5);

    harness.table.set_page(0);
    assert_eq!(harness.table.current_page(), 1);
}

// -----------------------------------------------------------------------------
// Column visibility
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_last_visible_column_stays_visible() {
    let config = TableConfig::default().with_hidden_columns(&["id", "price"]);
    let harness = Harness::with_config(numbered(3), config, None);

    assert!(!harness.table.set_column_visible("name", false));

    let view = harness.table.view();
    assert_eq!(view.columns.len(), 1);
    assert_eq!(view.columns[0].key, "name");
    assert!(harness.table.visibility().is_visible("name"));
}

#[tokio::test]
async fn test_visibility_persists_in_store() {
    let store = VisibilityStore::new();
    let first = Harness::with_config(numbered(3), TableConfig::default(), Some(store.clone()));

    assert!(first.table.set_column_visible("price", false));
    assert!(!first.table.set_column_visible("unknown", false));

    let second = Harness::with_config(numbered(3), TableConfig::default(), Some(store.clone()));
    assert!(!second.table.visibility().is_visible("price"));
    assert!(second.table.visibility().is_visible("name"));
    assert_eq!(store.len(), 1);
}

// -----------------------------------------------------------------------------
// Dialogs and writes
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_create_appends_and_closes_dialog() {
    let mut harness = Harness::loaded(numbered(3)).await;
    harness.table.open_add();

    let created = harness.table.create(ProductForm::new("Fresh", 700)).await.unwrap();

    assert_eq!(created.id, 4);
    assert!(harness.table.dialog().is_closed());
    assert_eq!(harness.table.collection().last(), Some(&created));
    assert_eq!(
        harness.drain(),
        vec![Notification::success("Product created successfully")]
    );

    harness.table.refresh().await.unwrap();
    assert_eq!(harness.table.find(&4), Some(created));
}

#[tokio::test]
async fn test_writes_apply_server_representation() {
    let harness = Harness::loaded(numbered(3)).await;

    let created = harness.table.create(ProductForm::new("  Fresh  ", 700)).await.unwrap();
    assert_eq!(created.name, "Fresh");
    assert_eq!(harness.table.find(&4).map(|p| p.name), Some("Fresh".to_string()));

    harness.table.update(2, ProductForm::new(" Renamed ", 5)).await.unwrap();
    assert_eq!(harness.table.find(&2).map(|p| p.name), Some("Renamed".to_string()));
    assert_eq!(harness.table.collection(), harness.api.rows.lock().unwrap().clone());
}

#[tokio::test]
async fn test_rejected_create_keeps_dialog_open() {
    let mut harness = Harness::loaded(numbered(3)).await;
    harness.table.open_add();
    harness
        .api
        .fail_next(ApiError::http_with_message(400, "duplicate"));

    let result = harness.table.create(ProductForm::new("Product 1", 1)).await;

    let err = result.unwrap_err();
    assert_eq!(err.api().and_then(ApiError::status_code), Some(400));
    assert_eq!(harness.table.collection().len(), 3);
    assert!(harness.table.dialog().is_adding());

    let toasts = harness.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, Level::Error);
    assert!(toasts[0].message.contains("duplicate"));
}

#[tokio::test]
async fn test_generic_message_when_server_is_silent() {
    let mut harness = Harness::loaded(numbered(3)).await;
    harness.api.fail_next(ApiError::http(502));

    assert!(harness.table.create(ProductForm::new("x", 1)).await.is_err());
    assert_eq!(harness.drain(), vec![Notification::error("Failed to create product")]);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_api() {
    let mut harness = Harness::loaded(numbered(3)).await;
    let calls = harness.api.calls();
    harness.table.open_add();

    let result = harness.table.create(ProductForm::new("  ", 1)).await;

    let Err(TableError::Validation(errors)) = result else {
        panic!("expected a validation error");
    };
    assert_eq!(errors.for_field("name").count(), 1);
    assert_eq!(harness.api.calls(), calls);
    assert!(harness.table.dialog().is_adding());
    assert!(harness.drain().is_empty());
}

#[tokio::test]
async fn test_submit_edit_replaces_target() {
    let mut harness = Harness::loaded(numbered(3)).await;
    assert!(harness.table.open_edit(&2));
    assert!(harness.table.dialog().is_editing());

    let updated = harness
        .table
        .submit_edit(ProductForm::new("Renamed", 42))
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(harness.table.dialog().is_closed());
    assert_eq!(harness.table.find(&2).map(|p| p.price), Some(42));
    assert_eq!(harness.table.collection()[1].name, "Renamed");
    assert_eq!(
        harness.drain(),
        vec![Notification::success("Product updated successfully")]
    );
}

#[tokio::test]
async fn test_failed_update_keeps_edit_dialog() {
    let harness = Harness::loaded(numbered(3)).await;
    harness.table.open_edit(&1);
    harness.api.fail_next(ApiError::Timeout(std::time::Duration::from_secs(30)));

    assert!(harness.table.submit_edit(ProductForm::new("x", 1)).await.is_err());

    assert!(matches!(harness.table.dialog(), DialogState::Editing(p) if p.id == 1));
    assert_eq!(harness.table.find(&1).map(|p| p.name), Some("Product 1".to_string()));
}

#[tokio::test]
async fn test_confirm_delete_removes_target() {
    let mut harness = Harness::loaded(numbered(11)).await;
    harness.table.set_page(2);
    assert!(harness.table.open_delete(&11));

    harness.table.confirm_delete().await.unwrap();

    assert!(harness.table.dialog().is_closed());
    assert!(harness.table.find(&11).is_none());
    assert_eq!(harness.table.current_page(), 1);
    assert_eq!(
        harness.drain(),
        vec![Notification::success("Product deleted successfully")]
    );
}

#[tokio::test]
async fn test_dialog_targets() {
    let harness = Harness::loaded(numbered(3)).await;

    assert!(!harness.table.open_edit(&99));
    assert!(harness.table.dialog().is_closed());
    assert!(matches!(
        harness.table.confirm_delete().await,
        Err(TableError::NoTarget)
    ));
    assert!(matches!(
        harness.table.submit_edit(ProductForm::new("x", 1)).await,
        Err(TableError::NoTarget)
    ));

    harness.table.open_delete(&3);
    assert_eq!(harness.table.dialog().target().map(|p| p.id), Some(3));
    harness.table.close_dialog();
    assert!(harness.table.dialog().is_closed());
}

#[tokio::test]
async fn test_stale_update_after_delete_is_discarded() {
    let mut harness = Harness::loaded(numbered(3)).await;
    let gate = harness.api.hold_next();

    let (update, delete) = tokio::join!(harness.table.update(2, ProductForm::new("Late", 1)), async {
        let delete = harness.table.delete(2).await;
        gate.notify_one();
        delete
    });

    assert!(update.is_ok());
    assert!(delete.is_ok());
    assert!(harness.table.find(&2).is_none());
    assert_eq!(harness.table.collection().len(), 2);
    assert_eq!(
        harness.drain(),
        vec![Notification::success("Product deleted successfully")]
    );
}

#[tokio::test]
async fn test_latest_of_two_updates_wins() {
    let harness = Harness::loaded(numbered(3)).await;
    let gate = harness.api.hold_next();

    let (first, second) = tokio::join!(harness.table.update(1, ProductForm::new("First", 1)), async {
        let second = harness.table.update(1, ProductForm::new("Second", 2)).await;
        gate.notify_one();
        second
    });

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(harness.table.find(&1).map(|p| p.name), Some("Second".to_string()));
}

#[tokio::test]
async fn test_earlier_update_applies_when_newer_one_fails() {
    let mut harness = Harness::loaded(numbered(3)).await;
    harness.table.open_edit(&1);
    let gate = harness.api.hold_next();

    let (first, second) = tokio::join!(harness.table.update(1, ProductForm::new("First", 1)), async {
        harness.api.fail_next(ApiError::http_with_message(400, "bad"));
        let second = harness.table.update(1, ProductForm::new("Second", 2)).await;
        gate.notify_one();
        second
    });

    assert!(first.is_ok());
    assert!(second.is_err());

    let server = harness.api.rows.lock().unwrap()[0].clone();
    assert_eq!(server.name, "First");
    assert_eq!(harness.table.find(&1), Some(server));
    assert!(harness.table.dialog().is_closed());
    assert_eq!(
        harness.drain(),
        vec![
            Notification::error("bad"),
            Notification::success("Product updated successfully"),
        ]
    );
}

#[tokio::test]
async fn test_stale_failure_is_not_reported() {
    let mut harness = Harness::loaded(numbered(3)).await;
    let gate = harness.api.hold_next();

    let (first, second) = tokio::join!(harness.table.update(1, ProductForm::new("First", 1)), async {
        let second = harness.table.update(1, ProductForm::new("Second", 2)).await;
        harness.api.fail_next(ApiError::http_with_message(500, "late"));
        gate.notify_one();
        second
    });

    assert!(first.is_err());
    assert!(second.is_ok());
    assert_eq!(harness.table.find(&1).map(|p| p.name), Some("Second".to_string()));
    assert_eq!(
        harness.drain(),
        vec![Notification::success("Product updated successfully")]
    );
}

// -----------------------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_unmount_discards_in_flight_load() {
    let mut harness = Harness::new(numbered(3));
    let gate = harness.api.hold_next();

    let (result, ()) = tokio::join!(harness.table.load(1), async {
        harness.table.unmount();
        gate.notify_one();
    });

    assert!(matches!(result, Err(TableError::Unmounted)));
    assert!(harness.table.collection().is_empty());
    assert!(!harness.table.is_mounted());
    assert!(harness.drain().is_empty());
}

#[tokio::test]
async fn test_unmount_silences_write_results() {
    let mut harness = Harness::loaded(numbered(3)).await;
    let gate = harness.api.hold_next();

    let (result, ()) = tokio::join!(harness.table.delete(1), async {
        harness.table.unmount();
        gate.notify_one();
    });

    assert!(result.is_ok());
    assert_eq!(harness.table.collection().len(), 3);
    assert!(harness.drain().is_empty());

    assert!(matches!(harness.table.load(1).await, Err(TableError::Unmounted)));
}

#[tokio::test]
async fn test_clones_share_state() {
    let harness = Harness::loaded(numbered(3)).await;
    let other = harness.table.clone();

    other.set_filter("product 3");

    assert_eq!(harness.table.filtered().len(), 1);
}
