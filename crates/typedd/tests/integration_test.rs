use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use typedd::{
    Boundary, Complete, ContractViolation, Optional, Repository, Service, ValidatedRepository,
    ValidatedService, ValidationMode,
};

// --- A small inventory domain, defined outside the crate ---

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
struct Sku(u32);

impl Complete for Sku {
    fn is_complete(&self) -> bool {
        self.0 != 0
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Label(String);

impl Complete for Label {
    fn is_complete(&self) -> bool {
        !self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Complete)]
enum Stock {
    Untracked,
    Counted { on_hand: Label, #[complete(skip)] reserved: u32 },
    Backordered(Label),
}

impl Default for Stock {
    fn default() -> Self {
        Stock::Counted {
            on_hand: Label::default(),
            reserved: 0,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Complete)]
struct Item {
    sku: Sku,
    name: Label,
    stock: Stock,
    tags: Vec<Label>,
}

#[derive(Debug, Default, Clone, PartialEq, Complete)]
struct Tagged<T> {
    inner: T,
    labels: Option<Box<[Label]>>,
}

#[derive(Debug, Default, Clone, PartialEq, Complete)]
struct Rename {
    sku: Sku,
    name: Optional<Label>,
}

#[derive(Debug, thiserror::Error)]
enum InventoryError {
    #[error("no item {0:?}")]
    Missing(Sku),
    #[error(transparent)]
    Defect(#[from] ContractViolation),
}

// --- Components ---

/// Stores whatever it is given, and can be told to hand back garbage.
#[derive(Default)]
struct MemoryRepository {
    items: Mutex<HashMap<Sku, Item>>,
    corrupt_reads: bool,
}

#[async_trait]
impl Repository for MemoryRepository {
    type Id = Sku;
    type Create = Item;
    type Update = Rename;
    type Entity = Item;
    type Error = InventoryError;

    async fn create(&self, item: Item) -> Result<Item, InventoryError> {
        self.items.lock().unwrap().insert(item.sku, item.clone());
        Ok(item)
    }

    async fn update(&self, rename: Rename) -> Result<(), InventoryError> {
        let mut items = self.items.lock().unwrap();
        let item = items.get_mut(&rename.sku).ok_or(InventoryError::Missing(rename.sku))?;
        if let Some(name) = rename.name.into_present() {
            item.name = name;
        }
        Ok(())
    }

    async fn get(&self, sku: Sku) -> Result<Item, InventoryError> {
        let item = self.items.lock().unwrap().get(&sku).cloned();
        match item {
            Some(_) if self.corrupt_reads => Ok(Item { sku, ..Item::default() }),
            Some(item) => Ok(item),
            None => Err(InventoryError::Missing(sku)),
        }
    }
}

struct Inventory<R> {
    repository: R,
}

#[async_trait]
impl<R> Service for Inventory<R>
where
    R: Repository<Id = Sku, Create = Item, Update = Rename, Entity = Item, Error = InventoryError>,
{
    type Id = Sku;
    type Create = Item;
    type Update = Rename;
    type Entity = Item;
    type Error = InventoryError;

    async fn create(&self, item: Item) -> Result<Item, InventoryError> {
        self.repository.create(item).await
    }

    async fn update(&self, rename: Rename) -> Result<(), InventoryError> {
        self.repository.update(rename).await
    }

    async fn get(&self, sku: Sku) -> Result<Item, InventoryError> {
        self.repository.get(sku).await
    }
}

type SharedInventory =
    Arc<dyn Service<Id = Sku, Create = Item, Update = Rename, Entity = Item, Error = InventoryError>>;

fn wire(repository: MemoryRepository, mode: ValidationMode) -> SharedInventory {
    match mode {
        ValidationMode::Strict => Arc::new(ValidatedService::new(Inventory {
            repository: ValidatedRepository::new(repository),
        })),
        ValidationMode::Lean => Arc::new(Inventory { repository }),
    }
}

fn label(s: &str) -> Label {
    Label(s.to_string())
}

fn widget() -> Item {
    Item {
        sku: Sku(7),
        name: label("widget"),
        stock: Stock::Counted {
            on_hand: label("12"),
            reserved: 0,
        },
        tags: vec![label("metal")],
    }
}

// --- Tests ---

#[test]
fn test_derive_across_crates() {
    assert!(widget().is_complete());
    assert!(!Item::default().is_complete());
    assert!(Stock::Untracked.is_complete());
    assert!(!Stock::Backordered(Label::default()).is_complete());

    let mut item = widget();
    item.tags.push(Label::default());
    assert!(!item.is_complete());
}

#[test]
fn test_derive_on_generic_wrapper() {
    let tagged = Tagged {
        inner: widget(),
        labels: Some(vec![label("new")].into_boxed_slice()),
    };
    assert!(tagged.is_complete());

    let untagged = Tagged {
        inner: widget(),
        labels: None,
    };
    assert!(untagged.is_complete());

    let broken = Tagged {
        inner: Sku(0),
        labels: None,
    };
    assert!(!broken.is_complete());
}

#[tokio::test]
async fn test_modes_behave_the_same_for_valid_values() {
    for mode in [ValidationMode::Strict, ValidationMode::Lean] {
        let inventory = wire(MemoryRepository::default(), mode);

        inventory.create(widget()).await.unwrap();
        let rename = Rename {
            sku: Sku(7),
            name: Optional::present(label("gadget")).unwrap(),
        };
        inventory.update(rename).await.unwrap();

        let item = inventory.get(Sku(7)).await.unwrap();
        assert_eq!(item.name, label("gadget"), "mode {mode}");
        assert_eq!(item.stock, widget().stock);
    }
}

#[tokio::test]
async fn test_strict_rejects_incomplete_input() {
    let inventory = wire(MemoryRepository::default(), ValidationMode::Strict);

    let err = inventory.create(Item::default()).await.unwrap_err();
    let violation = match err {
        InventoryError::Defect(violation) => violation,
        other => panic!("expected a defect, got {other:?}"),
    };
    assert_eq!(violation.boundary(), Boundary::ServiceInput);
    assert!(violation.incomplete().type_name().ends_with("Item"));

    // Ids are checked too.
    assert!(matches!(
        inventory.get(Sku(0)).await,
        Err(InventoryError::Defect(_))
    ));
}

#[tokio::test]
async fn test_strict_rejects_corrupt_repository_output() {
    let repository = MemoryRepository {
        corrupt_reads: true,
        ..MemoryRepository::default()
    };
    let inventory = wire(repository, ValidationMode::Strict);
    inventory.create(widget()).await.unwrap();

    let err = inventory.get(Sku(7)).await.unwrap_err();
    let violation = match err {
        InventoryError::Defect(violation) => violation,
        other => panic!("expected a defect, got {other:?}"),
    };
    assert_eq!(violation.boundary(), Boundary::RepositoryOutput);
}

#[tokio::test]
async fn test_lean_lets_corrupt_output_through() {
    let repository = MemoryRepository {
        corrupt_reads: true,
        ..MemoryRepository::default()
    };
    let inventory = wire(repository, ValidationMode::Lean);
    inventory.create(widget()).await.unwrap();

    let item = inventory.get(Sku(7)).await.unwrap();
    assert!(!item.is_complete());
}

#[tokio::test]
async fn test_domain_errors_are_not_defects() {
    let inventory = wire(MemoryRepository::default(), ValidationMode::Strict);
    assert!(matches!(
        inventory.get(Sku(99)).await,
        Err(InventoryError::Missing(Sku(99)))
    ));
}

#[tokio::test]
async fn test_decorators_stack_over_shared_repository() {
    let shared: Arc<MemoryRepository> = Arc::new(MemoryRepository::default());
    let repository = ValidatedRepository::new(shared.clone());

    repository.create(widget()).await.unwrap();
    assert_eq!(shared.get(Sku(7)).await.unwrap(), widget());
    assert_eq!(repository.inner().get(Sku(7)).await.unwrap(), widget());
}
