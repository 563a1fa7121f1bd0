pub use studenthub_shared::ItemId;

/// A record that can live in a paginated list.
pub trait Listable {
    /// Unique key used for merge-by-id de-duplication.
    fn item_id(&self) -> ItemId;
}
