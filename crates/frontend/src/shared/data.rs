/// The data-fetching boundary the list screens consume.
///
/// Today every implementation is a mock generator behind a simulated delay;
/// swapping in the real gateway API later only replaces these impls, not the
/// filter/sort/aggregate logic sitting on top.
pub trait DataSource {
    type Item;

    /// Fetch the full collection for one screen.
    async fn list(&self) -> Result<Vec<Self::Item>, String>;
}
