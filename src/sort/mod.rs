// Stepwise comparison sorts.
// Every sort reports a snapshot of the working array after each
// state-changing operation so the lot can be redrawn between steps.

pub mod algorithm;
pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod selection;

pub use algorithm::Algorithm;
pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use selection::selection_sort;
