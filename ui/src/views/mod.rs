mod ratings;
pub use ratings::NotebookRatings;

mod plots;
pub use plots::PlotRatings;
