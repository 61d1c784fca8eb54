//! Layout: regions, the tree walk and pagination.
//!
//! # Module Structure
//!
//! - `region` - finds the independently paginated subtrees
//! - `walk` - recursive walk threading the pagination accumulator
//! - `paginate` - places blocks and splits them into pages

mod paginate;
mod region;
mod walk;

pub use paginate::{Page, Paginator, PaginatorState, Placement};
pub use region::{Region, find_regions, is_slide_wrapper};
pub use walk::{WalkStats, Walker};
