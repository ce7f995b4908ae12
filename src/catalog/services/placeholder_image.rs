use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stock hero shots used when upstream has no imagery.
const STOCK_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&w=1200&q=60",
    "https://images.unsplash.com/photo-1502877338535-766e1452684a?auto=format&fit=crop&w=1200&q=60",
    "https://images.unsplash.com/photo-1494976388531-d1058494cdd8?auto=format&fit=crop&w=1200&q=60",
    "https://images.unsplash.com/photo-1542362567-b07e54358753?auto=format&fit=crop&w=1200&q=60",
];

/// Deterministic placeholder choice: the same vehicle id always gets
/// the same image, so re-running a search renders a stable grid.
pub fn placeholder_image_for(id: &str) -> &'static str {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    STOCK_IMAGES[(hasher.finish() as usize) % STOCK_IMAGES.len()]
}
