mod card_builder;
mod detail_builder;
mod make_matcher;
mod placeholder_image;

pub use card_builder::build_card;
pub use detail_builder::build_detail;
pub use make_matcher::MakeMatcher;
pub use placeholder_image::placeholder_image_for;
