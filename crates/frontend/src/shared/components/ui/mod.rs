pub mod input;
pub mod select;
pub mod textarea;

pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
