pub mod element;
pub mod label;
pub mod processor;
pub mod state;

pub use element::ElementDescriptor;
pub use label::label_text;
pub use processor::PageSnapshot;
pub use state::{LocatedElement, PageState};
