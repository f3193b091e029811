mod exclude;
mod fields;
mod precision;
mod rename;
mod token_allocator;

pub use exclude::is_excluded;
pub use fields::{
    is_array_reference_field, is_id_field, is_identity_field, is_name_field,
    is_single_reference_field, ID_FIELD, NAME_FIELD, PATH_SEPARATOR,
};
pub use precision::reduce_precision;
pub use rename::RenameContext;
pub use token_allocator::TokenAllocator;
