pub mod category;
pub mod type_system;

pub use category::{TypeCategory, ValueCategory};
pub use type_system::{
    ArrayCheck, CORRESPONDENCE_TABLE, Correspondence, ValueChecker, check_array_value_types,
    check_value_type, value_checker_for_type, value_type_name_for_type,
};
