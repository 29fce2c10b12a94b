pub mod add_parameter_modal;
pub mod edit_group_modal;
pub mod store;
pub mod table;
