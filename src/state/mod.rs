pub mod role_choices;

pub use role_choices::{
    create_shared_role_choices, PendingRoleChoices, SharedPendingRoleChoices,
};
