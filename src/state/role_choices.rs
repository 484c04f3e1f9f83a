use poise::serenity_prelude::{RoleId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Role choices made via the selection button, waiting for the matching
/// member-join event.
///
/// Process-lifetime only: a restart between selection and join loses the
/// entry, and the member has to be assigned their role manually.
#[derive(Debug, Default)]
pub struct PendingRoleChoices {
    choices: HashMap<UserId, RoleId>,
}

impl PendingRoleChoices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice, replacing any earlier one for the same user.
    pub fn set(&mut self, user_id: UserId, role_id: RoleId) {
        self.choices.insert(user_id, role_id);
    }

    /// Consume the choice for a user. Read-once: a second take for the same
    /// user returns None until a new choice is made.
    pub fn take(&mut self, user_id: UserId) -> Option<RoleId> {
        self.choices.remove(&user_id)
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

pub type SharedPendingRoleChoices = Arc<RwLock<PendingRoleChoices>>;

pub fn create_shared_role_choices() -> SharedPendingRoleChoices {
    Arc::new(RwLock::new(PendingRoleChoices::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId::new(100);
    const ROLE_A: RoleId = RoleId::new(200);
    const ROLE_B: RoleId = RoleId::new(201);

    #[test]
    fn test_take_consumes_entry() {
        let mut choices = PendingRoleChoices::new();
        choices.set(USER, ROLE_A);

        assert_eq!(choices.take(USER), Some(ROLE_A));
        assert_eq!(choices.take(USER), None);
        assert!(choices.is_empty());
    }

    #[test]
    fn test_set_overwrites_prior_choice() {
        let mut choices = PendingRoleChoices::new();
        choices.set(USER, ROLE_A);
        choices.set(USER, ROLE_B);

        assert_eq!(choices.take(USER), Some(ROLE_B));
    }

    #[test]
    fn test_take_without_choice_is_none() {
        let mut choices = PendingRoleChoices::new();
        assert_eq!(choices.take(USER), None);
    }

    #[tokio::test]
    async fn test_shared_map_across_handles() {
        let shared = create_shared_role_choices();
        let writer = shared.clone();

        writer.write().await.set(USER, ROLE_A);

        assert_eq!(shared.write().await.take(USER), Some(ROLE_A));
        assert_eq!(shared.write().await.take(USER), None);
    }
}
