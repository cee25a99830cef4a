//! The session-router state machine.
//!
//! The router decides which top-level area the user lands in. The state is
//! re-derived from the persisted session and a fresh profile lookup at every
//! app launch -- a cached role is never trusted across launches. There is no
//! terminal state; explicit logout returns any state to `Unauthenticated`.

use crate::profile::{Profile, Role};

/// Top-level navigation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    /// No valid session. The only state reachable from every other state.
    Unauthenticated,
    /// Authenticated but no profile row exists yet (first run after sign-up).
    Unprofiled,
    /// Authenticated with the organizer role.
    Organizer,
    /// Authenticated with any non-organizer profile.
    Participant,
}

impl RouterState {
    /// Derive the post-login state from a profile lookup.
    ///
    /// An absent profile routes to the role-choice gate; an organizer role
    /// routes to the organizer area; anything else (including an explicit
    /// participant role) routes to the participant area.
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        match profile {
            None => Self::Unprofiled,
            Some(p) => match p.role {
                Some(Role::Organizer) => Self::Organizer,
                _ => Self::Participant,
            },
        }
    }

    /// Derive the state entered after the user submits a role choice.
    pub fn from_role(role: Role) -> Self {
        match role {
            Role::Organizer => Self::Organizer,
            Role::Participant => Self::Participant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn profile(role: Option<Role>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            full_name: "Asha Rao".into(),
            year: 2,
            role,
        }
    }

    #[test]
    fn absent_profile_routes_to_role_gate() {
        assert_eq!(RouterState::from_profile(None), RouterState::Unprofiled);
    }

    #[test]
    fn organizer_profile_routes_to_organizer_area() {
        let p = profile(Some(Role::Organizer));
        assert_eq!(RouterState::from_profile(Some(&p)), RouterState::Organizer);
    }

    #[test]
    fn anything_else_routes_to_participant_area() {
        let p = profile(Some(Role::Participant));
        assert_eq!(RouterState::from_profile(Some(&p)), RouterState::Participant);

        // A profile row with no role set is treated as a participant.
        let p = profile(None);
        assert_eq!(RouterState::from_profile(Some(&p)), RouterState::Participant);
    }

    #[test]
    fn role_choice_transitions() {
        assert_eq!(RouterState::from_role(Role::Organizer), RouterState::Organizer);
        assert_eq!(
            RouterState::from_role(Role::Participant),
            RouterState::Participant
        );
    }
}
