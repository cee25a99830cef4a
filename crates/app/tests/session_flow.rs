//! Launch, login, role choice, and logout routing over in-memory stores.

mod common;

use assert_matches::assert_matches;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::profile::{ProfileUpsert, Role};
use campusbuzz_core::session::RouterState;

#[tokio::test]
async fn launch_without_a_token_is_unauthenticated() {
    let env = common::env();
    let state = env.router.launch(None).await.unwrap();
    assert_eq!(state, RouterState::Unauthenticated);
}

#[tokio::test]
async fn launch_with_an_unknown_token_is_unauthenticated() {
    let env = common::env();
    let state = env.router.launch(Some("not-a-real-token")).await.unwrap();
    assert_eq!(state, RouterState::Unauthenticated);
}

#[tokio::test]
async fn fresh_sign_up_lands_in_the_role_gate() {
    let env = common::env();

    let login = env
        .router
        .sign_up("asha@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();
    assert_eq!(login.state, RouterState::Unprofiled);

    // Relaunching with the persisted token re-derives the same state.
    let state = env.router.launch(Some(&login.session.token)).await.unwrap();
    assert_eq!(state, RouterState::Unprofiled);
}

#[tokio::test]
async fn duplicate_email_sign_up_is_a_conflict() {
    let env = common::env();
    env.router
        .sign_up("asha@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();

    let err = env
        .router
        .sign_up("asha@campus.edu", "different-pass")
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));
}

#[tokio::test]
async fn choosing_organizer_enters_the_organizer_area() {
    let env = common::env();
    let login = env
        .router
        .sign_up("org@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();

    let state = env
        .router
        .choose_role(
            login.session.account_id,
            ProfileUpsert {
                full_name: "Ravi Kumar".into(),
                year: 3,
                role: Role::Organizer,
            },
        )
        .await
        .unwrap();
    assert_eq!(state, RouterState::Organizer);

    // The role sticks across launches.
    let state = env.router.launch(Some(&login.session.token)).await.unwrap();
    assert_eq!(state, RouterState::Organizer);
}

#[tokio::test]
async fn choosing_participant_enters_the_participant_area() {
    let env = common::env();
    let login = env
        .router
        .sign_up("par@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();

    let state = env
        .router
        .choose_role(
            login.session.account_id,
            ProfileUpsert {
                full_name: "Asha Rao".into(),
                year: 2,
                role: Role::Participant,
            },
        )
        .await
        .unwrap();
    assert_eq!(state, RouterState::Participant);
}

#[tokio::test]
async fn invalid_role_choice_leaves_the_account_unprofiled() {
    let env = common::env();
    let login = env
        .router
        .sign_up("asha@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();

    let err = env
        .router
        .choose_role(
            login.session.account_id,
            ProfileUpsert {
                full_name: "   ".into(),
                year: 2,
                role: Role::Participant,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));

    // Nothing was written; the next launch still hits the role gate.
    let state = env.router.launch(Some(&login.session.token)).await.unwrap();
    assert_eq!(state, RouterState::Unprofiled);
}

#[tokio::test]
async fn sign_in_re_derives_the_area_from_the_stored_role() {
    let env = common::env();
    common::signed_up(&env, "org@campus.edu", Role::Organizer).await;

    let login = env
        .router
        .sign_in("org@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();
    assert_eq!(login.state, RouterState::Organizer);
}

#[tokio::test]
async fn bad_credentials_are_unauthorized_without_detail() {
    let env = common::env();
    common::signed_up(&env, "asha@campus.edu", Role::Participant).await;

    let wrong_pass = env
        .router
        .sign_in("asha@campus.edu", "not-the-password")
        .await
        .unwrap_err();
    let unknown_email = env
        .router
        .sign_in("nobody@campus.edu", "hunter2-hunter2")
        .await
        .unwrap_err();

    // Same message either way; which half was wrong is not revealed.
    assert_matches!(&wrong_pass, CoreError::Unauthorized(_));
    assert_matches!(&unknown_email, CoreError::Unauthorized(_));
    assert_eq!(wrong_pass.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let env = common::env();
    common::signed_up(&env, "asha@campus.edu", Role::Participant).await;
    let login = env
        .router
        .sign_in("asha@campus.edu", "hunter2-hunter2")
        .await
        .unwrap();

    let state = env.router.logout(&login.session.token).await.unwrap();
    assert_eq!(state, RouterState::Unauthenticated);

    // The old token no longer resolves to a session.
    let state = env.router.launch(Some(&login.session.token)).await.unwrap();
    assert_eq!(state, RouterState::Unauthenticated);

    // Logging out again is a harmless no-op.
    let state = env.router.logout(&login.session.token).await.unwrap();
    assert_eq!(state, RouterState::Unauthenticated);
}
